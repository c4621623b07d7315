//! Webhook errors.

use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::event_type::EventType;

/// Webhook error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Error while parsing webhook event for type {event_type},\n  caused by: {source}")]
    EventParseError {
        event_type: EventType,
        source: serde_json::Error,
    },

    #[error("Missing webhook signature.")]
    MissingWebhookSignature,

    #[error("Invalid webhook signature.")]
    InvalidWebhookSignature,

    #[error("I/O error,\n  caused by: {source}")]
    IoError { source: std::io::Error },
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ServerError::InvalidWebhookSignature => StatusCode::FORBIDDEN,
            ServerError::MissingWebhookSignature => StatusCode::UNAUTHORIZED,
            ServerError::EventParseError { .. } => StatusCode::BAD_REQUEST,
            ServerError::IoError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Webhook senders get a bare status code, never error details.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).finish()
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;
