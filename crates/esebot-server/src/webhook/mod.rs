//! Webhook handlers.

mod ping;
mod pulls;
mod reviews;

#[cfg(test)]
pub(crate) mod tests;

use std::convert::TryFrom;

use actix_web::{web, HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use serde::Deserialize;
use tracing::{info, warn};

use self::{ping::parse_ping_event, pulls::parse_pull_request_event, reviews::parse_review_event};
use crate::{
    constants::GITHUB_EVENT_HEADER, event_type::EventType, server::AppContext,
    utils::convert_payload_to_string, Result, ServerError,
};

#[tracing::instrument(skip_all, fields(event_type = %event_type))]
async fn parse_event(ctx: &AppContext, event_type: EventType, body: &str) -> Result<HttpResponse> {
    match event_type {
        EventType::Ping => Ok(ping::ping_event(parse_ping_event(body)?)),
        EventType::PullRequest => {
            Ok(pulls::pull_request_event(ctx, parse_pull_request_event(body)?).await)
        }
        EventType::PullRequestReview => {
            Ok(reviews::review_event(ctx, parse_review_event(body)?).await)
        }
    }
}

fn parse_event_type<'de, T>(event_type: EventType, body: &'de str) -> Result<T>
where
    T: Deserialize<'de>,
{
    serde_json::from_str(body).map_err(|e| ServerError::EventParseError {
        event_type,
        source: e,
    })
}

fn extract_event_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(GITHUB_EVENT_HEADER)
        .and_then(|x| x.to_str().ok())
}

#[tracing::instrument(skip_all)]
pub(crate) async fn event_handler(
    req: HttpRequest,
    mut payload: web::Payload,
    ctx: web::Data<AppContext>,
) -> ActixResult<HttpResponse> {
    // Route event depending on header
    let header = extract_event_header(&req);
    let Some(event_type) = header.and_then(|x| EventType::try_from(x).ok()) else {
        info!(event = ?header, message = "Ignoring unhandled event");
        return Ok(HttpResponse::Ok().finish());
    };

    let Ok(body) = convert_payload_to_string(&mut payload).await else {
        warn!(event_type = %event_type, message = "Unreadable webhook payload");
        return Ok(HttpResponse::BadRequest().finish());
    };

    parse_event(&ctx, event_type, &body).await.or_else(|e| {
        warn!(error = %e, message = "Could not handle webhook event");
        Ok(e.error_response())
    })
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(event_handler)));
}
