//! Null driver for messaging.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use esebot_messaging_interface::{MessageFormat, MessagingService, Result};
use tracing::info;

/// Messaging service which only logs outbound messages.
#[derive(Clone, Default)]
pub struct NullMessagingService {
    _private: (),
}

impl NullMessagingService {
    /// Build a null messaging service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl MessagingService for NullMessagingService {
    #[tracing::instrument(skip(self))]
    async fn send_message(
        &self,
        destination: &str,
        text: &str,
        format: MessageFormat,
    ) -> Result<()> {
        info!(message = "Message not sent, null messaging driver");
        Ok(())
    }
}
