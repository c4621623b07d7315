use async_trait::async_trait;

use crate::Result;

/// Markup used to render an outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFormat {
    /// Sent as-is.
    Plain,
    /// Legacy Telegram Markdown (`*bold*`, `_italic_`, `[text](url)`).
    Markdown,
}

/// Outbound messaging service.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait MessagingService: Send + Sync {
    /// Send a message to a destination chat.
    async fn send_message(
        &self,
        destination: &str,
        text: &str,
        format: MessageFormat,
    ) -> Result<()>;
}
