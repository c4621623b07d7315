//! Outbound messages through the Bot API.

use async_trait::async_trait;
use esebot_messaging_interface::{MessageFormat, MessagingError, MessagingService, Result};
use teloxide::{
    prelude::*,
    types::{ParseMode, Recipient},
};

/// Messaging service backed by a Telegram bot.
#[derive(Clone)]
pub struct TelegramMessagingService {
    bot: Bot,
}

impl TelegramMessagingService {
    /// Build a service from a bot token.
    pub fn new(token: &str) -> Self {
        Self::from_bot(Bot::new(token))
    }

    /// Build a service from an existing bot.
    pub fn from_bot(bot: Bot) -> Self {
        Self { bot }
    }

    /// Underlying bot.
    pub fn bot(&self) -> &Bot {
        &self.bot
    }
}

/// Numeric chat ids are addressed directly, `@name` strings as public channels.
pub(crate) fn parse_recipient(destination: &str) -> Result<Recipient> {
    if let Ok(id) = destination.parse::<i64>() {
        return Ok(Recipient::Id(ChatId(id)));
    }

    match destination.strip_prefix('@') {
        Some(name) if !name.is_empty() => Ok(Recipient::ChannelUsername(destination.into())),
        _ => Err(MessagingError::InvalidDestination {
            destination: destination.into(),
        }),
    }
}

#[async_trait]
impl MessagingService for TelegramMessagingService {
    #[tracing::instrument(skip(self, text))]
    async fn send_message(
        &self,
        destination: &str,
        text: &str,
        format: MessageFormat,
    ) -> Result<()> {
        let recipient = parse_recipient(destination)?;
        let request = self.bot.send_message(recipient, text);

        let request = match format {
            MessageFormat::Plain => request,
            #[allow(deprecated)]
            MessageFormat::Markdown => request.parse_mode(ParseMode::Markdown),
        };

        request
            .await
            .map(|_| ())
            .map_err(|e| MessagingError::ImplementationError {
                source: Box::new(e),
            })
    }
}
