//! Telegram driver.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod dispatcher;
mod service;

pub use dispatcher::{run_command_dispatcher, BotCommand, DispatcherContext};
pub use service::TelegramMessagingService;
pub use teloxide::Bot;
