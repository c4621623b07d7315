//! Notification messages.
//!
//! Messages are written in legacy Telegram Markdown. An empty string means
//! the event does not deserve a notification.

mod markdown;
mod pull_requests;
mod reviews;

pub use pull_requests::pull_request_message;
pub use reviews::review_message;
