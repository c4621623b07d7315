//! Event types.

use std::convert::TryFrom;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventTypeError {
    /// Unsupported event.
    #[error("Unsupported event: {event}")]
    UnsupportedEvent { event: String },
}

/// Relayed event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// Ping event.
    Ping,
    /// Pull request event.
    PullRequest,
    /// Pull request review event.
    PullRequestReview,
}

impl EventType {
    /// Convert event type to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<&str> for EventType {
    type Error = EventTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "ping" => Ok(Self::Ping),
            "pull_request" => Ok(Self::PullRequest),
            "pull_request_review" => Ok(Self::PullRequestReview),
            name => Err(EventTypeError::UnsupportedEvent {
                event: name.to_owned(),
            }),
        }
    }
}

impl From<EventType> for &'static str {
    fn from(event_type: EventType) -> Self {
        match event_type {
            EventType::Ping => "ping",
            EventType::PullRequest => "pull_request",
            EventType::PullRequestReview => "pull_request_review",
        }
    }
}
