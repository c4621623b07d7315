pub mod relay_pull_request_event;
pub mod relay_review_event;

#[cfg(any(test, feature = "testkit"))]
pub use relay_pull_request_event::MockRelayPullRequestEventInterface;
pub use relay_pull_request_event::RelayPullRequestEventInterface;
#[cfg(any(test, feature = "testkit"))]
pub use relay_review_event::MockRelayReviewEventInterface;
pub use relay_review_event::RelayReviewEventInterface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Message delivered to the registered chat.
    Sent { destination: String },
    /// No chat registered yet.
    NoDestination,
    /// The event does not produce a notification.
    Ignored,
}
