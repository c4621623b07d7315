//! Review types.

use serde::{Deserialize, Serialize};

use crate::{
    common::{GhRepository, GhUser},
    pulls::GhPullRequest,
};

/// GitHub Review action.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhReviewAction {
    /// Submitted.
    #[default]
    Submitted,
    /// Edited.
    Edited,
    /// Dismissed.
    Dismissed,
    /// Any other action.
    #[serde(other)]
    Other,
}

/// GitHub Review state.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhReviewState {
    /// Approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    #[default]
    Commented,
    /// Dismissed.
    Dismissed,
    /// Pending.
    Pending,
    /// Any other state.
    #[serde(other)]
    Other,
}

/// GitHub Review.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhReview {
    /// User.
    pub user: GhUser,
    /// State.
    #[serde(default)]
    pub state: GhReviewState,
}

/// GitHub Review event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhReviewEvent {
    /// Action.
    pub action: GhReviewAction,
    /// Review.
    pub review: GhReview,
    /// Pull request.
    pub pull_request: GhPullRequest,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
