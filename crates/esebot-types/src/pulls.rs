//! Pull request types.

use serde::{Deserialize, Serialize};

use crate::common::{GhBranch, GhRepository, GhTeam, GhUser};

/// GitHub Pull request action.
///
/// Actions the relay does not know about decode as [`GhPullRequestAction::Other`].
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhPullRequestAction {
    /// Assigned.
    Assigned,
    /// Closed.
    Closed,
    /// Converted to draft.
    ConvertedToDraft,
    /// Edited.
    Edited,
    /// Labeled.
    Labeled,
    /// Opened.
    #[default]
    Opened,
    /// Reopened.
    Reopened,
    /// Ready for review.
    ReadyForReview,
    /// Review requested.
    ReviewRequested,
    /// Review request removed.
    ReviewRequestRemoved,
    /// Synchronize.
    Synchronize,
    /// Unassigned.
    Unassigned,
    /// Unlabeled.
    Unlabeled,
    /// Any other action.
    #[serde(other)]
    Other,
}

/// GitHub Pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequest {
    /// Number.
    pub number: u64,
    /// Title.
    pub title: String,
    /// Web URL.
    pub html_url: String,
    /// Author.
    pub user: GhUser,
    /// Requested reviewers.
    #[serde(default)]
    pub requested_reviewers: Vec<GhUser>,
    /// Base branch.
    pub base: GhBranch,
    /// Merged?
    pub merged: Option<bool>,
    /// Merged by.
    pub merged_by: Option<GhUser>,
}

impl GhPullRequest {
    /// Whether the pull request was merged.
    pub fn is_merged(&self) -> bool {
        self.merged.unwrap_or(false)
    }
}

/// GitHub Pull request event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhPullRequestEvent {
    /// Action.
    pub action: GhPullRequestAction,
    /// Number.
    pub number: u64,
    /// Pull request.
    pub pull_request: GhPullRequest,
    /// Requested reviewer, on `review_requested` events.
    pub requested_reviewer: Option<GhUser>,
    /// Requested team, on `review_requested` events for a team.
    pub requested_team: Option<GhTeam>,
    /// Repository.
    pub repository: GhRepository,
    /// Sender.
    pub sender: GhUser,
}
