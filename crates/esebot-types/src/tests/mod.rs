use pretty_assertions::assert_eq;

use crate::{
    pulls::{GhPullRequest, GhPullRequestAction},
    reviews::{GhReview, GhReviewAction, GhReviewState},
};

#[test]
fn pull_request_actions_decode_from_snake_case() {
    let action: GhPullRequestAction = serde_json::from_str(r#""review_requested""#).unwrap();
    assert_eq!(action, GhPullRequestAction::ReviewRequested);

    let action: GhPullRequestAction = serde_json::from_str(r#""ready_for_review""#).unwrap();
    assert_eq!(action, GhPullRequestAction::ReadyForReview);
}

#[test]
fn unknown_actions_decode_as_other() {
    let action: GhPullRequestAction = serde_json::from_str(r#""auto_merge_enabled""#).unwrap();
    assert_eq!(action, GhPullRequestAction::Other);

    let action: GhReviewAction = serde_json::from_str(r#""something_new""#).unwrap();
    assert_eq!(action, GhReviewAction::Other);
}

#[test]
fn review_state_decodes() {
    let state: GhReviewState = serde_json::from_str(r#""changes_requested""#).unwrap();
    assert_eq!(state, GhReviewState::ChangesRequested);
}

#[test]
fn unknown_review_state_decodes_as_other() {
    let state: GhReviewState = serde_json::from_str(r#""awaiting_second_opinion""#).unwrap();
    assert_eq!(state, GhReviewState::Other);

    let review: GhReview = serde_json::from_str(r#"{"user": {"login": "bob"}}"#).unwrap();
    assert_eq!(review.state, GhReviewState::Commented);
}

#[test]
fn pull_request_tolerates_missing_optional_fields() {
    let pull_request: GhPullRequest = serde_json::from_str(
        r#"{
            "number": 3,
            "title": "Tidy up",
            "html_url": "https://github.com/ese/app/pull/3",
            "user": {"login": "alice"},
            "base": {"label": "ese:main", "ref": "main", "sha": "abc"},
            "merged": null
        }"#,
    )
    .unwrap();

    assert!(pull_request.requested_reviewers.is_empty());
    assert_eq!(pull_request.merged_by, None);
    assert!(!pull_request.is_merged());
    assert_eq!(pull_request.base.reference, "main");
}
