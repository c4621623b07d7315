
use esebot_core::formatting::pull_request_message;
use esebot_types::{
    common::{GhTeam, GhUser},
    pulls::GhPullRequestAction,
    reviews::{GhReviewAction, GhReviewState},
};
use pretty_assertions::assert_eq;

use self::fixtures::*;
use super::{
    ping::parse_ping_event, pulls::parse_pull_request_event, reviews::parse_review_event,
};
use crate::{event_type::EventType, ServerError};

#[test]
fn test_ping_event_parsing() {
    let event = parse_ping_event(PING_EVENT_DATA).unwrap();
    assert_eq!(event.hook_id, 398716531);
    assert_eq!(event.zen, "Keep it logically awesome.");
    assert_eq!(
        event.repository.map(|r| r.full_name),
        Some("ese-team/ese-app".to_string())
    );
    assert_eq!(event.sender, Some(GhUser::from("alice")));
}

#[test]
fn test_pull_request_opened_event_parsing() {
    let event = parse_pull_request_event(PULL_REQUEST_OPENED_DATA).unwrap();
    assert_eq!(event.action, GhPullRequestAction::Opened);
    assert_eq!(event.number, 42);
    assert_eq!(event.pull_request.title, "Add grade export");
    assert_eq!(
        event.pull_request.requested_reviewers,
        vec![GhUser::from("bob"), GhUser::from("carol")]
    );
    assert_eq!(event.pull_request.base.reference, "main");
    assert!(!event.pull_request.is_merged());
    assert_eq!(event.requested_reviewer, None);
    assert_eq!(event.repository.full_name, "ese-team/ese-app");

    assert_eq!(
        pull_request_message(&event),
        "*Pull request* [Add grade export](https://github.com/ese-team/ese-app/pull/42) von *alice* eröffnet 🤩\n\n\
         *Review* von *bob, carol* für [Add grade export](https://github.com/ese-team/ese-app/pull/42) angefordert ❤️"
    );
}

#[test]
fn test_pull_request_closed_merged_event_parsing() {
    let event = parse_pull_request_event(PULL_REQUEST_CLOSED_MERGED_DATA).unwrap();
    assert_eq!(event.action, GhPullRequestAction::Closed);
    assert!(event.pull_request.is_merged());
    assert_eq!(event.pull_request.merged_by, Some(GhUser::from("bob")));

    assert_eq!(
        pull_request_message(&event),
        "*Pull request* [Add grade export](https://github.com/ese-team/ese-app/pull/42) wurde von *bob* auf _main_ *gemergt* ❤️"
    );
}

#[test]
fn test_pull_request_review_requested_event_parsing() {
    let event = parse_pull_request_event(PULL_REQUEST_REVIEW_REQUESTED_DATA).unwrap();
    assert_eq!(event.action, GhPullRequestAction::ReviewRequested);
    assert_eq!(event.requested_reviewer, Some(GhUser::from("carol")));
    assert_eq!(event.pull_request.requested_reviewers.len(), 2);
}

#[test]
fn test_pull_request_team_review_requested_event_parsing() {
    let event = parse_pull_request_event(PULL_REQUEST_REVIEW_REQUESTED_TEAM_DATA).unwrap();
    assert_eq!(event.action, GhPullRequestAction::ReviewRequested);
    assert!(event.pull_request.requested_reviewers.is_empty());
    assert_eq!(event.requested_reviewer, None);
    assert_eq!(
        event.requested_team,
        Some(GhTeam {
            name: "backend".into()
        })
    );

    assert_eq!(
        pull_request_message(&event),
        "*Review* von *backend* für [Add grade export](https://github.com/ese-team/ese-app/pull/42) angefordert ❤️"
    );
}

#[test]
fn test_review_submitted_event_parsing() {
    let event = parse_review_event(PULL_REQUEST_REVIEW_SUBMITTED_DATA).unwrap();
    assert_eq!(event.action, GhReviewAction::Submitted);
    assert_eq!(event.review.user, GhUser::from("bob"));
    assert_eq!(event.review.state, GhReviewState::Approved);
    assert_eq!(event.pull_request.number, 42);
    assert_eq!(event.pull_request.merged, None);
}

#[test]
fn test_review_with_unknown_state_parsing() {
    let body = PULL_REQUEST_REVIEW_SUBMITTED_DATA
        .replace("\"approved\"", "\"awaiting_second_opinion\"");
    let event = parse_review_event(&body).unwrap();
    assert_eq!(event.review.state, GhReviewState::Other);
    assert_eq!(event.action, GhReviewAction::Submitted);
}

#[test]
fn test_wrong_event_kind_is_a_parse_error() {
    let err = parse_review_event(PING_EVENT_DATA).unwrap_err();
    assert!(matches!(
        err,
        ServerError::EventParseError {
            event_type: EventType::PullRequestReview,
            ..
        }
    ));
}
