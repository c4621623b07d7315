use esebot_types::pulls::{GhPullRequest, GhPullRequestAction, GhPullRequestEvent};

use super::markdown::{bold, italic, link};

const REVIEWERS_SEPARATOR: &str = ", ";
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Build the notification for a pull request event.
pub fn pull_request_message(event: &GhPullRequestEvent) -> String {
    let pr = &event.pull_request;

    match event.action {
        GhPullRequestAction::Closed if pr.is_merged() => {
            let merged_by = pr.merged_by.as_ref().unwrap_or(&event.sender);
            format!(
                "*Pull request* {} wurde von {} auf {} *gemergt* ❤️",
                pull_request_link(pr),
                bold(&merged_by.login),
                italic(&pr.base.reference)
            )
        }
        GhPullRequestAction::Closed => format!(
            "*Pull request* {} wurde *geschlossen*.",
            pull_request_link(pr)
        ),
        GhPullRequestAction::Reopened => format!(
            "*Pull request* {} wurde *wieder geöffnet* 🤔",
            pull_request_link(pr)
        ),
        GhPullRequestAction::ReviewRequested => {
            let mut reviewers = reviewer_names(pr);
            if reviewers.is_empty() {
                // Requests for a single user or a team leave the user list empty.
                if let Some(reviewer) = &event.requested_reviewer {
                    reviewers.push(reviewer.login.as_str());
                } else if let Some(team) = &event.requested_team {
                    reviewers.push(team.name.as_str());
                }
            }

            review_request_line(pr, &reviewers)
        }
        GhPullRequestAction::Opened => {
            let mut message = format!(
                "*Pull request* {} von {} eröffnet 🤩",
                pull_request_link(pr),
                bold(&event.sender.login)
            );

            let reviewers = reviewer_names(pr);
            if !reviewers.is_empty() {
                message.push_str(PARAGRAPH_SEPARATOR);
                message.push_str(&review_request_line(pr, &reviewers));
            }

            message
        }
        GhPullRequestAction::Assigned
        | GhPullRequestAction::ConvertedToDraft
        | GhPullRequestAction::Edited
        | GhPullRequestAction::Labeled
        | GhPullRequestAction::ReadyForReview
        | GhPullRequestAction::ReviewRequestRemoved
        | GhPullRequestAction::Synchronize
        | GhPullRequestAction::Unassigned
        | GhPullRequestAction::Unlabeled
        | GhPullRequestAction::Other => String::new(),
    }
}

fn pull_request_link(pr: &GhPullRequest) -> String {
    link(&pr.title, &pr.html_url)
}

fn reviewer_names(pr: &GhPullRequest) -> Vec<&str> {
    pr.requested_reviewers
        .iter()
        .map(|reviewer| reviewer.login.as_str())
        .collect()
}

fn review_request_line(pr: &GhPullRequest, reviewers: &[&str]) -> String {
    if reviewers.is_empty() {
        return format!("*Review* für {} angefordert ❤️", pull_request_link(pr));
    }

    format!(
        "*Review* von {} für {} angefordert ❤️",
        bold(&reviewers.join(REVIEWERS_SEPARATOR)),
        pull_request_link(pr)
    )
}
