use esebot_types::reviews::{GhReviewAction, GhReviewEvent};

use super::markdown::{link, plain};

/// Build the notification for a pull request review event.
pub fn review_message(event: &GhReviewEvent) -> String {
    match event.action {
        GhReviewAction::Submitted => format!(
            "*Review für* {} von {} ❤️",
            link(&event.pull_request.title, &event.pull_request.html_url),
            plain(&event.review.user.login)
        ),
        GhReviewAction::Edited | GhReviewAction::Dismissed | GhReviewAction::Other => {
            String::new()
        }
    }
}
