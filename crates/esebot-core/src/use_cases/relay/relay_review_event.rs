use async_trait::async_trait;
use esebot_messaging_interface::MessageFormat;
use esebot_types::reviews::GhReviewEvent;
use shaku::{Component, Interface};
use tracing::{debug, info};

use super::RelayOutcome;
use crate::{formatting::review_message, use_cases::delivery::deliver, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RelayReviewEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhReviewEvent) -> Result<RelayOutcome>;
}

#[derive(Component)]
#[shaku(interface = RelayReviewEventInterface)]
pub(crate) struct RelayReviewEvent;

#[async_trait]
impl RelayReviewEventInterface for RelayReviewEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            action = ?event.action,
            pr_number = event.pull_request.number,
            reviewer = %event.review.user.login,
            state = ?event.review.state
        )
    )]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: GhReviewEvent) -> Result<RelayOutcome> {
        if !ctx.config.relay.review_submitted {
            debug!("Review relay disabled");
            return Ok(RelayOutcome::Ignored);
        }

        let Some(registration) = ctx.registration_store.get() else {
            info!("No chat registered, dropping review event");
            return Ok(RelayOutcome::NoDestination);
        };

        let message = review_message(&event);
        if message.is_empty() {
            debug!("Review action not relayed");
            return Ok(RelayOutcome::Ignored);
        }

        deliver(
            ctx,
            &registration.destination,
            &message,
            MessageFormat::Markdown,
        )
        .await?;

        Ok(RelayOutcome::Sent {
            destination: registration.destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use esebot_types::{
        pulls::GhPullRequest,
        reviews::{GhReview, GhReviewAction},
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::tests::CoreContextTest;

    fn review_event(action: GhReviewAction) -> GhReviewEvent {
        GhReviewEvent {
            action,
            review: GhReview {
                user: "bob".into(),
                ..Default::default()
            },
            pull_request: GhPullRequest {
                title: "Fix bug".into(),
                html_url: "https://x/1".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn disabled_by_default() {
        let mut ctx = CoreContextTest::new();
        ctx.registration_store.set("-100");
        ctx.messaging_service.expect_send_message().never();

        let outcome = RelayReviewEvent
            .run(&ctx.as_context(), review_event(GhReviewAction::Submitted))
            .await
            .unwrap();

        assert_eq!(outcome, RelayOutcome::Ignored);
    }

    #[tokio::test]
    async fn relays_submitted_review_when_enabled() {
        let mut ctx = CoreContextTest::new();
        ctx.config.relay.review_submitted = true;
        ctx.registration_store.set("-100");
        ctx.messaging_service
            .expect_send_message()
            .once()
            .withf(|destination, message, format| {
                destination == "-100"
                    && message == "*Review für* [Fix bug](https://x/1) von bob ❤️"
                    && *format == MessageFormat::Markdown
            })
            .return_once(|_, _, _| Ok(()));

        let outcome = RelayReviewEvent
            .run(&ctx.as_context(), review_event(GhReviewAction::Submitted))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            RelayOutcome::Sent {
                destination: "-100".into()
            }
        );
    }

    #[tokio::test]
    async fn dismissed_review_is_not_sent() {
        let mut ctx = CoreContextTest::new();
        ctx.config.relay.review_submitted = true;
        ctx.registration_store.set("-100");
        ctx.messaging_service.expect_send_message().never();

        let outcome = RelayReviewEvent
            .run(&ctx.as_context(), review_event(GhReviewAction::Dismissed))
            .await
            .unwrap();

        assert_eq!(outcome, RelayOutcome::Ignored);
    }
}
