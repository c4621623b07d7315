use async_trait::async_trait;
use esebot_messaging_interface::MessageFormat;
use esebot_types::pulls::GhPullRequestEvent;
use shaku::{Component, Interface};
use tracing::{debug, info};

use super::RelayOutcome;
use crate::{
    formatting::pull_request_message, use_cases::delivery::deliver, CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RelayPullRequestEventInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: GhPullRequestEvent,
    ) -> Result<RelayOutcome>;
}

#[derive(Component)]
#[shaku(interface = RelayPullRequestEventInterface)]
pub(crate) struct RelayPullRequestEvent;

#[async_trait]
impl RelayPullRequestEventInterface for RelayPullRequestEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            action = ?event.action,
            pr_number = event.number,
            repository_path = %event.repository.full_name
        )
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: GhPullRequestEvent,
    ) -> Result<RelayOutcome> {
        let Some(registration) = ctx.registration_store.get() else {
            info!("No chat registered, dropping pull request event");
            return Ok(RelayOutcome::NoDestination);
        };

        let message = pull_request_message(&event);
        if message.is_empty() {
            debug!("Pull request action not relayed");
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
    use esebot_messaging_interface::MessagingError;
    use esebot_types::pulls::{GhPullRequest, GhPullRequestAction};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{context::tests::CoreContextTest, DomainError};

    fn opened_event() -> GhPullRequestEvent {
        GhPullRequestEvent {
            action: GhPullRequestAction::Opened,
            number: 1,
            pull_request: GhPullRequest {
                number: 1,
                title: "Fix bug".into(),
                html_url: "https://x/1".into(),
                requested_reviewers: vec!["bob".into(), "carol".into()],
                ..Default::default()
            },
            sender: "alice".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn relays_to_registered_chat() {
        let mut ctx = CoreContextTest::new();
        ctx.registration_store.set("-100");
        ctx.messaging_service
            .expect_send_message()
            .once()
            .withf(|destination, message, format| {
                destination == "-100"
                    && message.starts_with("*Pull request* [Fix bug](https://x/1) von *alice*")
                    && message.ends_with("*bob, carol* für [Fix bug](https://x/1) angefordert ❤️")
                    && *format == MessageFormat::Markdown
            })
            .return_once(|_, _, _| Ok(()));

        let outcome = RelayPullRequestEvent
            .run(&ctx.as_context(), opened_event())
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
    async fn nothing_sent_without_registration() {
        let mut ctx = CoreContextTest::new();
        ctx.messaging_service.expect_send_message().never();

        let outcome = RelayPullRequestEvent
            .run(&ctx.as_context(), opened_event())
            .await
            .unwrap();

        assert_eq!(outcome, RelayOutcome::NoDestination);
    }

    #[tokio::test]
    async fn silent_actions_are_not_sent() {
        let mut ctx = CoreContextTest::new();
        ctx.registration_store.set("-100");
        ctx.messaging_service.expect_send_message().never();

        let outcome = RelayPullRequestEvent
            .run(
                &ctx.as_context(),
                GhPullRequestEvent {
                    action: GhPullRequestAction::Synchronize,
                    ..opened_event()
                },
            )
            .await
            .unwrap();

        assert_eq!(outcome, RelayOutcome::Ignored);
    }

    #[tokio::test]
    async fn delivery_error_carries_message() {
        let mut ctx = CoreContextTest::new();
        ctx.registration_store.set("-100");
        ctx.messaging_service
            .expect_send_message()
            .once()
            .return_once(|_, _, _| {
                Err(MessagingError::ImplementationError {
                    source: "Bad Request: can't parse entities".into(),
                })
            });

        let err = RelayPullRequestEvent
            .run(&ctx.as_context(), opened_event())
            .await
            .unwrap_err();

        let DomainError::DeliveryError {
            destination,
            message,
            ..
        } = &err;
        assert_eq!(destination, "-100");
        assert!(message.contains("Fix bug"));
        assert!(err.to_string().contains("can't parse entities"));
    }
}
