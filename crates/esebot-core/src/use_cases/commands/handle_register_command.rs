use async_trait::async_trait;
use esebot_messaging_interface::MessageFormat;
use shaku::{Component, Interface};
use tracing::{info, warn};

use super::{RegisterCommand, RegisterOutcome, GREETING_MESSAGE, STILL_ALIVE_MESSAGE};
use crate::{use_cases::delivery::deliver, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait HandleRegisterCommandInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        command: RegisterCommand,
    ) -> Result<RegisterOutcome>;
}

#[derive(Component)]
#[shaku(interface = HandleRegisterCommandInterface)]
pub(crate) struct HandleRegisterCommand;

#[async_trait]
impl HandleRegisterCommandInterface for HandleRegisterCommand {
    #[tracing::instrument(
        skip_all,
        fields(
            sender_name = %command.sender_name,
            sender_id = command.sender_id,
            chat_title = ?command.chat_title,
            chat_id = %command.chat_id
        )
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        command: RegisterCommand,
    ) -> Result<RegisterOutcome> {
        if command.chat_title.as_deref() != Some(ctx.config.allowed_group.as_str()) {
            warn!(
                message = "Unauthorized registration attempt",
                sender_name = %command.sender_name,
                sender_id = command.sender_id,
                chat_title = ?command.chat_title
            );
            return Ok(RegisterOutcome::Rejected);
        }

        let (outcome, reply) = match ctx.registration_store.set(command.chat_id.as_str()) {
            None => (RegisterOutcome::Registered, GREETING_MESSAGE),
            Some(previous) => (RegisterOutcome::Replaced { previous }, STILL_ALIVE_MESSAGE),
        };
        info!(message = "Chat registered", outcome = ?outcome);

        deliver(ctx, &command.chat_id, reply, MessageFormat::Plain).await?;

        Ok(outcome)
    }
}
