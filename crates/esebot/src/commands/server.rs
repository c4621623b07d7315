use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use esebot_server::server::{run_bot_server, AppContext};
use esebot_telegram::{run_command_dispatcher, DispatcherContext};
use tracing::info;

use super::{Command, CommandContext};
use crate::Result;

/// Start server
#[derive(Parser)]
pub(crate) struct ServerCommand;

#[async_trait]
impl Command for ServerCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match ctx.telegram_bot {
            Some(bot) => {
                let context = Arc::new(DispatcherContext {
                    config: ctx.config.clone(),
                    core_module: ctx.core_module.clone(),
                    messaging_service: ctx.messaging_service.clone(),
                    registration_store: ctx.registration_store.clone(),
                });

                tokio::spawn(run_command_dispatcher(bot, context));
            }
            None => info!("No Telegram bot configured, chat commands are disabled"),
        }

        let context = AppContext::new(
            ctx.config,
            ctx.core_module,
            ctx.messaging_service,
            ctx.registration_store,
        );

        tokio::task::spawn_local(async move { run_bot_server(context).await }).await??;

        Ok(())
    }
}
