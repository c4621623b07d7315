//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use esebot_config::Config;
use esebot_core::CoreModule;
use esebot_messaging_interface::MessagingService;
use esebot_registration::RegistrationStore;
use esebot_telegram::Bot;
use tokio::sync::RwLock;

use self::{registration::RegistrationCommand, server::ServerCommand};
use crate::Result;

mod registration;
mod server;

pub(crate) struct CommandContext {
    pub config: Config,
    pub core_module: Arc<CoreModule>,
    pub messaging_service: Arc<dyn MessagingService>,
    pub registration_store: Arc<RegistrationStore>,
    pub telegram_bot: Option<Bot>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Registration(RegistrationCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Registration(sub) => sub.execute(ctx).await,
        }
    }
}
