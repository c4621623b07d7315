//! Registration commands.

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use super::{Command, CommandContext};
use crate::Result;

mod set;
mod show;

use self::{set::RegistrationSetCommand, show::RegistrationShowCommand};

/// Manage the registered chat
#[derive(Parser)]
pub(crate) struct RegistrationCommand {
    #[clap(subcommand)]
    inner: RegistrationSubCommand,
}

#[async_trait]
impl Command for RegistrationCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum RegistrationSubCommand {
    Show(RegistrationShowCommand),
    Set(RegistrationSetCommand),
}

#[async_trait]
impl Command for RegistrationSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Show(sub) => sub.run(ctx).await,
            Self::Set(sub) => sub.run(ctx).await,
        }
    }
}
