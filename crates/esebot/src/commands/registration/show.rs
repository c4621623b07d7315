use clap::Parser;

use crate::{commands::CommandContext, Result};

/// Show the registered chat
#[derive(Parser)]
pub(crate) struct RegistrationShowCommand;

impl RegistrationShowCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        match ctx.registration_store.get() {
            Some(registration) => writeln!(
                ctx.writer.write().await,
                "Registered chat: {}",
                registration.destination
            )?,
            None => writeln!(ctx.writer.write().await, "No chat registered.")?,
        }

        Ok(())
    }
}
