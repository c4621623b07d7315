use clap::Parser;

use crate::{commands::CommandContext, Result};

/// Replace the registered chat without notifying it
#[derive(Parser)]
pub(crate) struct RegistrationSetCommand {
    /// Chat ID (e.g. `-1001234567890`) or channel username (e.g. `@ese_team`)
    pub chat_id: String,
}

impl RegistrationSetCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let previous = ctx.registration_store.set(self.chat_id.as_str());

        match previous {
            Some(previous) => writeln!(
                ctx.writer.write().await,
                "Chat '{}' registered, replacing '{}'.",
                self.chat_id,
                previous.destination
            )?,
            None => writeln!(
                ctx.writer.write().await,
                "Chat '{}' registered.",
                self.chat_id
            )?,
        }

        Ok(())
    }
}
