//! Chat command dispatcher.

use std::sync::Arc;

use esebot_config::Config;
use esebot_core::{
    use_cases::commands::{HandleRegisterCommandInterface, RegisterCommand},
    CoreContext, CoreModule,
};
use esebot_messaging_interface::MessagingService;
use esebot_registration::RegistrationStore;
use shaku::HasComponent;
use teloxide::{prelude::*, types::User, utils::command::BotCommands};
use tracing::{error, info};

/// Supported chat commands.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum BotCommand {
    #[command(description = "register this chat for pull request notifications.")]
    Start,
}

/// State shared with command handlers.
pub struct DispatcherContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: Arc<CoreModule>,
    /// Messaging adapter.
    pub messaging_service: Arc<dyn MessagingService>,
    /// Registration store.
    pub registration_store: Arc<RegistrationStore>,
}

impl DispatcherContext {
    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            messaging_service: self.messaging_service.as_ref(),
            registration_store: &self.registration_store,
        }
    }
}

/// Long-poll the Bot API and handle commands until the process stops.
pub async fn run_command_dispatcher(bot: Bot, context: Arc<DispatcherContext>) {
    info!(message = "Starting command dispatcher");

    let handler = Update::filter_message()
        .filter_command::<BotCommand>()
        .endpoint(command_handler);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![context])
        .default_handler(|_| async {})
        .build()
        .dispatch()
        .await;
}

async fn command_handler(
    msg: Message,
    cmd: BotCommand,
    context: Arc<DispatcherContext>,
) -> ResponseResult<()> {
    match cmd {
        BotCommand::Start => {
            let ctx = context.as_core_context();
            let handle_register_command: &dyn HandleRegisterCommandInterface =
                ctx.core_module.resolve_ref();

            if let Err(e) = handle_register_command
                .run(&ctx, register_command(&msg))
                .await
            {
                error!(message = "Registration reply failed", error = %e);
            }
        }
    }

    Ok(())
}

fn register_command(msg: &Message) -> RegisterCommand {
    let (sender_name, sender_id) = sender_identity(msg.from());

    RegisterCommand {
        sender_name,
        sender_id,
        chat_title: msg.chat.title().map(Into::into),
        chat_id: msg.chat.id.0.to_string(),
    }
}

fn sender_identity(user: Option<&User>) -> (String, u64) {
    user.map(|user| {
        (
            user.username
                .clone()
                .unwrap_or_else(|| user.first_name.clone()),
            user.id.0,
        )
    })
    .unwrap_or_default()
}
