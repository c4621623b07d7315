use std::sync::Arc;

use clap::Parser;
use esebot_config::{Config, MessagingDriver};
use esebot_core::CoreModule;
use esebot_messaging_interface::MessagingService;
use esebot_messaging_null::NullMessagingService;
use esebot_registration::RegistrationStore;
use esebot_telegram::{Bot, TelegramMessagingService};
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();

            let (messaging_service, telegram_bot): (Arc<dyn MessagingService>, Option<Bot>) =
                if config.messaging.driver == MessagingDriver::Telegram {
                    info!("Using TelegramMessagingService messaging driver");
                    let service = TelegramMessagingService::new(&config.messaging.telegram.token);
                    let bot = service.bot().clone();
                    (Arc::new(service), Some(bot))
                } else {
                    info!("Using NullMessagingService messaging driver");
                    (Arc::new(NullMessagingService::new()), None)
                };

            let registration_store = RegistrationStore::load(&config.registration.path);

            let ctx = CommandContext {
                config,
                core_module: Arc::new(core_module),
                messaging_service,
                registration_store: Arc::new(registration_store),
                telegram_bot,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        actix_rt::System::with_tokio_rt(move || runtime).block_on(sync(config, args))?;

        Ok(())
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
