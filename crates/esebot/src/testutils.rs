use std::{io::Write, sync::Arc};

use clap::Parser;
use esebot_config::Config;
use esebot_core::CoreModule;
use esebot_messaging_interface::MockMessagingService;
use esebot_registration::RegistrationStore;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub messaging_service: MockMessagingService,
    pub registration_store: Arc<RegistrationStore>,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            config: Config::from_env_no_version().unwrap(),
            core_module: CoreModule::builder().build(),
            messaging_service: MockMessagingService::new(),
            registration_store: Arc::new(RegistrationStore::in_memory()),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: Arc::new(self.core_module),
            messaging_service: Arc::new(self.messaging_service),
            registration_store: self.registration_store,
            telegram_bot: None,
            writer,
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["bot"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone()))
                .await
                .unwrap(),
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    }

    let vec = buf.read().await.to_vec();
    std::str::from_utf8(&vec).unwrap().to_string()
}
