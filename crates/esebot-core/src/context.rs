use esebot_config::Config;
use esebot_messaging_interface::MessagingService;
use esebot_registration::RegistrationStore;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub messaging_service: &'a (dyn MessagingService + 'a),
    pub registration_store: &'a RegistrationStore,
}

#[cfg(any(test, feature = "testkit"))]
pub mod tests {
    use esebot_config::Config;
    use esebot_messaging_interface::MockMessagingService;
    use esebot_registration::RegistrationStore;

    use crate::{CoreContext, CoreModule};

    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub messaging_service: MockMessagingService,
        pub registration_store: RegistrationStore,
    }

    impl CoreContextTest {
        pub fn new() -> Self {
            let mut config =
                Config::from_env_no_version().expect("default configuration should be valid");
            config.allowed_group = "ESE".into();
            config.relay.review_submitted = false;

            Self {
                config,
                core_module: CoreModule::builder().build(),
                messaging_service: MockMessagingService::new(),
                registration_store: RegistrationStore::in_memory(),
            }
        }

        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                messaging_service: &self.messaging_service,
                registration_store: &self.registration_store,
            }
        }
    }
}
