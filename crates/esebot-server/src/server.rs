//! Server module.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use esebot_config::Config;
use esebot_core::{CoreContext, CoreModule};
use esebot_messaging_interface::MessagingService;
use esebot_registration::RegistrationStore;
use tracing::info;

use crate::{
    middlewares::VerifySignature, webhook::configure_webhook_handlers, Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: Arc<CoreModule>,
    /// Messaging adapter.
    pub messaging_service: Arc<dyn MessagingService>,
    /// Registered chat.
    pub registration_store: Arc<RegistrationStore>,
}

impl AppContext {
    /// Create new app context.
    pub fn new(
        config: Config,
        core_module: Arc<CoreModule>,
        messaging_service: Arc<dyn MessagingService>,
        registration_store: Arc<RegistrationStore>,
    ) -> Self {
        Self {
            config,
            core_module,
            messaging_service,
            registration_store,
        }
    }

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

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context.clone())
        .wrap(Logger::default())
        .service(
            web::scope("/web")
                .wrap(VerifySignature::new(&context.config))
                .configure(configure_webhook_handlers),
        )
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on esebot!" }))
            }),
        )
}

/// Run bot server.
pub async fn run_bot_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting bot server",
    );

    run_bot_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_bot_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let cloned_context = context.clone();

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = cloned_context.config.server.workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
