//! Log configuration.

use std::str::FromStr;

use esebot_config::Config;
use thiserror::Error;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_error::ErrorLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

const DEFAULT_ENV_CONFIG: &str = "info,esebot=debug,teloxide=warn";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Could not set tracing global default subscriber,\n  caused by: {source}")]
    TracingSetGlobalDefaultError {
        source: tracing::subscriber::SetGlobalDefaultError,
    },
    #[error("Could not initialize tracing log tracer,\n  caused by: {source}")]
    TracingLogTracerError { source: tracing_log::log::SetLoggerError },
    #[error("Wrong env filter configuration: {configuration}\n  caused by: {source}")]
    EnvFilterConfigurationError {
        source: tracing_subscriber::filter::ParseError,
        configuration: String,
    },
}

/// Configure logging.
///
/// `log` records emitted by teloxide and actix are forwarded to `tracing`.
/// With `BOT_LOGGING_USE_BUNYAN`, events are printed as bunyan JSON lines
/// instead of the hierarchical tree.
pub fn configure_logging(config: &Config) -> Result<(), LoggingError> {
    LogTracer::init().map_err(|e| LoggingError::TracingLogTracerError { source: e })?;

    let log_config = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_ENV_CONFIG.to_string());
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();

    let filter_layer = EnvFilter::from_str(&log_config).map_err(|e| {
        LoggingError::EnvFilterConfigurationError {
            source: e,
            configuration: log_config,
        }
    })?;
    let error_layer = ErrorLayer::default();

    let (hierarchical_layer, json_storage_layer, bunyan_layer) = if config.logging.use_bunyan {
        (
            None,
            Some(JsonStorageLayer),
            Some(BunyanFormattingLayer::new(app_name, std::io::stdout)),
        )
    } else {
        (
            Some(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            ),
            None,
            None,
        )
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter_layer)
        .with(error_layer)
        .with(hierarchical_layer)
        .with(json_storage_layer)
        .with(bunyan_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::TracingSetGlobalDefaultError { source: e })?;

    Ok(())
}
