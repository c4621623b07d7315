//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{DriverError, MessagingDriver};

#[derive(Debug, Clone)]
pub struct MessagingConfig {
    /// Messaging driver.
    pub driver: MessagingDriver,
    /// Telegram options.
    pub telegram: TelegramConfig,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct RegistrationConfig {
    /// Path of the file holding the registered chat.
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Relay submitted pull request reviews.
    pub review_submitted: bool,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
    /// Server webhook secret.
    pub webhook_secret: String,
    /// Disable webhook signature verification.
    pub disable_webhook_signature: bool,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Title of the only chat allowed to register itself.
    pub allowed_group: String,
    /// Messaging options.
    pub messaging: MessagingConfig,
    /// Registration options.
    pub registration: RegistrationConfig,
    /// Relay options.
    pub relay: RelayConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Ok(Config {
            allowed_group: env_to_str("ALLOWED_GROUP", ""),
            messaging: MessagingConfig {
                driver: MessagingDriver::from_str(&env_to_str("BOT_MESSAGING_DRIVER", "telegram"))?,
                telegram: TelegramConfig {
                    token: env_to_str("TELEGRAM_TOKEN", ""),
                },
            },
            registration: RegistrationConfig {
                path: env_to_str("BOT_REGISTRATION_PATH", ".group"),
            },
            relay: RelayConfig {
                review_submitted: env_to_bool("BOT_RELAY_REVIEW_SUBMITTED", false),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            server: ServerConfig {
                bind_ip: env_to_str("BOT_SERVER_BIND_IP", "0.0.0.0"),
                bind_port: env_to_u16("BOT_SERVER_BIND_PORT", 3000),
                workers_count: env_to_optional_u16("BOT_SERVER_WORKERS_COUNT", None),
                webhook_secret: env_to_str("GITHUB_SECRET", ""),
                disable_webhook_signature: env_to_bool(
                    "BOT_SERVER_DISABLE_WEBHOOK_SIGNATURE",
                    false,
                ),
            },
            version,
        })
    }

    pub fn from_env_no_version() -> Result<Config, DriverError> {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}
