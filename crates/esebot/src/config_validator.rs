//! Validation utilities.

use std::fmt::Write;

use esebot_config::{Config, MessagingDriver};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    let mut error = String::new();

    if config.allowed_group.is_empty() {
        _missing(&mut error, "ALLOWED_GROUP");
    }

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "BOT_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "BOT_SERVER_BIND_PORT");
    }

    if config.registration.path.is_empty() {
        _missing(&mut error, "BOT_REGISTRATION_PATH");
    }

    // Check messaging credentials
    if config.messaging.driver == MessagingDriver::Telegram
        && config.messaging.telegram.token.is_empty()
    {
        _missing(&mut error, "TELEGRAM_TOKEN");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_config() -> Config {
        let mut config = Config::from_env_no_version().unwrap();
        config.allowed_group = "ESE".into();
        config.messaging.driver = MessagingDriver::Telegram;
        config.messaging.telegram.token = "123456:ABC-DEF".into();
        config.server.bind_ip = "0.0.0.0".into();
        config.server.bind_port = 3000;
        config.registration.path = ".group".into();
        config
    }

    fn errors(config: &Config) -> String {
        match validate_configuration(config) {
            Err(ValidationError::EnvVarsError { errors }) => errors,
            Ok(()) => String::new(),
        }
    }

    #[test]
    fn test_valid_configuration() {
        assert!(validate_configuration(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_allowed_group() {
        let mut config = valid_config();
        config.allowed_group = String::new();

        assert_eq!(errors(&config), "\n  - Missing env. var.: ALLOWED_GROUP");
    }

    #[test]
    fn test_telegram_token_depends_on_driver() {
        let mut config = valid_config();
        config.messaging.telegram.token = String::new();
        assert_eq!(errors(&config), "\n  - Missing env. var.: TELEGRAM_TOKEN");

        config.messaging.driver = MessagingDriver::Null;
        assert!(validate_configuration(&config).is_ok());
    }

    #[test]
    fn test_every_problem_is_reported() {
        let mut config = valid_config();
        config.allowed_group = String::new();
        config.messaging.telegram.token = String::new();
        config.server.bind_port = 0;

        assert_eq!(
            errors(&config),
            "\n  - Missing env. var.: ALLOWED_GROUP\
             \n  - Missing env. var.: BOT_SERVER_BIND_PORT\
             \n  - Missing env. var.: TELEGRAM_TOKEN"
        );
    }
}
