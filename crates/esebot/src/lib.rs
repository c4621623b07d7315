//! CLI module.

use anyhow::{Context, Result};
use args::{Args, CommandExecutor};
use clap::Parser;
use esebot_config::Config;
use esebot_logging::configure_logging;
use tracing::info;

pub(crate) mod args;
mod commands;
mod config_validator;
#[cfg(test)]
mod testutils;

/// Get version data.
pub fn get_version_data() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    let env_path = dotenv::dotenv().context("Could not load configuration from '.env' file")?;

    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string())?;
    configure_logging(&config)?;
    config_validator::validate_configuration(&config)?;

    info!(env_path = %env_path.display(), "{}", get_version_data());

    let args = Args::parse();
    CommandExecutor::parse_args(config, args)
}
