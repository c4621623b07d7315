pub mod commands;
mod delivery;
pub mod relay;
