//! Ping types.

use serde::Deserialize;

use crate::common::{GhRepository, GhUser};

/// GitHub Ping event, sent once when a webhook is created.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct GhPingEvent {
    /// Zen text.
    pub zen: String,
    /// Hook ID.
    pub hook_id: u64,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}
