use serde::{Deserialize, Serialize};

/// Chat currently receiving notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Opaque chat identifier.
    #[serde(rename = "GroupRecipient")]
    pub destination: String,
}

impl Registration {
    /// Create a registration for a destination.
    pub fn new<T: Into<String>>(destination: T) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}
