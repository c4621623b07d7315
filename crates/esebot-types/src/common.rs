//! Common types.

use serde::{Deserialize, Serialize};

/// GitHub User.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhUser {
    /// Username.
    pub login: String,
}

impl From<&str> for GhUser {
    fn from(login: &str) -> Self {
        Self {
            login: login.into(),
        }
    }
}

/// GitHub Team.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhTeam {
    /// Name.
    pub name: String,
}

/// GitHub Branch.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhBranch {
    /// Label.
    pub label: Option<String>,
    /// Reference.
    #[serde(rename = "ref")]
    pub reference: String,
    /// SHA.
    pub sha: String,
}

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepository {
    /// Name.
    pub name: String,
    /// Full name.
    pub full_name: String,
    /// Owner.
    pub owner: GhUser,
}
