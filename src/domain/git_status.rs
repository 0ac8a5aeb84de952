use serde::{Deserialize, Serialize};

/// Snapshot of a project directory's git state, shown in listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitStatus {
    pub is_git_repo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default)]
    pub has_changes: bool,
    /// Commits ahead of upstream; absent for multi-path projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ahead: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behind: Option<u32>,
}

impl GitStatus {
    /// Status for a directory that is not a git repository.
    pub fn not_a_repo() -> Self {
        Self::default()
    }
}
