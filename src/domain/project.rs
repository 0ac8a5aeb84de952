use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A launchable application, referenced by its macOS bundle id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    /// Display name, e.g. "iTerm"
    pub name: String,
    /// Bundle identifier, e.g. "com.googlecode.iterm2"
    pub bundle_id: String,
}

impl AppInfo {
    pub fn new(name: impl Into<String>, bundle_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bundle_id: bundle_id.into(),
        }
    }
}

/// A stored project: an alias mapped to one or more directories plus the
/// applications it should open in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub alias: String,
    pub paths: Vec<PathBuf>,
    /// Preferred terminal; falls back to the configured default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<AppInfo>,
    /// Preferred editor; falls back to the configured default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<AppInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a fresh project with a new id and current timestamps.
    pub fn new(alias: impl Into<String>, paths: Vec<PathBuf>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            alias: alias.into(),
            paths,
            terminal: None,
            editor: None,
            group: None,
            is_favorite: false,
            last_opened_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// First configured path, the one single-window opens use.
    pub fn primary_path(&self) -> Option<&Path> {
        self.paths.first().map(PathBuf::as_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_gets_unique_ids() {
        let a = Project::new("api", vec![PathBuf::from("/tmp/a")]);
        let b = Project::new("api", vec![PathBuf::from("/tmp/a")]);
        assert_ne!(a.id, b.id);
        assert!(!a.is_favorite);
        assert!(a.last_opened_at.is_none());
    }

    #[test]
    fn test_project_roundtrips_through_json() {
        let mut project = Project::new("web", vec![PathBuf::from("/tmp/web")]);
        project.terminal = Some(AppInfo::new("iTerm", "com.googlecode.iterm2"));
        project.group = Some("Work".to_string());

        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back.alias, "web");
        assert_eq!(back.terminal, project.terminal);
        assert_eq!(back.group.as_deref(), Some("Work"));
    }

    #[test]
    fn test_project_deserializes_with_missing_optional_fields() {
        // Records written before favorites/groups existed still load.
        let json = r#"{
            "id": "abc",
            "alias": "old",
            "paths": ["/tmp/old"],
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert!(!project.is_favorite);
        assert!(project.group.is_none());
        assert!(project.terminal.is_none());
    }
}
