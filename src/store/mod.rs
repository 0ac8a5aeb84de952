//! Project storage
//!
//! The full project list lives as pretty-printed JSON in a single file
//! under `~/.portico/`. Every operation is load-modify-save; the list is
//! tens of items at most, so there is no point in anything fancier. Saves
//! are atomic (temp file + rename) under an exclusive lock so a CLI run
//! racing another one cannot corrupt the file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use fs2::FileExt;
use thiserror::Error;

use crate::domain::Project;

/// Store errors callers branch on (everything else surfaces as anyhow).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no project matching '{0}'")]
    NotFound(String),
    #[error("a project with alias '{0}' already exists")]
    DuplicateAlias(String),
}

/// Handle to the on-disk project list.
pub struct ProjectStore {
    path: PathBuf,
}

impl ProjectStore {
    /// Store at the default location (`~/.portico/projects.json`).
    pub fn open_default() -> Self {
        Self::at(default_store_dir().join("projects.json"))
    }

    /// Store at an explicit path (tests point this at a tempdir).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load all projects. A missing or unreadable file is an empty list,
    /// never an error: the launcher must stay usable after a bad write.
    pub fn load(&self) -> Vec<Project> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&content) {
            Ok(projects) => projects,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "project store is corrupt; starting from an empty list"
                );
                Vec::new()
            }
        }
    }

    /// Persist the full list with an atomic write under an exclusive lock.
    pub fn save(&self, projects: &[Project]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(projects).context("Failed to serialize projects")?;

        let lock_path = self.path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .context("Failed to acquire store lock")?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .context("Failed to write project list")?;
        temp_file.sync_all().context("Failed to sync project list")?;

        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to rename store file: {}", self.path.display()))?;

        // Lock released on drop
        Ok(())
    }

    /// Add a project, enforcing alias uniqueness (case-insensitive).
    pub fn add(&self, project: Project) -> Result<Project> {
        let mut projects = self.load();

        if alias_taken(&projects, &project.alias, None) {
            return Err(StoreError::DuplicateAlias(project.alias).into());
        }

        projects.push(project.clone());
        self.save(&projects)?;
        Ok(project)
    }

    /// Apply `mutate` to the project with the given id and bump its
    /// `updated_at`.
    pub fn update<F>(&self, id: &str, mutate: F) -> Result<Project>
    where
        F: FnOnce(&mut Project),
    {
        let mut projects = self.load();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        mutate(project);
        project.updated_at = Utc::now();
        let updated = project.clone();

        self.save(&projects)?;
        Ok(updated)
    }

    /// Remove a project by id, returning the removed record.
    pub fn remove(&self, id: &str) -> Result<Project> {
        let mut projects = self.load();
        let index = projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = projects.remove(index);
        self.save(&projects)?;
        Ok(removed)
    }

    /// Look up by id or alias; alias comparison is case-insensitive.
    pub fn find(&self, needle: &str) -> Option<Project> {
        let projects = self.load();
        projects
            .iter()
            .find(|p| p.id == needle)
            .or_else(|| {
                projects
                    .iter()
                    .find(|p| p.alias.eq_ignore_ascii_case(needle))
            })
            .cloned()
    }

    /// Flip the favorite flag; returns the new value.
    pub fn toggle_favorite(&self, id: &str) -> Result<bool> {
        let updated = self.update(id, |p| p.is_favorite = !p.is_favorite)?;
        Ok(updated.is_favorite)
    }

    /// Record that a project was just opened.
    pub fn touch_last_opened(&self, id: &str) -> Result<()> {
        self.update(id, |p| p.last_opened_at = Some(Utc::now()))?;
        Ok(())
    }

    /// Distinct group names across all projects, sorted.
    pub fn groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = self
            .load()
            .into_iter()
            .filter_map(|p| p.group)
            .collect();
        groups.sort();
        groups.dedup();
        groups
    }

    pub fn set_group(&self, id: &str, group: Option<String>) -> Result<()> {
        self.update(id, |p| p.group = group)?;
        Ok(())
    }

    pub fn alias_exists(&self, alias: &str, exclude_id: Option<&str>) -> bool {
        alias_taken(&self.load(), alias, exclude_id)
    }

    /// Delete every stored project.
    pub fn clear(&self) -> Result<()> {
        self.save(&[])
    }
}

fn alias_taken(projects: &[Project], alias: &str, exclude_id: Option<&str>) -> bool {
    projects
        .iter()
        .any(|p| p.alias.eq_ignore_ascii_case(alias) && Some(p.id.as_str()) != exclude_id)
}

/// Default data directory (`~/.portico/`).
pub fn default_store_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".portico")
}
