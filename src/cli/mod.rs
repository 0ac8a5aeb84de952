//! CLI command implementations

pub mod add;
pub mod apps;
pub mod clear;
pub mod config;
pub mod favorite;
pub mod group;
pub mod list;
pub mod open;
pub mod remove;

use anyhow::{Result, bail};
use portico::Project;
use portico::store::ProjectStore;

/// Similarity floor for "did you mean" suggestions.
const SUGGEST_THRESHOLD: f64 = 0.75;

/// Resolve a user-supplied alias or id to a project, suggesting the
/// closest alias on a miss.
pub(crate) fn resolve_project(store: &ProjectStore, query: &str) -> Result<Project> {
    if let Some(project) = store.find(query) {
        return Ok(project);
    }

    if let Some(alias) = closest_alias(&store.load(), query) {
        bail!("no project matching '{}' (did you mean '{}'?)", query, alias);
    }
    bail!("no project matching '{}'", query);
}

fn closest_alias(projects: &[Project], query: &str) -> Option<String> {
    let query = query.to_lowercase();

    projects
        .iter()
        .map(|p| {
            let score = strsim::jaro_winkler(&p.alias.to_lowercase(), &query);
            (score, &p.alias)
        })
        .filter(|(score, _)| *score >= SUGGEST_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, alias)| alias.clone())
}

/// Shorten a string for table output.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_closest_alias_suggests_near_misses() {
        let projects = vec![
            Project::new("frontend", vec![PathBuf::from("/tmp/f")]),
            Project::new("backend", vec![PathBuf::from("/tmp/b")]),
        ];

        assert_eq!(
            closest_alias(&projects, "frontnd").as_deref(),
            Some("frontend")
        );
        assert_eq!(closest_alias(&projects, "zzz"), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-alias", 8), "a-very-…");
    }
}
