//! `portico open` - open a project in its terminal or editor
//!
//! This is the hot path: resolve the alias, pick the right application,
//! hand off to the launch strategy, and stamp the recents timestamp.

use anyhow::{Result, bail};

use portico::apps;
use portico::config::Config;
use portico::domain::Project;
use portico::editor;
use portico::store::ProjectStore;
use portico::terminal::{LaunchParams, create_terminal_executor};

use super::resolve_project;

/// Terminal used when neither the project nor the config names one.
const FALLBACK_TERMINAL: &str = "com.apple.Terminal";

pub async fn open_command(
    store: &ProjectStore,
    query: &str,
    in_editor: bool,
    command: Option<String>,
    terminal_override: Option<String>,
) -> Result<()> {
    let project = resolve_project(store, query)?;
    let config = Config::load()?;

    // Executors assume the directory exists; check here, at the boundary.
    let missing: Vec<_> = project.paths.iter().filter(|p| !p.is_dir()).collect();
    if !missing.is_empty() {
        bail!(
            "project path does not exist: {}",
            missing
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    if in_editor {
        open_editor(&project, &config).await?;
        store.touch_last_opened(&project.id)?;
        println!("Opened '{}' in editor", project.alias);
        return Ok(());
    }

    let bundle_id = resolve_terminal_bundle(&project, &config, terminal_override.as_deref());
    let command = command.or_else(|| config.default_command.clone());

    let name = apps::find_terminal(&bundle_id)
        .map(|t| t.name.to_string())
        .unwrap_or_else(|| bundle_id.clone());

    // One window per configured path; launches are independent, so a
    // failure aborts the remainder but cannot affect windows already open.
    for path in &project.paths {
        let executor = create_terminal_executor(&bundle_id);
        let params = LaunchParams::new(path.clone(), command.clone());
        executor.execute(&params).await?;
    }

    store.touch_last_opened(&project.id)?;
    println!("Opened '{}' in {}", project.alias, name);

    Ok(())
}

fn resolve_terminal_bundle(
    project: &Project,
    config: &Config,
    terminal_override: Option<&str>,
) -> String {
    if let Some(ident) = terminal_override {
        // Accept a catalog name ("iterm") or a raw bundle id; unknown
        // bundle ids get the generic launch strategy downstream.
        return apps::find_terminal(ident)
            .map(|t| t.bundle_id.to_string())
            .unwrap_or_else(|| ident.to_string());
    }

    project
        .terminal
        .as_ref()
        .map(|app| app.bundle_id.clone())
        .or_else(|| config.default_terminal.clone())
        .unwrap_or_else(|| FALLBACK_TERMINAL.to_string())
}

async fn open_editor(project: &Project, config: &Config) -> Result<()> {
    if let Some(known) = editor::resolve(project) {
        return editor::open_in_editor(project, known).await;
    }

    // Project pins an editor we have no CLI mapping for
    if let Some(app) = &project.editor {
        return editor::open_with_bundle_id(&app.bundle_id, &project.paths).await;
    }

    if let Some(bundle_id) = &config.default_editor {
        if let Some(known) = apps::find_editor(bundle_id) {
            return editor::open_in_editor(project, known).await;
        }
        return editor::open_with_bundle_id(bundle_id, &project.paths).await;
    }

    bail!(
        "no editor configured for '{}' (set one with: portico add, or default_editor in {})",
        project.alias,
        Config::config_path().display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico::domain::AppInfo;
    use std::path::PathBuf;

    fn project_with_terminal(bundle_id: Option<&str>) -> Project {
        let mut project = Project::new("demo", vec![PathBuf::from("/tmp/demo")]);
        project.terminal = bundle_id.map(|id| AppInfo::new("Some Terminal", id));
        project
    }

    #[test]
    fn test_override_beats_project_and_config() {
        let project = project_with_terminal(Some("net.kovidgoyal.kitty"));
        let config = Config {
            default_terminal: Some("io.alacritty".to_string()),
            ..Config::default()
        };

        assert_eq!(
            resolve_terminal_bundle(&project, &config, Some("iterm")),
            "com.googlecode.iterm2"
        );
    }

    #[test]
    fn test_project_terminal_beats_config_default() {
        let project = project_with_terminal(Some("net.kovidgoyal.kitty"));
        let config = Config {
            default_terminal: Some("io.alacritty".to_string()),
            ..Config::default()
        };

        assert_eq!(
            resolve_terminal_bundle(&project, &config, None),
            "net.kovidgoyal.kitty"
        );
    }

    #[test]
    fn test_fallback_terminal() {
        let project = project_with_terminal(None);
        assert_eq!(
            resolve_terminal_bundle(&project, &Config::default(), None),
            FALLBACK_TERMINAL
        );
    }

    #[test]
    fn test_unknown_override_passes_through_as_bundle_id() {
        let project = project_with_terminal(None);
        assert_eq!(
            resolve_terminal_bundle(&project, &Config::default(), Some("my.custom.Terminal")),
            "my.custom.Terminal"
        );
    }
}
