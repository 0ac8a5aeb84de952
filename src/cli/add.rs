//! `portico add` - save a new project

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use portico::apps;
use portico::domain::{AppInfo, Project};
use portico::store::ProjectStore;

pub async fn add_command(
    store: &ProjectStore,
    alias: String,
    paths: Vec<PathBuf>,
    terminal: Option<String>,
    editor: Option<String>,
    group: Option<String>,
) -> Result<()> {
    if alias.trim().is_empty() {
        bail!("alias must not be empty");
    }

    let mut resolved = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path
            .canonicalize()
            .with_context(|| format!("path does not exist: {}", path.display()))?;
        if !path.is_dir() {
            bail!("not a directory: {}", path.display());
        }
        resolved.push(path);
    }

    let mut project = Project::new(alias, resolved);

    if let Some(ident) = terminal {
        let known = apps::find_terminal(&ident)
            .with_context(|| format!("unknown terminal '{}' (see: portico apps)", ident))?;
        project.terminal = Some(AppInfo::new(known.name, known.bundle_id));
    }

    if let Some(ident) = editor {
        let known = apps::find_editor(&ident)
            .with_context(|| format!("unknown editor '{}' (see: portico apps)", ident))?;
        project.editor = Some(AppInfo::new(known.name, known.bundle_id));
    }

    project.group = group;

    let project = store.add(project)?;
    println!(
        "Added '{}' ({} path{})",
        project.alias,
        project.paths.len(),
        if project.paths.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
