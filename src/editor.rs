//! Editor opening
//!
//! Opens a project's paths in its editor through the editor's CLI command
//! (`code path1 path2 ...`). Multi-root editors get all paths in one
//! window; the rest get one invocation per path. Unknown editors fall
//! back to `open -b`.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tokio::process::Command;

use crate::apps::{self, KnownEditor};
use crate::domain::Project;

/// Open every path of `project` in the given editor.
pub async fn open_in_editor(project: &Project, editor: &KnownEditor) -> Result<()> {
    tracing::debug!(
        editor = editor.name,
        cli = editor.cli,
        paths = project.paths.len(),
        "opening project in editor"
    );

    if editor.multi_root {
        run_editor_cli(editor, &project.paths).await
    } else {
        for path in &project.paths {
            run_editor_cli(editor, std::slice::from_ref(path)).await?;
        }
        Ok(())
    }
}

/// Open paths with an editor we have no CLI mapping for.
pub async fn open_with_bundle_id(bundle_id: &str, paths: &[PathBuf]) -> Result<()> {
    // One window per path: without the editor's CLI there is no way to
    // request a multi-root window.
    for path in paths {
        let output = Command::new("open")
            .arg("-b")
            .arg(bundle_id)
            .arg(path)
            .output()
            .await
            .context("Failed to run open")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("open -b {} failed: {}", bundle_id, stderr.trim());
        }
    }
    Ok(())
}

async fn run_editor_cli(editor: &KnownEditor, paths: &[PathBuf]) -> Result<()> {
    let output = Command::new(editor.cli)
        .args(paths)
        .output()
        .await
        .with_context(|| format!("Failed to run '{}' (is the {} CLI installed?)", editor.cli, editor.name))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("{} failed: {}", editor.cli, stderr.trim());
    }

    Ok(())
}

/// Resolve a project's editor to a catalog entry, if we know it.
pub fn resolve(project: &Project) -> Option<&'static KnownEditor> {
    project
        .editor
        .as_ref()
        .and_then(|app| apps::find_editor(&app.bundle_id))
}
