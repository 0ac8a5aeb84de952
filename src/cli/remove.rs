//! `portico remove` - delete a project

use anyhow::Result;

use portico::store::ProjectStore;

use super::resolve_project;

pub async fn remove_command(store: &ProjectStore, query: &str) -> Result<()> {
    let project = resolve_project(store, query)?;
    let removed = store.remove(&project.id)?;
    println!("Removed '{}'", removed.alias);
    Ok(())
}
