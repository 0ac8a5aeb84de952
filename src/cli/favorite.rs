//! `portico favorite` - toggle a project's favorite flag

use anyhow::Result;

use portico::store::ProjectStore;

use super::resolve_project;

pub async fn favorite_command(store: &ProjectStore, query: &str) -> Result<()> {
    let project = resolve_project(store, query)?;
    let favorited = store.toggle_favorite(&project.id)?;

    if favorited {
        println!("'{}' marked as favorite", project.alias);
    } else {
        println!("'{}' is no longer a favorite", project.alias);
    }
    Ok(())
}
