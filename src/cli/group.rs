//! `portico group` - assign projects to groups

use anyhow::{Result, bail};

use portico::store::ProjectStore;

use super::resolve_project;

pub async fn group_command(
    store: &ProjectStore,
    query: &str,
    name: Option<String>,
    clear: bool,
) -> Result<()> {
    let project = resolve_project(store, query)?;

    if clear {
        store.set_group(&project.id, None)?;
        println!("Removed '{}' from its group", project.alias);
        return Ok(());
    }

    let Some(name) = name else {
        match project.group {
            Some(group) => println!("'{}' is in group '{}'", project.alias, group),
            None => println!("'{}' has no group", project.alias),
        }
        let groups = store.groups();
        if !groups.is_empty() {
            println!("Existing groups: {}", groups.join(", "));
        }
        return Ok(());
    };

    if name.trim().is_empty() {
        bail!("group name must not be empty (use --clear to remove)");
    }

    store.set_group(&project.id, Some(name.clone()))?;
    println!("Moved '{}' to group '{}'", project.alias, name);
    Ok(())
}
