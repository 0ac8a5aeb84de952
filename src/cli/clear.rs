//! `portico clear` - wipe all stored projects

use anyhow::{Result, bail};

use portico::store::ProjectStore;

pub async fn clear_command(store: &ProjectStore, force: bool) -> Result<()> {
    let count = store.load().len();

    if count == 0 {
        println!("Nothing to clear.");
        return Ok(());
    }

    if !force {
        bail!(
            "this deletes all {} saved project{} and cannot be undone; re-run with --force",
            count,
            if count == 1 { "" } else { "s" }
        );
    }

    store.clear()?;
    println!(
        "Cleared {} project{}",
        count,
        if count == 1 { "" } else { "s" }
    );
    Ok(())
}
