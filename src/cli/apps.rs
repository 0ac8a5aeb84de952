//! `portico apps` - show the supported application catalog

use anyhow::Result;

use portico::apps::{SUPPORTED_EDITORS, SUPPORTED_TERMINALS, is_installed};

pub async fn apps_command() -> Result<()> {
    println!("Terminals");
    println!("{:<20} {:<30} {}", "NAME", "BUNDLE ID", "INSTALLED");
    for terminal in SUPPORTED_TERMINALS {
        let installed = is_installed(terminal.name).await.unwrap_or(false);
        println!(
            "{:<20} {:<30} {}",
            terminal.name,
            terminal.bundle_id,
            if installed { "yes" } else { "-" }
        );
    }

    println!();
    println!("Editors");
    println!("{:<20} {:<30} {}", "NAME", "BUNDLE ID", "INSTALLED");
    for editor in SUPPORTED_EDITORS {
        let installed = is_installed(editor.name).await.unwrap_or(false);
        println!(
            "{:<20} {:<30} {}",
            editor.name,
            editor.bundle_id,
            if installed { "yes" } else { "-" }
        );
    }

    Ok(())
}
