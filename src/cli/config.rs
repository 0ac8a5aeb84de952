//! `portico config` - show or change the user defaults

use anyhow::{Context, Result, bail};

use portico::apps;
use portico::config::Config;

pub async fn config_command(
    terminal: Option<String>,
    editor: Option<String>,
    command: Option<String>,
    unset_command: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if terminal.is_none() && editor.is_none() && command.is_none() && !unset_command {
        println!("Config file: {}", Config::config_path().display());
        println!(
            "default_terminal: {}",
            config.default_terminal.as_deref().unwrap_or("-")
        );
        println!(
            "default_editor:   {}",
            config.default_editor.as_deref().unwrap_or("-")
        );
        println!(
            "default_command:  {}",
            config.default_command.as_deref().unwrap_or("-")
        );
        return Ok(());
    }

    if let Some(ident) = terminal {
        let known = apps::find_terminal(&ident)
            .with_context(|| format!("unknown terminal '{}' (see: portico apps)", ident))?;
        config.default_terminal = Some(known.bundle_id.to_string());
    }

    if let Some(ident) = editor {
        let known = apps::find_editor(&ident)
            .with_context(|| format!("unknown editor '{}' (see: portico apps)", ident))?;
        config.default_editor = Some(known.bundle_id.to_string());
    }

    if unset_command {
        if command.is_some() {
            bail!("--command and --unset-command are mutually exclusive");
        }
        config.default_command = None;
    } else if let Some(command) = command {
        config.default_command = Some(command);
    }

    config.save()?;
    println!("Saved {}", Config::config_path().display());
    Ok(())
}
