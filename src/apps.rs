//! Known-application catalog
//!
//! Static whitelists of the terminals and editors we know how to drive,
//! keyed by macOS bundle id. These are configuration data, not state; the
//! tables never change at runtime.

use anyhow::{Context, Result};
use tokio::process::Command;

/// A supported terminal application.
#[derive(Debug, Clone, Copy)]
pub struct KnownTerminal {
    pub bundle_id: &'static str,
    pub name: &'static str,
}

/// A supported editor application.
#[derive(Debug, Clone, Copy)]
pub struct KnownEditor {
    pub bundle_id: &'static str,
    pub name: &'static str,
    /// CLI command used to open paths
    pub cli: &'static str,
    /// Whether one window can hold several root folders
    pub multi_root: bool,
}

pub static SUPPORTED_TERMINALS: &[KnownTerminal] = &[
    KnownTerminal { bundle_id: "com.apple.Terminal", name: "Terminal" },
    KnownTerminal { bundle_id: "com.googlecode.iterm2", name: "iTerm" },
    KnownTerminal { bundle_id: "dev.warp.Warp-Stable", name: "Warp" },
    KnownTerminal { bundle_id: "com.github.wez.wezterm", name: "WezTerm" },
    KnownTerminal { bundle_id: "net.kovidgoyal.kitty", name: "Kitty" },
    KnownTerminal { bundle_id: "co.zeit.hyper", name: "Hyper" },
    KnownTerminal { bundle_id: "com.mitchellh.ghostty", name: "Ghostty" },
    KnownTerminal { bundle_id: "io.alacritty", name: "Alacritty" },
    KnownTerminal { bundle_id: "com.panic.Prompt3", name: "Prompt" },
];

pub static SUPPORTED_EDITORS: &[KnownEditor] = &[
    KnownEditor { bundle_id: "com.todesktop.230313mzl4w4u92", name: "Cursor", cli: "cursor", multi_root: true },
    KnownEditor { bundle_id: "com.exafunction.windsurf", name: "Windsurf", cli: "windsurf", multi_root: true },
    KnownEditor { bundle_id: "com.trae.app", name: "Trae", cli: "trae", multi_root: true },
    KnownEditor { bundle_id: "com.microsoft.VSCode", name: "Visual Studio Code", cli: "code", multi_root: true },
    KnownEditor { bundle_id: "com.microsoft.VSCodeInsiders", name: "VS Code Insiders", cli: "code-insiders", multi_root: true },
    KnownEditor { bundle_id: "com.vscodium", name: "VSCodium", cli: "codium", multi_root: true },
    KnownEditor { bundle_id: "com.sublimetext.4", name: "Sublime Text", cli: "subl", multi_root: true },
    KnownEditor { bundle_id: "dev.zed.Zed", name: "Zed", cli: "zed", multi_root: true },
    KnownEditor { bundle_id: "com.jetbrains.WebStorm", name: "WebStorm", cli: "webstorm", multi_root: false },
    KnownEditor { bundle_id: "com.jetbrains.intellij", name: "IntelliJ IDEA", cli: "idea", multi_root: false },
    KnownEditor { bundle_id: "com.jetbrains.pycharm", name: "PyCharm", cli: "pycharm", multi_root: false },
    KnownEditor { bundle_id: "com.jetbrains.goland", name: "GoLand", cli: "goland", multi_root: false },
    KnownEditor { bundle_id: "com.jetbrains.rider", name: "Rider", cli: "rider", multi_root: false },
    KnownEditor { bundle_id: "com.jetbrains.clion", name: "CLion", cli: "clion", multi_root: false },
    KnownEditor { bundle_id: "com.jetbrains.phpstorm", name: "PhpStorm", cli: "phpstorm", multi_root: false },
    KnownEditor { bundle_id: "com.jetbrains.fleet", name: "Fleet", cli: "fleet", multi_root: false },
    KnownEditor { bundle_id: "com.apple.dt.Xcode", name: "Xcode", cli: "xed", multi_root: false },
    KnownEditor { bundle_id: "com.google.android.studio", name: "Android Studio", cli: "studio", multi_root: false },
    KnownEditor { bundle_id: "org.vim.MacVim", name: "MacVim", cli: "mvim", multi_root: false },
    KnownEditor { bundle_id: "com.macromates.TextMate", name: "TextMate", cli: "mate", multi_root: true },
    KnownEditor { bundle_id: "com.barebones.bbedit", name: "BBEdit", cli: "bbedit", multi_root: true },
    KnownEditor { bundle_id: "com.panic.Nova", name: "Nova", cli: "nova", multi_root: false },
];

/// Look up a terminal by bundle id, or by display name (case-insensitive)
/// as a convenience for the CLI.
pub fn find_terminal(ident: &str) -> Option<&'static KnownTerminal> {
    SUPPORTED_TERMINALS
        .iter()
        .find(|t| t.bundle_id == ident || t.name.eq_ignore_ascii_case(ident))
}

pub fn find_editor(ident: &str) -> Option<&'static KnownEditor> {
    SUPPORTED_EDITORS
        .iter()
        .find(|e| e.bundle_id == ident || e.name.eq_ignore_ascii_case(ident))
}

/// Check whether an application is installed, via Launch Services
/// (`open -Ra` resolves the app without launching it).
pub async fn is_installed(name: &str) -> Result<bool> {
    let output = Command::new("open")
        .arg("-Ra")
        .arg(name)
        .output()
        .await
        .context("Failed to run open")?;

    Ok(output.status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_terminal_by_bundle_id_and_name() {
        assert_eq!(
            find_terminal("com.apple.Terminal").map(|t| t.name),
            Some("Terminal")
        );
        assert_eq!(
            find_terminal("iterm").map(|t| t.bundle_id),
            Some("com.googlecode.iterm2")
        );
        assert!(find_terminal("not-a-terminal").is_none());
    }

    #[test]
    fn test_multi_root_capability() {
        assert!(find_editor("com.microsoft.VSCode").unwrap().multi_root);
        assert!(!find_editor("com.jetbrains.WebStorm").unwrap().multi_root);
    }

    #[test]
    fn test_no_duplicate_bundle_ids() {
        let mut ids: Vec<_> = SUPPORTED_TERMINALS
            .iter()
            .map(|t| t.bundle_id)
            .chain(SUPPORTED_EDITORS.iter().map(|e| e.bundle_id))
            .collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
}
