//! Terminal launch integration for macOS
//!
//! Opens a project directory in the user's preferred terminal application,
//! optionally running a command in the fresh session. There is no single
//! mechanism that works for every terminal, so each known application gets
//! its own launch strategy:
//!
//! - direct process spawn for terminals with CLI flags for the working
//!   directory (kitty, Alacritty, WezTerm, Ghostty)
//! - AppleScript automation for terminals that can only be driven through
//!   scripting (Terminal.app, iTerm2)
//! - clipboard + simulated keystrokes for Warp, which exposes neither
//! - `open -b` as the fallback for anything we don't recognize
//!
//! Executors hold no state; a launch either completes or fails once, and
//! concurrent launches are fully independent.

pub mod escape;

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use arboard::Clipboard;
use once_cell::sync::Lazy;
use tokio::process::Command;

use self::escape::{build_safe_shell_command, escape_applescript_string, escape_shell_arg};

/// kitty ships no symlink into PATH, so we invoke the bundle binary directly.
const KITTY_BIN: &str = "/Applications/kitty.app/Contents/MacOS/kitty";

/// Same story for Ghostty.
const GHOSTTY_BIN: &str = "/Applications/Ghostty.app/Contents/MacOS/ghostty";

/// Upper bound for the Warp keystroke sequence, which contains fixed UI
/// delays and can stall if Warp is slow to launch.
const WARP_TIMEOUT: Duration = Duration::from_secs(15);

/// Target directory plus optional command for a single terminal launch.
///
/// The path is assumed to be an existing absolute directory; callers
/// validate before launching.
#[derive(Debug, Clone)]
pub struct LaunchParams {
    pub path: PathBuf,
    pub command: Option<String>,
}

impl LaunchParams {
    pub fn new(path: impl Into<PathBuf>, command: Option<String>) -> Self {
        Self {
            path: path.into(),
            command,
        }
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }
}

/// The terminal families we know how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalKind {
    /// macOS built-in Terminal.app (AppleScript `do script`)
    TerminalApp,
    /// iTerm2 (AppleScript `create window` + `write text`)
    ITerm2,
    /// kitty (direct spawn, `--directory`)
    Kitty,
    /// Alacritty (direct spawn, `--working-directory`)
    Alacritty,
    /// Ghostty (direct spawn, `--working-directory=`)
    Ghostty,
    /// WezTerm (direct spawn, `start --cwd`)
    WezTerm,
    /// Warp (no scripting API; clipboard + keystroke simulation)
    Warp,
    /// Anything else: `open -b`, best effort
    Generic,
}

/// Bundle id to terminal kind. Unknown bundle ids fall back to Generic.
static BUNDLE_ID_TO_KIND: Lazy<HashMap<&'static str, TerminalKind>> = Lazy::new(|| {
    HashMap::from([
        ("com.apple.Terminal", TerminalKind::TerminalApp),
        ("com.googlecode.iterm2", TerminalKind::ITerm2),
        ("net.kovidgoyal.kitty", TerminalKind::Kitty),
        ("io.alacritty", TerminalKind::Alacritty),
        ("com.mitchellh.ghostty", TerminalKind::Ghostty),
        ("com.github.wez.wezterm", TerminalKind::WezTerm),
        ("dev.warp.Warp-Stable", TerminalKind::Warp),
    ])
});

/// A launch strategy bound to a concrete application.
///
/// Executors are cheap throwaway values; build one per launch.
#[derive(Debug, Clone)]
pub struct TerminalExecutor {
    kind: TerminalKind,
    bundle_id: String,
}

/// Pick the launch strategy for a bundle id.
///
/// Deterministic and side-effect free: known bundle ids always map to the
/// same specialized strategy, everything else to the generic one.
pub fn create_terminal_executor(bundle_id: &str) -> TerminalExecutor {
    let kind = BUNDLE_ID_TO_KIND
        .get(bundle_id)
        .copied()
        .unwrap_or(TerminalKind::Generic);

    TerminalExecutor {
        kind,
        bundle_id: bundle_id.to_string(),
    }
}

impl TerminalExecutor {
    pub fn kind(&self) -> TerminalKind {
        self.kind
    }

    /// Open a terminal window at `params.path`, running `params.command`
    /// in it when supplied.
    ///
    /// Resolves once the launch mechanism reports completion; fails on a
    /// non-zero exit or scripting error. Nothing is retried.
    pub async fn execute(&self, params: &LaunchParams) -> Result<()> {
        tracing::debug!(
            bundle_id = %self.bundle_id,
            kind = ?self.kind,
            path = %params.path.display(),
            "launching terminal"
        );

        match self.kind {
            TerminalKind::TerminalApp => run_osascript(&terminal_app_script(params)).await,
            TerminalKind::ITerm2 => run_osascript(&iterm2_script(params)).await,
            TerminalKind::Kitty => run_shell(&kitty_command_line(params)).await,
            TerminalKind::Alacritty => run_shell(&alacritty_command_line(params)).await,
            TerminalKind::Ghostty => run_shell(&ghostty_command_line(params)).await,
            TerminalKind::WezTerm => run_shell(&wezterm_command_line(params)).await,
            TerminalKind::Warp => execute_warp(params).await,
            TerminalKind::Generic => execute_generic(&self.bundle_id, params).await,
        }
    }
}

// ---------------------------------------------------------------------------
// Direct-process family
//
// These terminals take the working directory as a CLI flag and an inline
// command via `sh -c`. The inline script ends with `exec $SHELL` so the
// interactive shell replaces the one-shot command and the window stays
// open afterwards. Escaping is two-layered: the command is escaped once as
// a standalone shell word, and the whole script is escaped again as the
// single argument to `sh -c`.
// ---------------------------------------------------------------------------

fn inline_shell_script(command: &str) -> String {
    escape_shell_arg(&format!("{}; exec $SHELL", escape_shell_arg(command)))
}

fn kitty_command_line(params: &LaunchParams) -> String {
    let safe_path = escape_shell_arg(&params.path_str());

    match params.command() {
        Some(command) => format!(
            "{} --directory {} sh -c {}",
            escape_shell_arg(KITTY_BIN),
            safe_path,
            inline_shell_script(command)
        ),
        None => format!("{} --directory {}", escape_shell_arg(KITTY_BIN), safe_path),
    }
}

fn alacritty_command_line(params: &LaunchParams) -> String {
    let safe_path = escape_shell_arg(&params.path_str());

    match params.command() {
        Some(command) => format!(
            "alacritty --working-directory {} -e sh -c {}",
            safe_path,
            inline_shell_script(command)
        ),
        None => format!("alacritty --working-directory {}", safe_path),
    }
}

fn ghostty_command_line(params: &LaunchParams) -> String {
    let safe_path = escape_shell_arg(&params.path_str());

    match params.command() {
        Some(command) => format!(
            "{} --working-directory={} -e sh -c {}",
            escape_shell_arg(GHOSTTY_BIN),
            safe_path,
            inline_shell_script(command)
        ),
        None => format!(
            "{} --working-directory={}",
            escape_shell_arg(GHOSTTY_BIN),
            safe_path
        ),
    }
}

fn wezterm_command_line(params: &LaunchParams) -> String {
    let safe_path = escape_shell_arg(&params.path_str());

    match params.command() {
        Some(command) => format!(
            "wezterm start --cwd {} -- sh -c {}",
            safe_path,
            inline_shell_script(command)
        ),
        None => format!("wezterm start --cwd {}", safe_path),
    }
}

// ---------------------------------------------------------------------------
// AppleScript family
//
// No CLI flag for the working directory, but the application is scriptable:
// build the cd line with shell escaping, escape the whole line again for
// the AppleScript string literal, and splice it into a fixed template.
// ---------------------------------------------------------------------------

fn terminal_app_script(params: &LaunchParams) -> String {
    let script = build_safe_shell_command(&params.path_str(), params.command());
    let escaped = escape_applescript_string(&script);

    format!("tell application \"Terminal\" to do script \"{escaped}\"")
}

fn iterm2_script(params: &LaunchParams) -> String {
    let script = build_safe_shell_command(&params.path_str(), params.command());
    let escaped = escape_applescript_string(&script);

    format!(
        r#"tell application "iTerm2"
    create window with default profile
    tell current session of current window
        write text "{escaped}"
    end tell
end tell"#
    )
}

// ---------------------------------------------------------------------------
// Warp
// ---------------------------------------------------------------------------

/// Warp has no AppleScript command for running a script, so the command
/// travels via the clipboard and gets pasted into a new tab with simulated
/// keystrokes. The command text itself never appears inside the script.
/// The delays give Warp time to come to the foreground and open the tab;
/// the whole sequence is best-effort and wall-clock dependent.
fn warp_keystroke_script() -> String {
    [
        r#"tell application "Warp" to activate"#,
        "delay 0.3",
        r#"tell application "System Events" to tell process "Warp" to keystroke "t" using command down"#,
        "delay 0.5",
        r#"tell application "System Events" to keystroke "v" using command down"#,
        "delay 1",
        r#"tell application "System Events" to key code 36"#,
    ]
    .join("\n")
}

async fn execute_warp(params: &LaunchParams) -> Result<()> {
    let full_command = build_safe_shell_command(&params.path_str(), params.command());

    set_clipboard(&full_command)?;

    match tokio::time::timeout(WARP_TIMEOUT, run_osascript(&warp_keystroke_script())).await {
        Ok(result) => result,
        Err(_) => bail!(
            "Warp keystroke sequence timed out after {}s",
            WARP_TIMEOUT.as_secs()
        ),
    }
}

fn set_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to copy command to clipboard")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Generic fallback
// ---------------------------------------------------------------------------

/// Best effort for terminals we have no integration for: hand the path to
/// `open -b`, which at least gets a window at the right directory. There
/// is no scripting hook to inject a command through, so a configured
/// command is dropped with a warning rather than failing the launch.
async fn execute_generic(bundle_id: &str, params: &LaunchParams) -> Result<()> {
    if let Some(command) = params.command() {
        tracing::warn!(
            bundle_id,
            command,
            "terminal has no scripting integration; ignoring configured command"
        );
    }

    let output = Command::new("open")
        .arg("-b")
        .arg(bundle_id)
        .arg(&params.path)
        .output()
        .await
        .context("Failed to run open")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("open -b {} failed: {}", bundle_id, stderr.trim());
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Process plumbing
// ---------------------------------------------------------------------------

/// Run an assembled command line through `/bin/sh`.
///
/// The line is built from independently escaped words, so the shell only
/// ever sees quoting we produced ourselves.
async fn run_shell(command_line: &str) -> Result<()> {
    let output = Command::new("/bin/sh")
        .arg("-c")
        .arg(command_line)
        .output()
        .await
        .context("Failed to launch shell")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "terminal launch failed with status {}: {}",
            output.status,
            stderr.trim()
        );
    }

    Ok(())
}

async fn run_osascript(script: &str) -> Result<()> {
    let output = Command::new("osascript")
        .arg("-e")
        .arg(script)
        .output()
        .await
        .context("Failed to run osascript")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("AppleScript failed: {}", stderr.trim());
    }

    Ok(())
}
