//! Shell and AppleScript escaping
//!
//! Everything we hand to a terminal goes through two textual sub-languages:
//! POSIX shell argument syntax and AppleScript double-quoted string literals.
//! These helpers make sure a project path or user-configured command can
//! never break out of its quoting context and smuggle in extra instructions.

/// Escape a string for use as a single shell word.
///
/// Wraps the string in single quotes and rewrites every embedded single
/// quote as `'\''` (close the quote, emit an escaped quote, reopen). A
/// POSIX shell parsing the result as one word recovers the input exactly,
/// including empty strings, newlines, `$`, backticks and semicolons.
pub fn escape_shell_arg(arg: &str) -> String {
    format!("'{}'", arg.replace('\'', "'\\''"))
}

/// Escape a string for embedding in an AppleScript double-quoted literal.
///
/// Backslashes are escaped first; doing it in any other order would
/// double-escape the backslashes inserted by the later substitutions.
pub fn escape_applescript_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Build the `cd` (and optional follow-up command) line for a new shell.
///
/// The directory and the command are escaped independently and joined with
/// `&&`, so the command never runs if the directory change fails. The
/// command is escaped as one shell word: it is user-configured and trusted
/// as "their own command", but escaping keeps special characters inert.
pub fn build_safe_shell_command(path: &str, command: Option<&str>) -> String {
    let safe_path = escape_shell_arg(path);

    match command {
        Some(cmd) => format!("cd {} && {}", safe_path, escape_shell_arg(cmd)),
        None => format!("cd {}", safe_path),
    }
}
