//! Git status detection for project listings
//!
//! Shells out to the `git` binary rather than linking a libgit2 binding;
//! all we need is the branch name, dirtiness and ahead/behind counts, and
//! the binary is guaranteed present on any machine with cloned projects.
//! Every query degrades to "not a repo" on failure: a broken repo must
//! never break the launcher.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tokio::process::Command;

use crate::domain::GitStatus;

/// A stuck git process (e.g. a repo on a dead network mount) gets this
/// long before we report the path as not-a-repo.
const GIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Git status for a single directory.
pub async fn status(path: &Path) -> GitStatus {
    if !path.join(".git").exists() {
        return GitStatus::not_a_repo();
    }

    match query_status(path).await {
        Ok(status) => status,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "git status query failed");
            GitStatus::not_a_repo()
        }
    }
}

/// Combined status over all of a project's paths.
///
/// A single path delegates to [`status`]. Several paths are merged: one
/// distinct branch name is reported as-is, several as `"N branches"`, and
/// the result is dirty if any member repo is dirty. Ahead/behind counts
/// only make sense per-repo and are left out of merged results.
pub async fn combined_status(paths: &[PathBuf]) -> Option<GitStatus> {
    match paths {
        [] => None,
        [only] => Some(status(only).await),
        many => {
            let mut repos = Vec::new();
            for path in many {
                let s = status(path).await;
                if s.is_git_repo {
                    repos.push(s);
                }
            }

            if repos.is_empty() {
                return Some(GitStatus::not_a_repo());
            }

            let mut branches: Vec<String> =
                repos.iter().filter_map(|s| s.branch.clone()).collect();
            branches.sort();
            branches.dedup();

            let branch = match branches.as_slice() {
                [] => None,
                [only] => Some(only.clone()),
                many => Some(format!("{} branches", many.len())),
            };

            Some(GitStatus {
                is_git_repo: true,
                branch,
                has_changes: repos.iter().any(|s| s.has_changes),
                ahead: None,
                behind: None,
            })
        }
    }
}

async fn query_status(path: &Path) -> Result<GitStatus> {
    let branch = run_git(path, &["rev-parse", "--abbrev-ref", "HEAD"]).await?;
    let porcelain = run_git(path, &["status", "--porcelain"]).await?;
    let (ahead, behind) = ahead_behind(path).await;

    Ok(GitStatus {
        is_git_repo: true,
        branch: Some(branch),
        has_changes: !porcelain.is_empty(),
        ahead: Some(ahead),
        behind: Some(behind),
    })
}

/// Commits ahead of / behind the upstream branch; 0/0 when there is no
/// upstream configured.
async fn ahead_behind(path: &Path) -> (u32, u32) {
    let counts = match run_git(
        path,
        &["rev-list", "--left-right", "--count", "HEAD...@{upstream}"],
    )
    .await
    {
        Ok(counts) => counts,
        Err(_) => return (0, 0),
    };

    let mut parts = counts.split_whitespace();
    let ahead = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let behind = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    (ahead, behind)
}

/// Run a git subcommand in `cwd`, returning trimmed stdout.
async fn run_git(cwd: &Path, args: &[&str]) -> Result<String> {
    let child = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output();

    let output = tokio::time::timeout(GIT_TIMEOUT, child)
        .await
        .with_context(|| format!("git {} timed out", args.join(" ")))?
        .with_context(|| format!("Failed to run git {}", args.join(" ")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("git {} failed: {}", args.join(" "), stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
