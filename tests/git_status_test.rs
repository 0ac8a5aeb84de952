//! Integration tests for git status detection
//!
//! These drive the real git binary against throwaway repositories.

use std::fs;
use std::path::Path;
use std::process::Command;

use portico::git;
use tempfile::TempDir;

/// Creates a temporary git repository with one commit on `main`.
fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo_path = temp_dir.path();

    git_in(repo_path, &["-c", "init.defaultBranch=main", "init"]);
    git_in(repo_path, &["config", "user.email", "test@test.com"]);
    git_in(repo_path, &["config", "user.name", "Test User"]);

    fs::write(repo_path.join("test.txt"), "initial content\n")
        .expect("Failed to write initial file");
    git_in(repo_path, &["add", "."]);
    git_in(repo_path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

fn git_in(repo: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .expect("Failed to run git")
        .status;
    assert!(status.success(), "git {args:?} failed");
}

#[tokio::test]
async fn test_clean_repo_status() {
    let repo = create_test_repo();
    let status = git::status(repo.path()).await;

    assert!(status.is_git_repo);
    assert_eq!(status.branch.as_deref(), Some("main"));
    assert!(!status.has_changes);
    // No upstream configured
    assert_eq!(status.ahead, Some(0));
    assert_eq!(status.behind, Some(0));
}

#[tokio::test]
async fn test_dirty_repo_status() {
    let repo = create_test_repo();
    fs::write(repo.path().join("test.txt"), "changed\n").unwrap();

    let status = git::status(repo.path()).await;
    assert!(status.is_git_repo);
    assert!(status.has_changes);
}

#[tokio::test]
async fn test_non_repo_directory() {
    let dir = TempDir::new().unwrap();
    let status = git::status(dir.path()).await;

    assert!(!status.is_git_repo);
    assert!(status.branch.is_none());
}

#[tokio::test]
async fn test_combined_status_merges_branches() {
    let repo_a = create_test_repo();
    let repo_b = create_test_repo();
    git_in(repo_b.path(), &["checkout", "-b", "feature"]);

    let paths = vec![repo_a.path().to_path_buf(), repo_b.path().to_path_buf()];
    let status = git::combined_status(&paths).await.unwrap();

    assert!(status.is_git_repo);
    assert_eq!(status.branch.as_deref(), Some("2 branches"));
    assert_eq!(status.ahead, None);
}

#[tokio::test]
async fn test_combined_status_single_branch_name_passes_through() {
    let repo_a = create_test_repo();
    let repo_b = create_test_repo();

    let paths = vec![repo_a.path().to_path_buf(), repo_b.path().to_path_buf()];
    let status = git::combined_status(&paths).await.unwrap();

    assert_eq!(status.branch.as_deref(), Some("main"));
}

#[tokio::test]
async fn test_combined_status_empty_paths() {
    assert!(git::combined_status(&[]).await.is_none());
}

#[tokio::test]
async fn test_combined_status_ignores_non_repos() {
    let repo = create_test_repo();
    let plain = TempDir::new().unwrap();

    let paths = vec![repo.path().to_path_buf(), plain.path().to_path_buf()];
    let status = git::combined_status(&paths).await.unwrap();

    assert!(status.is_git_repo);
    assert_eq!(status.branch.as_deref(), Some("main"));
}
