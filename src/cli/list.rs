//! `portico list` - show saved projects

use anyhow::Result;

use portico::domain::{GitStatus, Project};
use portico::git;
use portico::store::ProjectStore;

use super::truncate;

pub async fn list_command(store: &ProjectStore, json: bool, group: Option<String>) -> Result<()> {
    let mut projects = store.load();

    if let Some(ref group) = group {
        projects.retain(|p| p.group.as_deref() == Some(group.as_str()));
    }

    // Favorites first, then most recently opened, then by alias.
    projects.sort_by(|a, b| {
        b.is_favorite
            .cmp(&a.is_favorite)
            .then(b.last_opened_at.cmp(&a.last_opened_at))
            .then(a.alias.cmp(&b.alias))
    });

    if json {
        #[derive(serde::Serialize)]
        struct ProjectListItem {
            #[serde(flatten)]
            project: Project,
            git: Option<GitStatus>,
        }

        let mut items = Vec::with_capacity(projects.len());
        for project in projects {
            let git = git::combined_status(&project.paths).await;
            items.push(ProjectListItem { project, git });
        }

        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if projects.is_empty() {
        if group.is_some() {
            println!("No projects in this group.");
        } else {
            println!("No projects yet.");
            println!("Add one with: portico add <alias> <path>");
        }
        return Ok(());
    }

    println!(
        "{:<2} {:<20} {:<12} {:<22} {:<40}",
        "", "ALIAS", "GROUP", "BRANCH", "PATH"
    );
    println!("{}", "-".repeat(98));

    for project in projects {
        let git = git::combined_status(&project.paths).await;
        let branch = match git {
            Some(ref s) if s.is_git_repo => {
                let name = s.branch.as_deref().unwrap_or("(detached)");
                if s.has_changes {
                    format!("{name}*")
                } else {
                    name.to_string()
                }
            }
            _ => "-".to_string(),
        };

        let path = project
            .primary_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let path = if project.paths.len() > 1 {
            format!("{} (+{})", path, project.paths.len() - 1)
        } else {
            path
        };

        println!(
            "{:<2} {:<20} {:<12} {:<22} {:<40}",
            if project.is_favorite { "*" } else { "" },
            truncate(&project.alias, 18),
            truncate(project.group.as_deref().unwrap_or("-"), 10),
            truncate(&branch, 20),
            truncate(&path, 38),
        );
    }

    Ok(())
}
