use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use portico::store::ProjectStore;

mod cli;

#[derive(Parser)]
#[command(name = "portico")]
#[command(about = "Personal project launcher - aliases for your repos, opened in the right terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use a different project store file (defaults to ~/.portico/projects.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a new project
    Add {
        /// Short alias used to open the project
        alias: String,

        /// One or more project directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Terminal to open this project in (bundle id or name)
        #[arg(long)]
        terminal: Option<String>,

        /// Editor to open this project in (bundle id or name)
        #[arg(long)]
        editor: Option<String>,

        /// Group label shown in listings
        #[arg(long)]
        group: Option<String>,
    },

    /// List saved projects
    List {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,

        /// Only show projects in this group
        #[arg(long)]
        group: Option<String>,
    },

    /// Open a project in its terminal (or editor with -e)
    Open {
        /// Alias or project id
        project: String,

        /// Open in the editor instead of the terminal
        #[arg(short, long)]
        editor: bool,

        /// Command to run in the new shell after changing directory
        #[arg(short, long)]
        command: Option<String>,

        /// Override the terminal for this launch (bundle id or name)
        #[arg(long)]
        terminal: Option<String>,
    },

    /// Delete a project
    Remove {
        /// Alias or project id
        project: String,
    },

    /// Toggle a project's favorite flag
    Favorite {
        /// Alias or project id
        project: String,
    },

    /// Show or change a project's group
    Group {
        /// Alias or project id
        project: String,

        /// New group name (omit to show the current one)
        name: Option<String>,

        /// Remove the project from its group
        #[arg(long)]
        clear: bool,
    },

    /// Show supported terminals and editors
    Apps,

    /// Show or change the user defaults
    Config {
        /// Default terminal (bundle id or name)
        #[arg(long)]
        terminal: Option<String>,

        /// Default editor (bundle id or name)
        #[arg(long)]
        editor: Option<String>,

        /// Default command run after cd on every terminal open
        #[arg(long)]
        command: Option<String>,

        /// Remove the default command
        #[arg(long)]
        unset_command: bool,
    },

    /// Delete all stored projects
    Clear {
        /// Skip the safety check
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let store = match cli.store {
        Some(path) => ProjectStore::at(path),
        None => ProjectStore::open_default(),
    };

    match cli.command {
        Commands::Add {
            alias,
            paths,
            terminal,
            editor,
            group,
        } => {
            cli::add::add_command(&store, alias, paths, terminal, editor, group).await?;
        }
        Commands::List { json, group } => {
            cli::list::list_command(&store, json, group).await?;
        }
        Commands::Open {
            project,
            editor,
            command,
            terminal,
        } => {
            cli::open::open_command(&store, &project, editor, command, terminal).await?;
        }
        Commands::Remove { project } => {
            cli::remove::remove_command(&store, &project).await?;
        }
        Commands::Favorite { project } => {
            cli::favorite::favorite_command(&store, &project).await?;
        }
        Commands::Group {
            project,
            name,
            clear,
        } => {
            cli::group::group_command(&store, &project, name, clear).await?;
        }
        Commands::Apps => {
            cli::apps::apps_command().await?;
        }
        Commands::Config {
            terminal,
            editor,
            command,
            unset_command,
        } => {
            cli::config::config_command(terminal, editor, command, unset_command).await?;
        }
        Commands::Clear { force } => {
            cli::clear::clear_command(&store, force).await?;
        }
    }

    Ok(())
}
