use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use activity_board::{commands, config, web};

/// Activity board — browse and manage signups on the school activities API.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print raw API responses
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Path to config file
    #[arg(short = 'c', long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Override the API base URL from config
    #[arg(long, global = true)]
    base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all activities with schedules, availability and participants
    List,

    /// Sign a participant up for an activity
    Signup {
        /// Activity name, e.g. "Chess Club"
        activity: String,

        /// Participant email address
        email: String,
    },

    /// Remove a participant from an activity
    Unsign {
        /// Activity name, e.g. "Chess Club"
        activity: String,

        /// Participant email address
        email: String,
    },

    /// Start the board dashboard server
    Serve {
        /// Listen address (e.g. "0.0.0.0:3000")
        #[arg(short = 'a', long, default_value = "0.0.0.0:3009")]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let base_url = config::resolve_base_url(cli.base_url.as_deref(), &cli.config)?;

    match &cli.command {
        Command::List => commands::run_list(&base_url, cli.verbose).await?,
        Command::Signup { activity, email } => {
            commands::run_signup(&base_url, activity, email).await?;
        }
        Command::Unsign { activity, email } => {
            commands::run_unsign(&base_url, activity, email).await?;
        }
        Command::Serve { addr } => web::serve(&base_url, addr).await?,
    }

    Ok(())
}
