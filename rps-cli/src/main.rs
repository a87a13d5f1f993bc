mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use rps_core::{Choice, RpsError};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rps")]
#[command(about = "Rock, paper, scissors against the house")]
#[command(version)]
struct Cli {
    /// Data directory for the local score
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Backend base URL (defaults to $RPS_BASE_SERVER_URL or http://localhost:3000)
    #[arg(short, long, global = true)]
    server: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the house
    Play {
        /// rock, paper or scissors (prompts when omitted)
        choice: Option<Choice>,
        /// Let a local random opponent pick instead of the server
        #[arg(long)]
        offline: bool,
        /// Play a single round without asking to play again
        #[arg(long)]
        once: bool,
    },
    /// Score commands
    #[command(subcommand)]
    Score(commands::ScoreCommands),
    /// Create an account
    Register {
        /// Username (prompts when omitted)
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Show the rules
    Rules,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "rps={},rps_core={},rps_game={}",
            log_level, log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CliConfig::with_overrides(cli.data_dir, cli.server);
    tracing::debug!(
        "Data directory {}, server {}",
        config.data_dir.display(),
        config.client.base_server_url
    );

    // Ensure data directory exists
    tokio::fs::create_dir_all(&config.data_dir).await?;
    let storage = rps_core::open_storage(&config.data_dir).await?;

    let is_play = matches!(cli.command, Commands::Play { .. });
    let result = match cli.command {
        Commands::Play {
            choice,
            offline,
            once,
        } => {
            let mut client = config.client.clone();
            client.offline = client.offline || offline;
            commands::handle_play(choice, once, &client, storage).await
        }
        Commands::Score(cmd) => commands::handle_score_command(cmd, storage).await,
        Commands::Register { username } => {
            commands::handle_register(username, &config.client).await
        }
        Commands::Rules => {
            commands::show_rules();
            Ok(())
        }
    };

    if let Err(e) = result {
        for line in error_lines(&e, is_play) {
            eprintln!("{}", line);
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Lines printed for a failed command; the offline hint only applies to `play`
fn error_lines(e: &RpsError, is_play: bool) -> Vec<String> {
    match e {
        RpsError::Http(err) => {
            let mut lines = vec![format!("Error: Could not reach the server: {}", err)];
            if is_play {
                lines.push("Use 'rps play --offline' to play without the server".to_string());
            }
            lines
        }
        RpsError::Config(msg) => vec![format!("Error: Invalid configuration: {}", msg)],
        RpsError::Api {
            status, message, ..
        } => vec![format!("Error: Server responded with {}: {}", status, message)],
        _ => vec![format!("Error: {}", e)],
    }
}
