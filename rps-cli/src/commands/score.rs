use clap::Subcommand;
use dialoguer::Confirm;
use rps_core::{Result, ScoreTracker, Storage};
use std::sync::Arc;

#[derive(Subcommand)]
pub enum ScoreCommands {
    /// Show the current score
    Show,
    /// Reset the score to zero
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn handle_score_command(cmd: ScoreCommands, storage: Arc<Storage>) -> Result<()> {
    let mut tracker = ScoreTracker::load(storage).await?;

    match cmd {
        ScoreCommands::Show => {
            println!("SCORE");
            println!("  {}", tracker.score());
        }

        ScoreCommands::Reset { force } => {
            if !force {
                let confirm = Confirm::new()
                    .with_prompt(format!(
                        "Reset your score of {} back to 0?",
                        tracker.score()
                    ))
                    .default(false)
                    .interact()?;

                if !confirm {
                    println!("Reset cancelled.");
                    return Ok(());
                }
            }

            tracker.reset().await?;
            println!("Score reset to 0.");
        }
    }

    Ok(())
}
