use dialoguer::{Confirm, Select};
use rps_core::{Choice, ClientConfig, Result, Storage};
use rps_game::{Phase, PickedOption, RoundSequencer};
use std::sync::Arc;

pub async fn handle_play(
    choice: Option<Choice>,
    once: bool,
    config: &ClientConfig,
    storage: Arc<Storage>,
) -> Result<()> {
    let mut sequencer = rps_game::create_sequencer(config, storage).await?;
    println!("SCORE: {}", sequencer.score());
    println!();

    let mut preset = choice;
    loop {
        let choice = match preset.take() {
            Some(choice) => choice,
            None => prompt_choice()?,
        };

        sequencer.play_round(choice, render_step).await?;

        if once {
            break;
        }

        println!();
        let again = Confirm::new()
            .with_prompt("Play again?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }

        sequencer.play_again();
        println!();
    }

    Ok(())
}

fn prompt_choice() -> Result<Choice> {
    let index = Select::new()
        .with_prompt("Pick your hand")
        .items(&Choice::ALL)
        .default(0)
        .interact()?;

    Ok(Choice::ALL[index])
}

fn describe(pick: PickedOption) -> String {
    let name = pick.choice.to_string().to_uppercase();
    if pick.pulsing {
        format!("(( {} ))", name)
    } else {
        name
    }
}

fn render_step(sequencer: &RoundSequencer) {
    match sequencer.phase() {
        Phase::Idle => {}
        Phase::UserChosen => {
            if let Some(user) = sequencer.user_pick() {
                println!("YOU PICKED        {}", describe(user));
            }
            println!("THE HOUSE PICKED  ...");
        }
        Phase::ComputerRevealed => {
            if let Some(computer) = sequencer.computer_pick() {
                println!("THE HOUSE PICKED  {}", describe(computer));
            }
        }
        Phase::Resolved => {
            if let (Some(user), Some(computer)) = (sequencer.user_pick(), sequencer.computer_pick())
            {
                println!();
                println!("{}  vs  {}", describe(user), describe(computer));
            }
            if let Some(round) = sequencer.round() {
                println!("{}", round.outcome.headline());
            }
            println!("SCORE: {}", sequencer.score());
        }
    }
}
