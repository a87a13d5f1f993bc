use crate::opponent::{Draw, Opponent};
use rps_core::{Choice, ClientConfig, Outcome, Result, Round, RpsError, ScoreTracker};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    UserChosen,
    ComputerRevealed,
    Resolved,
}

/// Display state of one side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedOption {
    pub choice: Choice,
    /// Hidden picks render as an empty circle
    pub filled: bool,
    /// Set on the winning side once the round is resolved
    pub pulsing: bool,
}

impl PickedOption {
    fn shown(choice: Choice) -> Self {
        Self {
            choice,
            filled: true,
            pulsing: false,
        }
    }

    fn hidden(choice: Choice) -> Self {
        Self {
            choice,
            filled: false,
            pulsing: false,
        }
    }
}

/// Drives one round at a time through pick, delayed reveal and delayed result
pub struct RoundSequencer {
    opponent: Arc<dyn Opponent>,
    tracker: ScoreTracker,
    reveal_delay: Duration,
    resolve_delay: Duration,
    phase: Phase,
    user_pick: Option<PickedOption>,
    computer_pick: Option<PickedOption>,
    draw: Option<Draw>,
    round: Option<Round>,
}

impl RoundSequencer {
    pub fn new(opponent: Arc<dyn Opponent>, tracker: ScoreTracker, config: &ClientConfig) -> Self {
        Self {
            opponent,
            tracker,
            reveal_delay: config.reveal_delay,
            resolve_delay: config.resolve_delay,
            phase: Phase::Idle,
            user_pick: None,
            computer_pick: None,
            draw: None,
            round: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn user_pick(&self) -> Option<PickedOption> {
        self.user_pick
    }

    pub fn computer_pick(&self) -> Option<PickedOption> {
        self.computer_pick
    }

    /// The finished round, available once resolved
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn score(&self) -> i64 {
        self.tracker.score()
    }

    /// Record the user's pick and fetch the computer's, which stays hidden
    pub async fn choose(&mut self, choice: Choice) -> Result<()> {
        if self.phase != Phase::Idle {
            return Err(RpsError::invalid_state(format!(
                "Cannot pick {} while round is {:?}",
                choice, self.phase
            )));
        }

        // A failed request leaves the board idle
        let draw = self.opponent.play(choice).await?;

        self.user_pick = Some(PickedOption::shown(choice));
        self.computer_pick = Some(PickedOption::hidden(draw.computer_choice));
        self.draw = Some(draw);
        self.phase = Phase::UserChosen;

        tracing::debug!("User picked {}", choice);
        Ok(())
    }

    pub fn reveal(&mut self) -> Result<()> {
        if self.phase != Phase::UserChosen {
            return Err(RpsError::invalid_state(format!(
                "Cannot reveal while round is {:?}",
                self.phase
            )));
        }

        let computer = self
            .computer_pick
            .as_mut()
            .ok_or_else(|| RpsError::internal("Computer pick missing"))?;
        computer.filled = true;
        self.phase = Phase::ComputerRevealed;

        tracing::debug!("Computer revealed {}", computer.choice);
        Ok(())
    }

    /// Settle the round, mark the winning side and update the score
    pub async fn resolve(&mut self) -> Result<Round> {
        if self.phase != Phase::ComputerRevealed {
            return Err(RpsError::invalid_state(format!(
                "Cannot resolve while round is {:?}",
                self.phase
            )));
        }

        let draw = self
            .draw
            .ok_or_else(|| RpsError::internal("Round draw missing"))?;
        let user_choice = self
            .user_pick
            .map(|pick| pick.choice)
            .ok_or_else(|| RpsError::internal("User pick missing"))?;

        self.tracker.record(draw.outcome).await?;

        match draw.outcome {
            Outcome::User => {
                if let Some(pick) = self.user_pick.as_mut() {
                    pick.pulsing = true;
                }
            }
            Outcome::Computer => {
                if let Some(pick) = self.computer_pick.as_mut() {
                    pick.pulsing = true;
                }
            }
            Outcome::Tie => {}
        }

        let round = Round::new(user_choice, draw.computer_choice, draw.outcome);
        self.round = Some(round.clone());
        self.phase = Phase::Resolved;

        tracing::info!(
            "Round {}: {} vs {} -> {} (score {})",
            round.id,
            round.user_choice,
            round.computer_choice,
            round.outcome,
            self.tracker.score()
        );
        Ok(round)
    }

    /// Run a full round with the configured delays, calling `observer` after each step
    pub async fn play_round<F>(&mut self, choice: Choice, mut observer: F) -> Result<Round>
    where
        F: FnMut(&RoundSequencer),
    {
        self.choose(choice).await?;
        observer(self);

        tokio::time::sleep(self.reveal_delay).await;
        self.reveal()?;
        observer(self);

        tokio::time::sleep(self.resolve_delay).await;
        let round = self.resolve().await?;
        observer(self);

        Ok(round)
    }

    /// Clear the board for the next round
    pub fn play_again(&mut self) {
        self.phase = Phase::Idle;
        self.user_pick = None;
        self.computer_pick = None;
        self.draw = None;
        self.round = None;
    }
}
