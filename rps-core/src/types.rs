use crate::error::{Result, RpsError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A hand played by either side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// Board order
    pub const ALL: [Choice; 3] = [Choice::Paper, Choice::Scissors, Choice::Rock];

    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    /// The one choice this choice defeats
    pub fn beats(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = RpsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            _ => Err(RpsError::InvalidChoice(format!(
                "{}. Supported choices: rock, paper, scissors",
                s
            ))),
        }
    }
}

/// Round result relative to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    User,
    Computer,
    Tie,
}

impl Outcome {
    pub fn headline(&self) -> &'static str {
        match self {
            Outcome::User => "YOU WIN",
            Outcome::Computer => "YOU LOSE",
            Outcome::Tie => "IT'S A TIE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::User => "user-wins",
            Outcome::Computer => "computer-wins",
            Outcome::Tie => "tie",
        }
    }

    /// Score change caused by this outcome
    pub fn score_delta(&self) -> i64 {
        match self {
            Outcome::User => 1,
            Outcome::Computer => -1,
            Outcome::Tie => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One completed play
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub id: Uuid,
    pub user_choice: Choice,
    pub computer_choice: Choice,
    pub outcome: Outcome,
    pub played_at: DateTime<Utc>,
}

impl Round {
    pub fn new(user_choice: Choice, computer_choice: Choice, outcome: Outcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_choice,
            computer_choice,
            outcome,
            played_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_parsing() {
        assert_eq!("rock".parse::<Choice>().unwrap(), Choice::Rock);
        assert_eq!(" Paper ".parse::<Choice>().unwrap(), Choice::Paper);
        assert_eq!("SCISSORS".parse::<Choice>().unwrap(), Choice::Scissors);
        assert!(matches!(
            "lizard".parse::<Choice>(),
            Err(RpsError::InvalidChoice(_))
        ));
    }

    #[test]
    fn test_wire_format() {
        assert_eq!(serde_json::to_string(&Choice::Scissors).unwrap(), "\"scissors\"");
        let outcome: Outcome = serde_json::from_str("\"computer\"").unwrap();
        assert_eq!(outcome, Outcome::Computer);
    }

    #[test]
    fn test_beats_returns_defeated_choice() {
        assert_eq!(Choice::Rock.beats(), Choice::Scissors);
        assert_eq!(Choice::Scissors.beats(), Choice::Paper);
        assert_eq!(Choice::Paper.beats(), Choice::Rock);
    }

    #[test]
    fn test_outcome_score_delta() {
        assert_eq!(Outcome::User.score_delta(), 1);
        assert_eq!(Outcome::Computer.score_delta(), -1);
        assert_eq!(Outcome::Tie.score_delta(), 0);
    }
}
