use crate::resolver::resolve;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rps_core::{Choice, GameApi, Outcome, Result, RpsError};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// The computer's answer to a user pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub computer_choice: Choice,
    pub outcome: Outcome,
}

/// Source of the computer's choice
#[async_trait]
pub trait Opponent: Send + Sync {
    async fn play(&self, user_choice: Choice) -> Result<Draw>;
}

/// Picks uniformly at random and resolves the round locally
pub struct LocalOpponent {
    rng: Mutex<StdRng>,
}

impl LocalOpponent {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn pick(&self) -> Result<Choice> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| RpsError::internal("Opponent RNG lock poisoned"))?;

        Choice::ALL
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| RpsError::internal("No choices available"))
    }
}

impl Default for LocalOpponent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Opponent for LocalOpponent {
    async fn play(&self, user_choice: Choice) -> Result<Draw> {
        let computer_choice = self.pick()?;
        Ok(Draw {
            computer_choice,
            outcome: resolve(user_choice, computer_choice),
        })
    }
}

/// Lets the backend pick and judge the round
pub struct RemoteOpponent {
    api: Arc<dyn GameApi>,
}

impl RemoteOpponent {
    pub fn new(api: Arc<dyn GameApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Opponent for RemoteOpponent {
    async fn play(&self, user_choice: Choice) -> Result<Draw> {
        let response = self.api.determine_winner(user_choice).await?;

        let expected = resolve(user_choice, response.computer_option);
        if expected != response.result {
            tracing::warn!(
                "Server result {} disagrees with local rules ({}) for {} vs {}",
                response.result,
                expected,
                user_choice,
                response.computer_option
            );
        }

        Ok(Draw {
            computer_choice: response.computer_option,
            outcome: response.result,
        })
    }
}
