use crate::error::Result;
use crate::storage::{KvStore, Storage};
use crate::types::Outcome;
use std::sync::Arc;

/// Storage key holding the decimal score
pub const SCORE_KEY: &str = "score";

/// Running score of the user, mirrored to client storage after every change
pub struct ScoreTracker {
    storage: Arc<Storage>,
    score: i64,
}

impl ScoreTracker {
    /// Load the previous score, starting from zero if none was stored
    pub async fn load(storage: Arc<Storage>) -> Result<Self> {
        let stored = KvStore::new(&storage).get_item(SCORE_KEY).await?;

        let score = match stored {
            Some(value) => match value.trim().parse::<i64>() {
                Ok(score) => score,
                Err(_) => {
                    tracing::warn!("Ignoring unreadable stored score {:?}", value);
                    0
                }
            },
            None => 0,
        };

        tracing::debug!("Loaded score {}", score);
        Ok(Self { storage, score })
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Apply a round outcome; ties leave both the score and storage untouched
    pub async fn record(&mut self, outcome: Outcome) -> Result<i64> {
        let delta = outcome.score_delta();
        if delta == 0 {
            return Ok(self.score);
        }

        self.score = self.score.saturating_add(delta);
        KvStore::new(&self.storage)
            .set_item(SCORE_KEY, &self.score.to_string())
            .await?;

        tracing::info!("Score updated to {} ({})", self.score, outcome);
        Ok(self.score)
    }

    pub async fn reset(&mut self) -> Result<()> {
        KvStore::new(&self.storage).remove_item(SCORE_KEY).await?;
        self.score = 0;
        tracing::info!("Score reset");
        Ok(())
    }
}
