//! Rock-paper-scissors round logic
//!
//! A round is resolved by a fixed precedence table and played out in two
//! timed stages: the computer's pick is revealed after a pause, then the
//! result is shown and the score updated.

pub mod opponent;
pub mod resolver;
pub mod sequencer;

pub use opponent::{Draw, LocalOpponent, Opponent, RemoteOpponent};
pub use resolver::resolve;
pub use sequencer::{Phase, PickedOption, RoundSequencer};

use rps_core::{ApiClient, ClientConfig, Result, ScoreTracker, Storage};
use std::sync::Arc;

/// Local random opponent when offline, otherwise the backend
pub fn create_opponent(config: &ClientConfig) -> Result<Arc<dyn Opponent>> {
    if config.offline {
        tracing::debug!("Using local opponent");
        return Ok(Arc::new(LocalOpponent::new()));
    }

    let client = ApiClient::new(config)?;
    tracing::debug!("Using remote opponent at {}", client.base_server_url());
    Ok(Arc::new(RemoteOpponent::new(Arc::new(client))))
}

/// Sequencer wired to the configured opponent and the stored score
pub async fn create_sequencer(
    config: &ClientConfig,
    storage: Arc<Storage>,
) -> Result<RoundSequencer> {
    let opponent = create_opponent(config)?;
    let tracker = ScoreTracker::load(storage).await?;
    Ok(RoundSequencer::new(opponent, tracker, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_core::{open_storage, Choice};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_offline_sequencer_plays_and_persists() {
        let temp_dir = tempdir().unwrap();
        let storage = open_storage(temp_dir.path()).await.unwrap();

        let mut config = ClientConfig::default().without_delays();
        config.offline = true;

        let mut seq = create_sequencer(&config, storage.clone()).await.unwrap();
        let round = seq.play_round(Choice::Rock, |_| {}).await.unwrap();
        assert_eq!(round.outcome, resolve(Choice::Rock, round.computer_choice));

        let reloaded = ScoreTracker::load(storage).await.unwrap();
        assert_eq!(reloaded.score(), round.outcome.score_delta());
    }

    #[test]
    fn test_online_opponent_requires_valid_url() {
        let config = ClientConfig::new("not a url");
        assert!(create_opponent(&config).is_err());
    }
}
