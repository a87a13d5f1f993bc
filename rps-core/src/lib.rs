//! Core library for the rock-paper-scissors client
//!
//! Shared types, client-side storage and score tracking, the backend API
//! client and signup form validation.

pub mod account;
pub mod api;
pub mod config;
pub mod error;
pub mod score;
pub mod storage;
pub mod types;

pub use account::{RegisterForm, RegisterOutcome, Registration};
pub use api::{ApiClient, GameApi};
pub use config::ClientConfig;
pub use error::{Result, RpsError};
pub use score::ScoreTracker;
pub use storage::Storage;
pub use types::{Choice, Outcome, Round};

use std::path::Path;
use std::sync::Arc;

/// File name of the client database inside the data directory
pub const DB_FILE_NAME: &str = "rps.db";

/// Open the client database in `data_dir`
pub async fn open_storage(data_dir: &Path) -> Result<Arc<Storage>> {
    let storage = Storage::new(&data_dir.join(DB_FILE_NAME)).await?;
    Ok(Arc::new(storage))
}
