use crate::api::ApiErrorCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RpsError>;

#[derive(Error, Debug)]
pub enum RpsError {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<ApiErrorCode>,
        message: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Invalid round state: {0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RpsError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn dialog(msg: impl Into<String>) -> Self {
        Self::Dialog(msg.into())
    }

    /// Server reported that the requested username already exists
    pub fn is_username_taken(&self) -> bool {
        matches!(
            self,
            Self::Api {
                code: Some(ApiErrorCode::UsernameTaken),
                ..
            }
        )
    }
}

// conversion from dialoguer::Error
impl From<dialoguer::Error> for RpsError {
    fn from(err: dialoguer::Error) -> Self {
        RpsError::Dialog(err.to_string())
    }
}
