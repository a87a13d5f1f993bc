pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{
    ApiErrorBody, ApiErrorCode, SignUpPayload, SignUpResponse, WinnerRequest, WinnerResponse,
};

use crate::error::Result;
use crate::types::Choice;
use async_trait::async_trait;

pub const WINNER_ENDPOINT: &str = "/api/winner";
pub const SIGNUP_ENDPOINT: &str = "/api/auth/signup";

/// Backend operations used by the game and the registration form
#[async_trait]
pub trait GameApi: Send + Sync {
    async fn determine_winner(&self, user_option: Choice) -> Result<WinnerResponse>;

    async fn signup(&self, payload: &SignUpPayload) -> Result<SignUpResponse>;
}
