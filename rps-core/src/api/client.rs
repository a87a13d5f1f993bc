use crate::api::{
    ApiErrorBody, GameApi, SignUpPayload, SignUpResponse, WinnerRequest, WinnerResponse,
    SIGNUP_ENDPOINT, WINNER_ENDPOINT,
};
use crate::config::ClientConfig;
use crate::error::{Result, RpsError};
use crate::types::Choice;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// HTTP client for the rock-paper-scissors backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_server_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_server_url: config.base_server_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_server_url(&self) -> &str {
        &self.base_server_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_server_url, path)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<R>().await?);
        }

        let text = response.text().await.unwrap_or_default();
        Err(error_from_body(status.as_u16(), &text))
    }
}

/// Build an API error from a non-success response body
pub(crate) fn error_from_body(status: u16, text: &str) -> RpsError {
    match serde_json::from_str::<ApiErrorBody>(text) {
        Ok(body) => RpsError::Api {
            status,
            code: body.error_code,
            message: body
                .message
                .unwrap_or_else(|| format!("request failed with status {}", status)),
        },
        Err(_) => RpsError::Api {
            status,
            code: None,
            message: if text.is_empty() {
                format!("request failed with status {}", status)
            } else {
                text.to_string()
            },
        },
    }
}

#[async_trait]
impl GameApi for ApiClient {
    async fn determine_winner(&self, user_option: Choice) -> Result<WinnerResponse> {
        let response: WinnerResponse = self
            .post(WINNER_ENDPOINT, &WinnerRequest { user_option })
            .await?;

        tracing::debug!(
            "Server picked {} ({}) against {}",
            response.computer_option,
            response.result,
            user_option
        );
        Ok(response)
    }

    async fn signup(&self, payload: &SignUpPayload) -> Result<SignUpResponse> {
        let response: SignUpResponse = self.post(SIGNUP_ENDPOINT, payload).await?;
        tracing::info!("Registered user '{}'", payload.username);
        Ok(response)
    }
}
