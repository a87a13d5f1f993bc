use crate::types::{Choice, Outcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerRequest {
    pub user_option: Choice,
}

/// Server-side round: computer pick plus the verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinnerResponse {
    pub computer_option: Choice,
    pub result: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpPayload {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub message: String,
}

/// Error codes the backend distinguishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApiErrorCode {
    UsernameTaken,
    Other(String),
}

impl From<String> for ApiErrorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "USERNAME_TAKEN" => ApiErrorCode::UsernameTaken,
            _ => ApiErrorCode::Other(code),
        }
    }
}

impl From<ApiErrorCode> for String {
    fn from(code: ApiErrorCode) -> Self {
        match code {
            ApiErrorCode::UsernameTaken => "USERNAME_TAKEN".to_string(),
            ApiErrorCode::Other(code) => code,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub error_code: Option<ApiErrorCode>,
    #[serde(alias = "errorMessage")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_wire_format() {
        let body = serde_json::to_value(WinnerRequest {
            user_option: Choice::Rock,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "userOption": "rock" }));

        let response: WinnerResponse =
            serde_json::from_str(r#"{"computerOption":"paper","result":"computer"}"#).unwrap();
        assert_eq!(response.computer_option, Choice::Paper);
        assert_eq!(response.result, Outcome::Computer);
    }

    #[test]
    fn test_error_body_codes() {
        let taken: ApiErrorBody = serde_json::from_str(
            r#"{"errorCode":"USERNAME_TAKEN","errorMessage":"The username is already taken"}"#,
        )
        .unwrap();
        assert_eq!(taken.error_code, Some(ApiErrorCode::UsernameTaken));
        assert_eq!(taken.message.as_deref(), Some("The username is already taken"));

        let other: ApiErrorBody =
            serde_json::from_str(r#"{"errorCode":"SERVER_ERROR","message":"down"}"#).unwrap();
        assert_eq!(
            other.error_code,
            Some(ApiErrorCode::Other("SERVER_ERROR".to_string()))
        );
    }
}
