use crate::account::validator::{FormErrors, RegisterForm, UsernameError};
use crate::api::{GameApi, SignUpPayload};

/// Where a signup attempt leaves the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Account created; the user should continue to login
    Registered { message: String },
    /// Client-side validation failed, nothing was sent
    Invalid(FormErrors),
    /// Server rejected the username; shown inline on the username field
    UsernameTaken,
    /// Any other failure; the user is sent to the technical error view
    TechnicalError { reason: String },
}

/// Signup form state plus the server-reported "taken" flag
#[derive(Debug, Clone, Default)]
pub struct Registration {
    form: RegisterForm,
    username_taken: bool,
}

impl Registration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &RegisterForm {
        &self.form
    }

    pub fn is_username_taken(&self) -> bool {
        self.username_taken
    }

    /// Changing the username clears a previous "taken" verdict
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.form.username = username.into();
        self.username_taken = false;
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.password = password.into();
    }

    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.form.confirm_password = confirm_password.into();
    }

    /// Client-side errors, with the server's verdict as the last username rule
    pub fn errors(&self) -> FormErrors {
        let mut errors = self.form.validate();
        if errors.username.is_none() && self.username_taken {
            errors.username = Some(UsernameError::Taken);
        }
        errors
    }

    pub fn username_error(&self) -> Option<UsernameError> {
        self.errors().username
    }

    /// Validate and, when the form is clean, send it to the backend
    pub async fn submit(&mut self, api: &dyn GameApi) -> RegisterOutcome {
        let errors = self.form.validate();
        if !errors.is_empty() {
            tracing::debug!("Signup form invalid: {:?}", errors);
            return RegisterOutcome::Invalid(errors);
        }

        let payload = SignUpPayload {
            username: self.form.username.clone(),
            password: self.form.password.clone(),
        };

        match api.signup(&payload).await {
            Ok(response) => {
                self.username_taken = false;
                RegisterOutcome::Registered {
                    message: response.message,
                }
            }
            Err(e) if e.is_username_taken() => {
                tracing::info!("Username '{}' is already taken", payload.username);
                self.username_taken = true;
                RegisterOutcome::UsernameTaken
            }
            Err(e) => {
                tracing::error!("Signup failed: {}", e);
                RegisterOutcome::TechnicalError {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiErrorCode, SignUpResponse, WinnerResponse};
    use crate::error::{Result, RpsError};
    use crate::types::Choice;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records signup calls and answers with a canned result
    struct MockApi {
        calls: Mutex<Vec<SignUpPayload>>,
        error_code: Option<&'static str>,
    }

    impl MockApi {
        fn succeeding() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                error_code: None,
            }
        }

        fn failing_with(code: &'static str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                error_code: Some(code),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GameApi for MockApi {
        async fn determine_winner(&self, _user_option: Choice) -> Result<WinnerResponse> {
            Err(RpsError::internal("not used"))
        }

        async fn signup(&self, payload: &SignUpPayload) -> Result<SignUpResponse> {
            self.calls.lock().unwrap().push(payload.clone());
            match self.error_code {
                None => Ok(SignUpResponse {
                    message: "User registered successfully".to_string(),
                }),
                Some(code) => Err(RpsError::Api {
                    status: 400,
                    code: Some(ApiErrorCode::from(code.to_string())),
                    message: "request rejected".to_string(),
                }),
            }
        }
    }

    fn valid_registration() -> Registration {
        let mut registration = Registration::new();
        registration.set_username("validUser");
        registration.set_password("password1");
        registration.set_confirm_password("password1");
        registration
    }

    #[tokio::test]
    async fn test_invalid_form_does_not_call_api() {
        let api = MockApi::succeeding();
        let mut registration = Registration::new();
        registration.set_username("???");

        let outcome = registration.submit(&api).await;

        assert!(matches!(outcome, RegisterOutcome::Invalid(_)));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_valid_form_signs_up() {
        let api = MockApi::succeeding();
        let mut registration = valid_registration();

        let outcome = registration.submit(&api).await;

        assert_eq!(
            outcome,
            RegisterOutcome::Registered {
                message: "User registered successfully".to_string()
            }
        );
        assert_eq!(
            api.calls.lock().unwrap()[0],
            SignUpPayload {
                username: "validUser".to_string(),
                password: "password1".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_username_taken_sets_inline_flag() {
        let api = MockApi::failing_with("USERNAME_TAKEN");
        let mut registration = valid_registration();

        let outcome = registration.submit(&api).await;

        assert_eq!(outcome, RegisterOutcome::UsernameTaken);
        assert!(registration.is_username_taken());
        assert_eq!(registration.username_error(), Some(UsernameError::Taken));
        assert_eq!(
            registration.username_error().unwrap().to_string(),
            "Username already exists"
        );

        registration.set_username("anotherUser");
        assert!(!registration.is_username_taken());
        assert_eq!(registration.username_error(), None);
    }

    #[tokio::test]
    async fn test_other_errors_route_to_technical_error() {
        let api = MockApi::failing_with("SERVER_ERROR");
        let mut registration = valid_registration();

        let outcome = registration.submit(&api).await;

        assert!(matches!(outcome, RegisterOutcome::TechnicalError { .. }));
        assert!(!registration.is_username_taken());
    }

    #[test]
    fn test_client_errors_take_precedence_over_taken() {
        let mut registration = valid_registration();
        registration.username_taken = true;
        registration.form.username = "?123".to_string();

        assert_eq!(registration.username_error(), Some(UsernameError::Pattern));
    }
}
