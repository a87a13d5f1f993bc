use thiserror::Error;

pub const USERNAME_MIN_LENGTH: usize = 4;
pub const PASSWORD_MIN_LENGTH: usize = 6;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username is required")]
    Required,

    #[error("Username can only contain letters, numbers, and underscores (_), without spaces or special characters.")]
    Pattern,

    #[error("Username length should be at least 4")]
    MinLength,

    #[error("Username already exists")]
    Taken,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is required")]
    Required,

    #[error("Password length should be at least 6")]
    MinLength,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPasswordError {
    #[error("Please confirm your password")]
    Required,
}

/// Everything wrong with a form, field by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub username: Option<UsernameError>,
    pub password: Option<PasswordError>,
    pub confirm_password: Option<ConfirmPasswordError>,
    pub passwords_mismatch: bool,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && !self.passwords_mismatch
    }

    /// Human readable messages in field order
    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if let Some(err) = self.username {
            messages.push(err.to_string());
        }
        if let Some(err) = self.password {
            messages.push(err.to_string());
        }
        if let Some(err) = self.confirm_password {
            messages.push(err.to_string());
        }
        if self.passwords_mismatch {
            messages.push("Passwords do not match".to_string());
        }
        messages
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    pub fn validate(&self) -> FormErrors {
        FormErrors {
            username: validate_username(&self.username),
            password: validate_password(&self.password),
            confirm_password: validate_confirm_password(&self.confirm_password),
            passwords_mismatch: self.password != self.confirm_password,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Length as counted by the web form, in UTF-16 code units
fn form_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Word characters only: ASCII letters, digits and underscore
fn is_word(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// First failing username rule, reported as required > pattern > length
pub fn validate_username(username: &str) -> Option<UsernameError> {
    if username.is_empty() {
        Some(UsernameError::Required)
    } else if !is_word(username) {
        Some(UsernameError::Pattern)
    } else if form_length(username) < USERNAME_MIN_LENGTH {
        Some(UsernameError::MinLength)
    } else {
        None
    }
}

pub fn validate_password(password: &str) -> Option<PasswordError> {
    if password.is_empty() {
        Some(PasswordError::Required)
    } else if form_length(password) < PASSWORD_MIN_LENGTH {
        Some(PasswordError::MinLength)
    } else {
        None
    }
}

pub fn validate_confirm_password(confirm_password: &str) -> Option<ConfirmPasswordError> {
    if confirm_password.is_empty() {
        Some(ConfirmPasswordError::Required)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert_eq!(validate_username(""), Some(UsernameError::Required));
        assert_eq!(validate_username("?123"), Some(UsernameError::Pattern));
        assert_eq!(validate_username("john doe"), Some(UsernameError::Pattern));
        assert_eq!(validate_username("123"), Some(UsernameError::MinLength));
        assert_eq!(validate_username("abc1"), None);
        assert_eq!(validate_username("valid_User_9"), None);
    }

    #[test]
    fn test_pattern_reported_before_length() {
        assert_eq!(validate_username("a?"), Some(UsernameError::Pattern));
        assert_eq!(
            UsernameError::Pattern.to_string(),
            "Username can only contain letters, numbers, and underscores (_), without spaces or special characters."
        );
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password(""), Some(PasswordError::Required));
        assert_eq!(validate_password("abcd"), Some(PasswordError::MinLength));
        assert_eq!(
            PasswordError::MinLength.to_string(),
            "Password length should be at least 6"
        );
        assert_eq!(validate_password("abcd32131"), None);
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // each emoji is a surrogate pair
        assert_eq!(validate_password("ab\u{1F600}\u{1F600}"), None);
        assert_eq!(validate_password("a\u{1F600}\u{1F600}"), Some(PasswordError::MinLength));
        assert_eq!(validate_password("\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}"), Some(PasswordError::MinLength));
    }

    #[test]
    fn test_password_mismatch_is_form_level() {
        let form = RegisterForm::new("validUser", "password1", "differentPassword");
        let errors = form.validate();

        assert!(errors.passwords_mismatch);
        assert_eq!(errors.username, None);
        assert_eq!(errors.password, None);
        assert_eq!(errors.confirm_password, None);
        assert!(!form.is_valid());
    }

    #[test]
    fn test_valid_form() {
        let form = RegisterForm::new("validUser", "password1", "password1");
        assert!(form.is_valid());
        assert!(form.validate().messages().is_empty());
    }

    #[test]
    fn test_empty_form_messages() {
        let errors = RegisterForm::default().validate();
        assert_eq!(
            errors.messages(),
            vec![
                "Username is required".to_string(),
                "Password is required".to_string(),
                "Please confirm your password".to_string(),
            ]
        );
    }
}
