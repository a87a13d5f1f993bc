//! Signup form validation and the registration flow built on it.

pub mod registration;
pub mod validator;

pub use registration::{RegisterOutcome, Registration};
pub use validator::{
    ConfirmPasswordError, FormErrors, PasswordError, RegisterForm, UsernameError,
    PASSWORD_MIN_LENGTH, USERNAME_MIN_LENGTH,
};
