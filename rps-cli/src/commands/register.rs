use dialoguer::{Input, Password};
use rps_core::account::validator::{validate_password, validate_username};
use rps_core::{ApiClient, ClientConfig, RegisterOutcome, Registration, Result, RpsError};

pub async fn handle_register(username: Option<String>, config: &ClientConfig) -> Result<()> {
    let api = ApiClient::new(config)?;
    let mut registration = Registration::new();
    let mut preset = username;
    let mut ask_passwords = true;

    println!("REGISTER");
    println!();

    loop {
        prompt_username(&mut registration, preset.take())?;
        if ask_passwords {
            prompt_passwords(&mut registration)?;
            ask_passwords = false;
        }

        match registration.submit(&api).await {
            RegisterOutcome::Registered { message } => {
                println!();
                println!("{}", message);
                println!(
                    "You can now log in as '{}'.",
                    registration.form().username
                );
                return Ok(());
            }
            RegisterOutcome::UsernameTaken => {
                if let Some(err) = registration.username_error() {
                    eprintln!("  {}", err);
                }
            }
            RegisterOutcome::Invalid(errors) => {
                ask_passwords = true;
                for message in errors.messages() {
                    eprintln!("  {}", message);
                }
            }
            RegisterOutcome::TechnicalError { reason } => {
                show_technical_error();
                return Err(RpsError::internal(reason));
            }
        }
    }
}

/// Ask until the username passes the client-side rules
fn prompt_username(registration: &mut Registration, mut preset: Option<String>) -> Result<()> {
    loop {
        let username = match preset.take() {
            Some(username) => username,
            None => Input::<String>::new()
                .with_prompt("Username")
                .allow_empty(true)
                .interact_text()?,
        };

        match validate_username(&username) {
            Some(err) => eprintln!("  {}", err),
            None => {
                registration.set_username(username);
                return Ok(());
            }
        }
    }
}

fn prompt_passwords(registration: &mut Registration) -> Result<()> {
    loop {
        let password = Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?;

        if let Some(err) = validate_password(&password) {
            eprintln!("  {}", err);
            continue;
        }

        let confirm_password = Password::new()
            .with_prompt("Confirm password")
            .allow_empty_password(true)
            .interact()?;

        registration.set_password(password);
        registration.set_confirm_password(confirm_password);

        let errors = registration.errors();
        if errors.confirm_password.is_none() && !errors.passwords_mismatch {
            return Ok(());
        }

        for message in errors.messages() {
            eprintln!("  {}", message);
        }
    }
}

fn show_technical_error() {
    eprintln!();
    eprintln!("TECHNICAL ERROR");
    eprintln!("Something went wrong on our side. Please try again later.");
}
