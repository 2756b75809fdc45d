//! Field checks shared by the auth forms.
//!
//! The backend enforces the same rules; checking here just saves a round
//! trip and keeps the messages next to the field.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use leptos::prelude::*;

use crate::routes::navigator::AppRouter;

pub const MISSING_EMAIL: &str = "Enter your email address.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const SHORT_PASSWORD: &str = "Passwords need at least 6 characters.";
pub const PASSWORD_NEEDS_LETTER: &str = "Passwords need at least one letter.";
pub const PASSWORD_NEEDS_DIGIT: &str = "Passwords need at least one digit.";
pub const MISSING_USERNAME: &str = "Choose a username.";
pub const INVALID_CODE: &str = "Enter the 6-digit code from the email.";

const MIN_PASSWORD_CHARS: usize = 6;
const CODE_DIGITS: usize = 6;

pub fn is_valid_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.starts_with('.'))
}

/// Trimmed email, or the message to show.
pub fn validate_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(MISSING_EMAIL);
    }
    if !is_valid_email(email) {
        return Err(INVALID_EMAIL);
    }
    Ok(email.to_owned())
}

/// At least six characters with one ASCII letter and one digit.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(SHORT_PASSWORD);
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(PASSWORD_NEEDS_LETTER);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PASSWORD_NEEDS_DIGIT);
    }
    Ok(())
}

/// Trimmed verification code; codes are six digits.
pub fn validate_code(code: &str) -> Result<String, &'static str> {
    let code = code.trim();
    if code.len() != CODE_DIGITS || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(INVALID_CODE);
    }
    Ok(code.to_owned())
}

/// Checked registration fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub code: String,
}

pub fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    code: &str,
) -> Result<RegisterInput, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err(MISSING_USERNAME);
    }
    let email = validate_email(email)?;
    validate_password(password)?;
    let code = validate_code(code)?;
    Ok(RegisterInput { username: username.to_owned(), email, password: password.to_owned(), code })
}

/// Checked password-reset fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetInput {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

pub fn validate_reset_input(email: &str, code: &str, new_password: &str) -> Result<ResetInput, &'static str> {
    let email = validate_email(email)?;
    let code = validate_code(code)?;
    validate_password(new_password)?;
    Ok(ResetInput { email, code, new_password: new_password.to_owned() })
}

/// "Send code" button for forms that need an emailed verification code.
/// Reads the address from `email` and reports into `info`.
#[component]
pub fn SendCodeButton(email: RwSignal<String>, info: RwSignal<String>) -> impl IntoView {
    let router = expect_context::<AppRouter>();
    let sending = RwSignal::new(false);

    let on_click = move |_: leptos::ev::MouseEvent| {
        if sending.get_untracked() {
            return;
        }
        let address = match validate_email(&email.get_untracked()) {
            Ok(address) => address,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        sending.set(true);
        info.set("Sending code...".to_owned());

        #[cfg(feature = "csr")]
        {
            let router = router.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::send_code(router.config(), &address).await {
                    Ok(msg) if msg.is_empty() => info.set("Code sent. Check your email.".to_owned()),
                    Ok(msg) => info.set(msg),
                    Err(message) => {
                        log::warn!("send code failed: {message}");
                        info.set(message);
                    }
                }
                sending.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (address, &router);
            sending.set(false);
        }
    };

    view! {
        <button
            class="auth-button auth-button--secondary"
            type="button"
            on:click=on_click
            disabled=move || sending.get()
        >
            "Send code"
        </button>
    }
}
