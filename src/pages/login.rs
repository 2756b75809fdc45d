//! Login page: email + password against the auth backend.
//!
//! On success the token is stored and the user is sent to the path the guard
//! recorded in `?redirect=`, or to the landing page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::pages::forms::{INVALID_EMAIL, is_valid_email};
use crate::routes::navigator::AppRouter;
use crate::routes::table::ViewId;
use crate::state::session::return_target;

const MISSING_FIELDS: &str = "Enter both email and password.";

/// Trim and check the login form fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !is_valid_email(email) {
        return Err(INVALID_EMAIL);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let router = expect_context::<AppRouter>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let register_href = router.href(ViewId::Register);
    let forgot_href = router.href(ViewId::Forgot);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(fields) => fields,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        let raw_target = query.get_untracked().get(&router.config().redirect_key);
        let target = return_target(raw_target.as_deref(), router.config());
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let router = router.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match crate::net::api::login(router.config(), &email_value, &password_value).await {
                    Ok(token) => crate::state::session::sign_in(router.store(), router.config(), &token)
                        .map_err(|e| e.to_string()),
                    Err(e) => Err(e),
                };
                match result {
                    Ok(()) => navigate(&target, leptos_router::NavigateOptions::default()),
                    Err(message) => {
                        log::warn!("login failed: {message}");
                        info.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value, target, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Clipnote"</h1>
                <p class="auth-card__subtitle">"Sign in"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <p class="auth-card__info">{move || info.get()}</p>
                <nav class="auth-card__links">
                    <A href=register_href>"Create an account"</A>
                    <A href=forgot_href>"Forgot password?"</A>
                </nav>
            </div>
        </div>
    }
}
