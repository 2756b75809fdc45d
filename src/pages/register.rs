//! Registration page.
//!
//! The user asks for an emailed code, then submits username, email, password
//! and code together. A created account goes back to login; registering does
//! not sign in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::pages::forms::{SendCodeButton, validate_register_input};
use crate::routes::navigator::AppRouter;
use crate::routes::table::ViewId;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let router = expect_context::<AppRouter>();
    let navigate = use_navigate();
    let login_href = router.href(ViewId::Login);

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_register_input(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &code.get_untracked(),
        ) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let router = router.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::api::RegisterRequest {
                    username: &input.username,
                    email: &input.email,
                    password: &input.password,
                    code: &input.code,
                };
                match crate::net::api::register(router.config(), &request).await {
                    Ok(_) => {
                        log::info!("registered {}", input.email);
                        navigate(login_href, NavigateOptions::default());
                    }
                    Err(message) => {
                        log::warn!("register failed: {message}");
                        info.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (input, &router, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
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
                        placeholder="Password (6+ characters, letters and digits)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <div class="auth-form__row">
                        <input
                            class="auth-input"
                            type="text"
                            inputmode="numeric"
                            placeholder="6-digit code"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                        <SendCodeButton email=email info=info/>
                    </div>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="auth-card__info">{move || info.get()}</p>
                <nav class="auth-card__links">
                    <A href=login_href>"Back to sign in"</A>
                </nav>
            </div>
        </div>
    }
}
