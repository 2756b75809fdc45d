//! Password recovery page: emailed code plus a new password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::pages::forms::{SendCodeButton, validate_reset_input};
use crate::routes::navigator::AppRouter;
use crate::routes::table::ViewId;

#[component]
pub fn ForgotPage() -> impl IntoView {
    let router = expect_context::<AppRouter>();
    let navigate = use_navigate();
    let login_href = router.href(ViewId::Login);
    let register_href = router.href(ViewId::Register);

    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input =
            match validate_reset_input(&email.get_untracked(), &code.get_untracked(), &new_password.get_untracked()) {
                Ok(input) => input,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Resetting password...".to_owned());

        #[cfg(feature = "csr")]
        {
            let router = router.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::api::ResetPasswordRequest {
                    email: &input.email,
                    code: &input.code,
                    new_password: &input.new_password,
                };
                match crate::net::api::reset_password(router.config(), &request).await {
                    Ok(_) => navigate(login_href, NavigateOptions::default()),
                    Err(message) => {
                        log::warn!("password reset failed: {message}");
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
                <h1>"Reset password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
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
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Reset password"
                    </button>
                </form>
                <p class="auth-card__info">{move || info.get()}</p>
                <nav class="auth-card__links">
                    <A href=login_href>"Back to sign in"</A>
                    <A href=register_href>"Create an account"</A>
                </nav>
            </div>
        </div>
    }
}
