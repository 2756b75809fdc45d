//! Profile page with sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signing out clears the credential and every keep-alive view, then returns
//! to login so the guard sees the new state on the next navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::navigator::AppRouter;
use crate::routes::table::ViewId;
use crate::routes::view_cache::ViewCache;
use crate::state::session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let router = expect_context::<AppRouter>();
    let cache = expect_context::<ViewCache>();
    let navigate = use_navigate();
    let error = RwSignal::new(None::<String>);
    let signed_in = RwSignal::new(session::is_signed_in(router.store(), router.config()));
    let login_href = router.href(ViewId::Login);
    let generate_href = router.href(ViewId::Generate);

    let on_sign_out = move |_: leptos::ev::MouseEvent| match session::sign_out(router.store(), router.config()) {
        Ok(()) => {
            cache.evict_all();
            signed_in.set(false);
            navigate(login_href, NavigateOptions::default());
        }
        Err(e) => {
            log::warn!("sign-out failed: {e}");
            error.set(Some(e.to_string()));
        }
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <p>{move || if signed_in.get() { "You are signed in." } else { "You are signed out." }}</p>
            <nav class="profile-page__links">
                <A href=generate_href>"Back to summaries"</A>
            </nav>
            <button class="auth-button" on:click=on_sign_out>"Sign out"</button>
            {move || error.get().map(|message| view! { <p class="profile-page__error">{message}</p> })}
        </div>
    }
}
