//! Router outlet: renders whatever `AppRouter` resolves the current URL to.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos router only supplies the location. Matching, guarding and
//! redirecting all go through `AppRouter`, so a protected view is never
//! rendered before the guard has passed it.

#[cfg(test)]
#[path = "outlet_test.rs"]
mod outlet_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::pages::{
    forgot::ForgotPage, generate::GeneratePage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::routes::location::FullPath;
use crate::routes::navigator::{AppRouter, Resolution};
use crate::routes::table::ViewId;

#[component]
pub fn RouteOutlet() -> impl IntoView {
    let router = expect_context::<AppRouter>();
    let location = use_location();
    let previous = StoredValue::new(None::<FullPath>);

    let resolution = Memo::new(move |_| {
        let to = FullPath::from_parts(&location.pathname.get(), &location.search.get(), &location.hash.get());
        let from = previous.get_value();
        let resolved = router.navigate(&to, from.as_ref());
        previous.set_value(Some(resolved.path.clone()));
        resolved
    });

    move || {
        let resolved = resolution.get();
        match redirect_href(&resolved) {
            Some(href) => {
                // Replace, so Back skips the guarded URL.
                let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                view! { <Redirect path=href options=options/> }.into_any()
            }
            None => render_view(resolved.view, resolved.keep_alive),
        }
    }
}

/// URL to replace the current entry with, when the navigation was redirected.
pub(crate) fn redirect_href(resolved: &Resolution) -> Option<String> {
    resolved.redirected.then(|| resolved.path.to_string())
}

fn render_view(target: Option<ViewId>, keep_alive: bool) -> AnyView {
    match target {
        Some(ViewId::Login) => view! { <LoginPage/> }.into_any(),
        Some(ViewId::Register) => view! { <RegisterPage/> }.into_any(),
        Some(ViewId::Forgot) => view! { <ForgotPage/> }.into_any(),
        Some(ViewId::Generate) => view! { <GeneratePage keep_alive=keep_alive/> }.into_any(),
        Some(ViewId::Profile) => view! { <ProfilePage/> }.into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}
