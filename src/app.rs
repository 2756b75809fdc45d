//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::AppConfig;
use crate::pages::not_found::NotFoundPage;
use crate::routes::navigator::AppRouter;
use crate::routes::outlet::RouteOutlet;
use crate::routes::table::RouteTable;
use crate::routes::view_cache::ViewCache;
use crate::state::credential::default_store;

/// Root application component.
///
/// Provides the `AppRouter` and keep-alive cache, and hands every URL to
/// [`RouteOutlet`], which matches it against the static route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let router = AppRouter::new(RouteTable::default(), default_store(), AppConfig::load());
    provide_context(router);
    provide_context(ViewCache::default());

    view! {
        <Title text="Clipnote"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=RouteOutlet/>
                <Route path=path!("/*any") view=RouteOutlet/>
            </Routes>
        </Router>
    }
}
