use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::navigator::AppRouter;
use crate::routes::table::ViewId;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let login_href = expect_context::<AppRouter>().href(ViewId::Login);
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Page not found."</h1>
                <A href=login_href>"Go to sign in"</A>
            </div>
        </div>
    }
}
