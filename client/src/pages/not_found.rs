//! Fallback for unmatched routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found."</h1>
            <A href=routes::HOME>"Back to dashboard"</A>
        </div>
    }
}
