//! Loading placeholder.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use leptos::prelude::*;

pub(crate) fn loading_class(full_screen: bool) -> &'static str {
    if full_screen { "loading loading--full-screen" } else { "loading" }
}

/// Spinner with a status message. `full_screen` covers the viewport.
#[component]
pub fn LoadingIndicator(
    #[prop(into, default = String::from("Loading..."))] message: String,
    #[prop(optional)] full_screen: bool,
) -> impl IntoView {
    view! {
        <div class=loading_class(full_screen) role="status" aria-live="polite">
            <span class="loading__spinner" aria-hidden="true"></span>
            <p class="loading__message">{message}</p>
        </div>
    }
}
