//! Login landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes redirect here with `{ from }` history state. The sign-in
//! flow itself lives outside this crate; once it marks the session
//! authenticated this page replaces itself with the original route.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingIndicator;
use crate::routes;
use crate::state::auth::{AuthState, use_auth};
use crate::util::auth::{RedirectState, post_login_path, redirect_state_from_history};

/// Prompt shown above the sign-in button.
pub(crate) fn login_prompt(redirect: Option<&RedirectState>) -> String {
    match redirect {
        Some(RedirectState { from }) if !from.is_empty() => format!("Sign in to continue to {from}."),
        _ => "Sign in to continue.".to_owned(),
    }
}

/// Whether the page should leave for `post_login_path`.
pub(crate) fn should_leave_login(auth: &AuthState) -> bool {
    !auth.is_loading && auth.is_authenticated
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    let redirect = Memo::new(move |_| location.state.with(redirect_state_from_history));
    let auth_state = move || auth.map(|a| a.get()).unwrap_or_default();

    Effect::new(move || {
        if should_leave_login(&auth_state()) {
            let target = redirect.with(|r| post_login_path(r.as_ref()).to_owned());
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="login-page">
            <Show
                when=move || !auth_state().is_loading
                fallback=|| view! { <LoadingIndicator message="Checking session..."/> }
            >
                <div class="login-card">
                    <h1>"Jobboard"</h1>
                    <p class="login-card__subtitle">{move || redirect.with(|r| login_prompt(r.as_ref()))}</p>
                    <a href=routes::AUTH_ENTRY rel="external" class="login-button">
                        "Sign in"
                    </a>
                </div>
            </Show>
        </div>
    }
}
