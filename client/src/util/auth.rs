//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the login page agree on one redirect contract: the
//! guard sends unauthenticated users to `/login` with `{ from: <path> }` as
//! history state, replacing the current entry, and the login page sends them
//! back to `from` once the session is established.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;
use leptos_router::location::State;
use serde::{Deserialize, Serialize};

use crate::routes;
use crate::state::auth::AuthState;

/// History state attached to the login redirect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectState {
    pub from: String,
}

/// Navigation a guard must perform for an unauthenticated visitor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRedirect {
    pub to: &'static str,
    pub state: RedirectState,
    pub replace: bool,
}

impl LoginRedirect {
    /// Router options for this redirect. History state is only attached in the
    /// browser; server renders carry an empty state.
    pub fn navigate_options(&self) -> NavigateOptions {
        NavigateOptions {
            replace: self.replace,
            state: history_state(&self.state),
            ..NavigateOptions::default()
        }
    }
}

/// Outcome of checking a protected route against the current auth state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// The session check has not finished yet.
    Loading,
    /// No session: go to the login page.
    Redirect(LoginRedirect),
    /// Render the protected content.
    Granted,
}

/// Decide what a protected route shows.
///
/// Loading wins over everything else; `is_authenticated` is not consulted
/// until the session check has settled.
pub fn decide_route_access(auth: &AuthState, current_path: &str) -> RouteAccess {
    if auth.is_loading {
        return RouteAccess::Loading;
    }
    if !auth.is_authenticated {
        return RouteAccess::Redirect(LoginRedirect {
            to: routes::LOGIN,
            state: RedirectState { from: current_path.to_owned() },
            replace: true,
        });
    }
    RouteAccess::Granted
}

/// Where the login page should send the user after signing in.
///
/// Only same-origin absolute paths are honored; anything else (missing state,
/// protocol-relative `//host` or `/\host`, the login page itself) falls back
/// to home.
pub fn post_login_path(state: Option<&RedirectState>) -> &str {
    match state {
        Some(RedirectState { from })
            if from.starts_with('/')
                && !from.starts_with("//")
                && !from.starts_with("/\\")
                && from != routes::LOGIN =>
        {
            from.as_str()
        }
        _ => routes::HOME,
    }
}

/// Read the redirect payload back out of router history state.
pub fn redirect_state_from_history(state: &State) -> Option<RedirectState> {
    #[cfg(feature = "hydrate")]
    {
        let raw = state.to_js_value().as_string()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
        None
    }
}

fn history_state(state: &RedirectState) -> State {
    #[cfg(feature = "hydrate")]
    {
        match serde_json::to_string(state) {
            Ok(raw) => State::new(Some(wasm_bindgen::JsValue::from_str(&raw))),
            Err(e) => {
                leptos::logging::warn!("redirect state not serializable: {e}");
                State::new(None)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
        State::new(None)
    }
}
