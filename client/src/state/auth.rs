//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the external auth flow and shared as `RwSignal<AuthState>` through
//! context. Route guards only observe it; nothing in this crate flips the
//! fields except the flow that owns the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

/// Authentication state tracking login and loading status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl AuthState {
    /// State while the session check is still in flight.
    pub fn loading() -> Self {
        Self { is_authenticated: false, is_loading: true }
    }

    /// State after a successful session check.
    pub fn authenticated() -> Self {
        Self { is_authenticated: true, is_loading: false }
    }
}

/// Read the shared auth signal, if the app root provided one.
pub fn use_auth() -> Option<RwSignal<AuthState>> {
    use_context::<RwSignal<AuthState>>()
}
