//! Route guard for pages that need a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard never starts a session check. It observes the shared
//! `AuthState` and picks one of three outcomes on every change: loading
//! placeholder, replace-redirect to `/login`, or the children untouched.
//! A missing auth context reads as signed out.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::LoadingIndicator;
use crate::state::auth::use_auth;
use crate::util::auth::{RouteAccess, decide_route_access};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    let access = Memo::new(move |_| {
        let state = auth.map(|a| a.get()).unwrap_or_default();
        location.pathname.with(|path| decide_route_access(&state, path))
    });

    Effect::new(move || {
        if let RouteAccess::Redirect(redirect) = access.get() {
            leptos::logging::log!("redirecting {} to {}", redirect.state.from, redirect.to);
            navigate(redirect.to, redirect.navigate_options());
        }
    });

    move || match access.get() {
        RouteAccess::Loading => view! { <LoadingIndicator message="Loading..." full_screen=true/> }.into_any(),
        RouteAccess::Redirect(_) => ().into_any(),
        RouteAccess::Granted => children().into_any(),
    }
}
