#![cfg(feature = "ssr")]

use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::location::RequestUrl;

use super::*;
use crate::state::auth::AuthState;

/// Server-render the guard around a single `<span>` at `/dashboard`.
fn render_guard(auth: AuthState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RequestUrl::new("/dashboard"));
        provide_context(RwSignal::new(auth));
        view! {
            <Router>
                <ProtectedRoute>
                    <span id="kid">"child"</span>
                </ProtectedRoute>
            </Router>
        }
        .to_html()
    })
}

#[test]
fn granted_renders_children_without_wrapper() {
    let html = render_guard(AuthState::authenticated());
    assert!(html.contains(r#"<span id="kid">child</span>"#), "{html}");
    assert!(!html.contains("<div"), "{html}");
    assert!(!html.contains("loading"), "{html}");
}

#[test]
fn loading_renders_full_screen_indicator_only() {
    let html = render_guard(AuthState::loading());
    assert!(html.contains("loading loading--full-screen"), "{html}");
    assert!(html.contains("Loading..."), "{html}");
    assert!(!html.contains("kid"), "{html}");
}

#[test]
fn loading_wins_even_when_authenticated() {
    let html = render_guard(AuthState { is_authenticated: true, is_loading: true });
    assert!(html.contains("loading--full-screen"), "{html}");
    assert!(!html.contains("kid"), "{html}");
}

#[test]
fn signed_out_renders_neither_children_nor_indicator() {
    let html = render_guard(AuthState::default());
    assert!(!html.contains("kid"), "{html}");
    assert!(!html.contains("loading"), "{html}");
}
