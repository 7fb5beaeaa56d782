//! Light/dark switch for the toolbar.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::state::theme::{ThemeMode, use_theme};
use crate::state::toggle::on_toggle;

pub(crate) fn theme_toggle_icon(mode: ThemeMode) -> &'static str {
    if mode.is_dark() { "☀" } else { "☾" }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button class="btn toolbar__theme-toggle" title="Toggle dark mode" on:click=on_toggle(theme)>
            {move || theme_toggle_icon(theme.mode())}
        </button>
    }
}
