//! Collapsible navigation sidebar.
//!
//! ARCHITECTURE
//! ============
//! The sidebar and its toggle button live in different parts of the layout
//! and meet only through `SidebarContext`.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::state::sidebar::use_sidebar;
use crate::state::toggle::on_toggle;

pub(crate) fn sidebar_class(collapsed: bool) -> &'static str {
    if collapsed { "sidebar sidebar--collapsed" } else { "sidebar" }
}

pub(crate) fn sidebar_toggle_label(collapsed: bool) -> &'static str {
    if collapsed { "Expand sidebar" } else { "Collapse sidebar" }
}

#[component]
pub fn Sidebar(children: Children) -> impl IntoView {
    let sidebar = use_sidebar();

    view! {
        <aside class=move || sidebar_class(sidebar.is_collapsed())>
            <nav class="sidebar__nav">{children()}</nav>
        </aside>
    }
}

#[component]
pub fn SidebarToggle() -> impl IntoView {
    let sidebar = use_sidebar();

    view! {
        <button
            class="btn toolbar__sidebar-toggle"
            aria-expanded=move || (!sidebar.is_collapsed()).to_string()
            title=move || sidebar_toggle_label(sidebar.is_collapsed())
            on:click=on_toggle(sidebar)
        >
            "☰"
        </button>
    }
}
