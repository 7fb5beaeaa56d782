//! Authenticated page chrome: sidebar, toolbar, and content area.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::sidebar::{Sidebar, SidebarToggle};
use crate::components::theme_toggle::ThemeToggle;
use crate::routes;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar>
                <A href=routes::DASHBOARD>"Dashboard"</A>
            </Sidebar>
            <div class="app-layout__main">
                <header class="toolbar">
                    <SidebarToggle/>
                    <span class="toolbar__title">"Jobboard"</span>
                    <span class="toolbar__spacer"></span>
                    <ThemeToggle/>
                </header>
                <main class="app-layout__content">{children()}</main>
            </div>
        </div>
    }
}
