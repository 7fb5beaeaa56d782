//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage};
use crate::state::auth::AuthState;
use crate::state::sidebar::SidebarProvider;
use crate::state::theme::ThemeProvider;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Reuses an auth signal already in context (the host's auth flow owns it);
/// otherwise starts signed out. Theme and sidebar providers wrap the router so
/// every page shares one instance of each.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = use_context::<RwSignal<AuthState>>().unwrap_or_else(|| RwSignal::new(AuthState::default()));
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/jobboard.css"/>
        <Title text="Jobboard"/>

        <ThemeProvider>
            <SidebarProvider>
                <Router>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("") view=ProtectedDashboard/>
                        <Route path=StaticSegment("dashboard") view=ProtectedDashboard/>
                    </Routes>
                </Router>
            </SidebarProvider>
        </ThemeProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardPage/>
        </ProtectedRoute>
    }
}
