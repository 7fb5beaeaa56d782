//! Route paths shared by the router, guards, and pages.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const DASHBOARD: &str = "/dashboard";

/// Entry point of the external sign-in flow.
///
/// Neither the Leptos routes nor the bundled server handle this path; the host
/// that owns authentication must mount its sign-in handler here, otherwise the
/// login button leads to a 404.
pub const AUTH_ENTRY: &str = "/auth/login";
