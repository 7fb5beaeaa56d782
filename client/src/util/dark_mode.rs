//! Browser side of the theme.
//!
//! Applies a `data-theme` attribute to the `<html>` element so stylesheets can
//! key off it. Requires a browser environment; SSR paths no-op to keep server
//! rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeMode;

const THEME_ATTRIBUTE: &str = "data-theme";

/// Attribute name and value written to `<html>` for `mode`.
pub fn attribute_for(mode: ThemeMode) -> (&'static str, &'static str) {
    (THEME_ATTRIBUTE, mode.as_str())
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        let (name, value) = attribute_for(mode);
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if el.set_attribute(name, value).is_err() {
                leptos::logging::warn!("failed to set {name}={value}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
