//! Theme mode state and its context provider.
//!
//! DESIGN
//! ======
//! The provider owns a single `RwSignal<ThemeMode>`. Consumers get a `Copy`
//! handle through `use_theme`; outside a provider they get a detached handle
//! that reads `Light` and ignores toggles, so stray components degrade instead
//! of panicking on a missing context.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

use super::toggle::Toggle;

/// Color scheme applied to the whole document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode: {0}")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseThemeModeError(s.to_owned())),
        }
    }
}

/// Handle to the provider-owned theme signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeContext {
    mode: Option<RwSignal<ThemeMode>>,
}

impl ThemeContext {
    pub fn new(initial: ThemeMode) -> Self {
        Self { mode: Some(RwSignal::new(initial)) }
    }

    /// Handle used when no `ThemeProvider` is mounted.
    pub fn detached() -> Self {
        Self { mode: None }
    }

    pub fn is_detached(&self) -> bool {
        self.mode.is_none()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.map_or(ThemeMode::Light, |m| m.get())
    }

    pub fn toggle(&self) {
        if let Some(mode) = self.mode {
            mode.update(|m| *m = m.toggled());
        }
    }
}

impl Toggle for ThemeContext {
    type Value = ThemeMode;

    fn current(&self) -> ThemeMode {
        self.mode()
    }

    fn toggle(&self) {
        ThemeContext::toggle(self);
    }
}

/// Theme for the current subtree, or the detached default.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_default()
}

/// Provide a theme context to `children` and mirror it onto `<html data-theme>`.
#[component]
pub fn ThemeProvider(#[prop(optional)] initial: Option<ThemeMode>, children: Children) -> impl IntoView {
    let theme = ThemeContext::new(initial.unwrap_or_default());
    provide_context(theme);

    Effect::new(move || crate::util::dark_mode::apply(theme.mode()));

    children()
}
