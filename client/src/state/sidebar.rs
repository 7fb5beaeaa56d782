//! Sidebar collapse state and its context provider.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use super::toggle::Toggle;

/// Handle to the provider-owned collapse flag.
///
/// Detached handles (no `SidebarProvider` mounted) read expanded and ignore
/// toggles.
#[derive(Clone, Copy, Debug, Default)]
pub struct SidebarContext {
    collapsed: Option<RwSignal<bool>>,
}

impl SidebarContext {
    /// New expanded sidebar.
    pub fn new() -> Self {
        Self { collapsed: Some(RwSignal::new(false)) }
    }

    pub fn detached() -> Self {
        Self { collapsed: None }
    }

    pub fn is_detached(&self) -> bool {
        self.collapsed.is_none()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed.is_some_and(|c| c.get())
    }

    pub fn toggle(&self) {
        if let Some(collapsed) = self.collapsed {
            collapsed.update(|c| *c = !*c);
        }
    }
}

impl Toggle for SidebarContext {
    type Value = bool;

    fn current(&self) -> bool {
        self.is_collapsed()
    }

    fn toggle(&self) {
        SidebarContext::toggle(self);
    }
}

/// Sidebar state for the current subtree, or the detached default.
pub fn use_sidebar() -> SidebarContext {
    use_context::<SidebarContext>().unwrap_or_default()
}

#[component]
pub fn SidebarProvider(children: Children) -> impl IntoView {
    provide_context(SidebarContext::new());
    children()
}
