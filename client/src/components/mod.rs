//! Reusable UI building blocks.
//!
//! ARCHITECTURE
//! ============
//! Components read shared state through the `use_*` context helpers and keep
//! decision logic in `util` so it can be tested without a DOM.

pub mod job_type_badge;
pub mod layout;
pub mod loading;
pub mod protected_route;
pub mod sidebar;
pub mod theme_toggle;
