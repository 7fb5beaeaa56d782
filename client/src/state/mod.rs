//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `theme`, `sidebar`) so individual
//! components can depend on small focused models. Theme and sidebar follow the
//! same provider/consumer shape and share the `Toggle` seam.

pub mod auth;
pub mod sidebar;
pub mod theme;
pub mod toggle;
