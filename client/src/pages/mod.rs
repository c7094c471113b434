//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (timers, navigation, dialogs)
//! and delegates rendering details to `components`.

pub mod approval;
pub mod dashboard;
pub mod register;
