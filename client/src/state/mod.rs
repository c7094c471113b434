//! Client-side state, provided to pages as `RwSignal` contexts from `App`.

pub mod approval;
pub mod dashboard;
pub mod register;
pub mod ui;
