//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure formatting
//! rules from page and component logic to improve reuse and testability.

pub mod color;
pub mod delay;
pub mod format;
pub mod phone;
pub mod social;
pub mod theme;
pub mod validation;
