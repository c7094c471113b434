//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, wizard rows, dialogs, and report panels
//! while reading and writing shared state from Leptos context providers.

pub mod add_social_modal;
pub mod awareness_details;
pub mod competition_details;
pub mod delete_social_modal;
pub mod perception_details;
pub mod report_blocks;
pub mod review_field;
pub mod score_ring;
pub mod sidebar;
pub mod theme_switcher;
pub mod topbar;
