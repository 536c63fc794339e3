//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and sections while reading/writing shared
//! state from Leptos context providers.

pub mod hero_section;
pub mod navbar;
