//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and read/write shared state from Leptos
//! context providers.

pub mod case_study_modal;
pub mod project_card;
