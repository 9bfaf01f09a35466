//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the whiteboard chrome and drawing surface while
//! reading/writing the shared `UiState` from Leptos context.

pub mod canvas_host;
pub mod toolbar;
