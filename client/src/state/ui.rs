//! Local UI chrome state (active tool, color scheme, clear requests).
//!
//! DESIGN
//! ======
//! The engine owns the authoritative tool and bitmap; this state only records
//! what the tool bar asked for. The canvas host forwards changes to the engine.
//! Clear is a one-shot command, so it is modeled as a monotonically increasing
//! sequence number the host compares against the last one it handled.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::config::Theme;
use canvas::input::Tool;

/// UI state for the tool bar and canvas host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tool: Tool,
    pub theme: Theme,
    pub clear_seq: u64,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn select(&mut self, tool: Tool) {
        self.active_tool = tool;
    }

    #[must_use]
    pub fn is_active(&self, tool: Tool) -> bool {
        self.active_tool == tool
    }

    /// Ask the canvas host to clear the surface once.
    pub fn request_clear(&mut self) {
        self.clear_seq = self.clear_seq.wrapping_add(1);
    }
}
