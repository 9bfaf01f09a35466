//! Error types for the canvas crate.
//!
//! Only two failure kinds come from the drawing lifecycle itself
//! (`Unavailable`, `NotMounted`); `Backend` carries host exceptions raised by
//! individual drawing calls. Handlers that have nothing to do (a move while
//! idle, a clear with no surface) return quietly instead of erroring.

use crate::input::Tool;

/// Failures raised by the drawing surface or the engine driving it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SurfaceError {
    /// No 2D rendering context could be obtained at mount time.
    #[error("2D rendering context unavailable")]
    Unavailable,

    /// A coordinate or surface query was issued with no surface mounted.
    #[error("drawing surface is not mounted")]
    NotMounted,

    /// The host rejected a drawing call.
    #[error("surface backend call failed: {0}")]
    Backend(String),
}

/// Failures while loading or validating a [`crate::config::SurfaceConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("invalid stroke width for {tool:?}: {width}")]
    InvalidWidth { tool: Tool, width: f64 },
}
