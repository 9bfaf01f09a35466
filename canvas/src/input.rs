//! Input model: tools and the stroke state machine.
//!
//! `Tool` captures which style new segments are drawn with. `StrokeSession`
//! is the gesture being tracked between pointer-down and pointer-up; it carries
//! the previous pointer sample so each move can emit one straight segment.
//!
//! ```text
//! Idle --begin--> Drawing --advance(*)--> Drawing --end--> Idle
//! ```

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Segment};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Thin foreground-colored strokes (default).
    #[default]
    Pencil,
    /// Thick background-colored strokes.
    Eraser,
}

impl Tool {
    /// Human-readable name shown on tool buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Eraser => "Eraser",
        }
    }
}

/// Persistent UI state owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active drawing tool.
    pub tool: Tool,
}

/// State of the stroke gesture.
///
/// A stroke is in progress exactly when the session is `Drawing`, so there is
/// never a previous sample without an active stroke or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeSession {
    /// No stroke in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The pointer is down and dragging.
    Drawing {
        /// Surface-local position of the previous pointer sample.
        last: Point,
    },
}

impl StrokeSession {
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Drawing { last } => Some(*last),
        }
    }

    /// Start a new stroke seeded at `p`, discarding any previous seed.
    pub fn begin(&mut self, p: Point) {
        *self = Self::Drawing { last: p };
    }

    /// Move the stroke to `p`, returning the chord from the previous sample.
    ///
    /// Returns `None` (and stays idle) when no stroke is in progress.
    pub fn advance(&mut self, p: Point) -> Option<Segment> {
        match self {
            Self::Idle => None,
            Self::Drawing { last } => {
                let segment = Segment::new(*last, p);
                *last = p;
                Some(segment)
            }
        }
    }

    /// End the stroke. Returns whether a stroke was actually in progress.
    pub fn end(&mut self) -> bool {
        let was_drawing = self.is_drawing();
        *self = Self::Idle;
        was_drawing
    }
}
