//! The drawing backend seam.
//!
//! [`Surface`] is the minimal immediate-mode 2D API the engine drives: stroke
//! one segment, flood the whole surface with a color, and snapshot / resize /
//! restore the bitmap. [`crate::raster::Raster`] implements it in memory and
//! [`crate::web::CanvasSurface`] implements it over a browser `<canvas>`.

use crate::config::{Color, StrokeStyle};
use crate::error::SurfaceError;
use crate::geom::{Point, Segment, Size};

/// A mutable raster bitmap the engine can draw onto.
pub trait Surface {
    /// Pixel data captured by [`Surface::snapshot`].
    type Snapshot;

    /// Current pixel dimensions of the bitmap.
    fn size(&self) -> Size;

    /// On-screen position of the bitmap's top-left corner.
    fn origin(&self) -> Point;

    /// Stroke one straight segment with `style`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Backend`] if the host rejects the call.
    fn stroke_segment(&mut self, segment: &Segment, style: &StrokeStyle) -> Result<(), SurfaceError>;

    /// Paint every pixel with `color`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Backend`] if the host rejects the call.
    fn fill(&mut self, color: Color) -> Result<(), SurfaceError>;

    /// Capture the current bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Backend`] if the pixels cannot be read.
    fn snapshot(&self) -> Result<Self::Snapshot, SurfaceError>;

    /// Change the bitmap's dimensions. Existing content is not preserved.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Backend`] if the host rejects the call.
    fn resize(&mut self, size: Size) -> Result<(), SurfaceError>;

    /// Write a snapshot back at the origin, replacing pixels and clipping to
    /// the current bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Backend`] if the host rejects the call.
    fn restore(&mut self, snapshot: &Self::Snapshot) -> Result<(), SurfaceError>;
}
