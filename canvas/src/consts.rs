//! Shared numeric constants for the canvas crate.

// ── Tool styling ────────────────────────────────────────────────

/// Default pencil stroke width in surface pixels.
pub const PENCIL_WIDTH_PX: f64 = 2.0;

/// Default eraser stroke width in surface pixels.
pub const ERASER_WIDTH_PX: f64 = 20.0;

// ── Raster ──────────────────────────────────────────────────────

/// Bytes per RGBA pixel in a raster buffer.
pub const BYTES_PER_PIXEL: usize = 4;

/// Offset from a pixel's integer coordinate to its sampling center.
pub const PIXEL_CENTER: f64 = 0.5;
