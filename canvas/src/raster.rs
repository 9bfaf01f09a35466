//! In-memory RGBA raster backend.
//!
//! Segments are rasterized as round-capped capsules: a pixel is painted when
//! its center lies within half the stroke width of the segment. There is no
//! anti-aliasing, so every pixel is either untouched or exactly the stroke
//! color. Freshly allocated pixels are fully transparent, like a newly sized
//! browser canvas.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use crate::config::{Color, StrokeStyle};
use crate::consts::{BYTES_PER_PIXEL, PIXEL_CENTER};
use crate::error::SurfaceError;
use crate::geom::{Point, Segment, Size};
use crate::surface::Surface;

/// A pixel buffer captured from a [`Raster`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSnapshot {
    size: Size,
    pixels: Vec<u8>,
}

/// An RGBA bitmap held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    size: Size,
    origin: Point,
    pixels: Vec<u8>,
}

impl Raster {
    /// A transparent raster of the given size, positioned at screen `(0, 0)`.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self { size, origin: Point::new(0.0, 0.0), pixels: vec![0; size.area() * BYTES_PER_PIXEL] }
    }

    /// Place the raster at `origin` in screen space.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Color of the pixel at `(x, y)`, or `None` outside the bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let i = self.index(x, y)?;
        let px = &self.pixels[i..i + BYTES_PER_PIXEL];
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    /// Number of pixels exactly equal to `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        let target = color.to_array();
        self.pixels.chunks_exact(BYTES_PER_PIXEL).filter(|px| px[..] == target[..]).count()
    }

    /// Whether every pixel equals `color`.
    #[must_use]
    pub fn is_uniform(&self, color: Color) -> bool {
        self.count(color) == self.size.area()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if !self.size.contains(x, y) {
            return None;
        }
        Some((y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    fn put(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&color);
        }
    }

    /// Pixel-index range covering `[lo, hi]` in surface space, clamped to `len`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn span(lo: f64, hi: f64, len: u32) -> std::ops::Range<u32> {
        let max = f64::from(len);
        let start = lo.floor().clamp(0.0, max) as u32;
        let end = hi.ceil().clamp(0.0, max) as u32;
        start..end
    }
}

impl Surface for Raster {
    type Snapshot = RasterSnapshot;

    fn size(&self) -> Size {
        self.size
    }

    fn origin(&self) -> Point {
        self.origin
    }

    fn stroke_segment(&mut self, segment: &Segment, style: &StrokeStyle) -> Result<(), SurfaceError> {
        let radius = style.width / 2.0;
        let color = style.color.to_array();
        let xs = Self::span(
            segment.from.x.min(segment.to.x) - radius,
            segment.from.x.max(segment.to.x) + radius,
            self.size.width,
        );
        let ys = Self::span(
            segment.from.y.min(segment.to.y) - radius,
            segment.from.y.max(segment.to.y) + radius,
            self.size.height,
        );

        for y in ys {
            for x in xs.clone() {
                let center = Point::new(f64::from(x) + PIXEL_CENTER, f64::from(y) + PIXEL_CENTER);
                if segment.distance_to(center) <= radius {
                    self.put(x, y, color);
                }
            }
        }
        Ok(())
    }

    fn fill(&mut self, color: Color) -> Result<(), SurfaceError> {
        let color = color.to_array();
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&color);
        }
        Ok(())
    }

    fn snapshot(&self) -> Result<RasterSnapshot, SurfaceError> {
        Ok(RasterSnapshot { size: self.size, pixels: self.pixels.clone() })
    }

    fn resize(&mut self, size: Size) -> Result<(), SurfaceError> {
        self.size = size;
        self.pixels = vec![0; size.area() * BYTES_PER_PIXEL];
        Ok(())
    }

    fn restore(&mut self, snapshot: &RasterSnapshot) -> Result<(), SurfaceError> {
        let shared = snapshot.size.intersect(self.size);
        let row_bytes = shared.width as usize * BYTES_PER_PIXEL;
        for y in 0..shared.height as usize {
            let src = y * snapshot.size.width as usize * BYTES_PER_PIXEL;
            let dst = y * self.size.width as usize * BYTES_PER_PIXEL;
            self.pixels[dst..dst + row_bytes].copy_from_slice(&snapshot.pixels[src..src + row_bytes]);
        }
        Ok(())
    }
}
