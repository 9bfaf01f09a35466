//! Coordinate types shared by the engine and its drawing backends.
//!
//! All points are in surface-local pixel space: `(0, 0)` is the top-left
//! corner of the drawing surface. Screen-space points arriving from the host
//! are converted with [`Point::relative_to`] using the surface's on-screen
//! origin.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in either screen or surface-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Express this point relative to `origin` (subtracts the origin).
    #[must_use]
    pub fn relative_to(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels.
    #[must_use]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The region both sizes share when anchored at the origin.
    #[must_use]
    pub fn intersect(self, other: Size) -> Size {
        Size { width: self.width.min(other.width), height: self.height.min(other.height) }
    }

    /// Whether the pixel at `(x, y)` lies inside these bounds.
    #[must_use]
    pub fn contains(self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A straight chord between two consecutive pointer samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    #[must_use]
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Shortest distance from `p` to any point on the segment.
    ///
    /// Degenerate (zero-length) segments measure distance to their single point.
    #[must_use]
    pub fn distance_to(&self, p: Point) -> f64 {
        let dx = self.to.x - self.from.x;
        let dy = self.to.y - self.from.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq <= f64::EPSILON {
            return p.distance(self.from);
        }
        let t = (((p.x - self.from.x) * dx + (p.y - self.from.y) * dy) / len_sq).clamp(0.0, 1.0);
        p.distance(Point::new(self.from.x + t * dx, self.from.y + t * dy))
    }
}
