//! Browser backend: a [`Surface`] over `<canvas>` and its 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. Fallible `Canvas2D` calls surface as
//! [`SurfaceError::Backend`].

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::config::{Color, StrokeStyle};
use crate::error::SurfaceError;
use crate::geom::{Point, Segment, Size};
use crate::surface::Surface;

fn backend(err: JsValue) -> SurfaceError {
    SurfaceError::Backend(format!("{err:?}"))
}

/// A `<canvas>` element whose backing store is the drawing bitmap.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the element's 2D context and size the backing store to the
    /// element's on-screen size.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Unavailable`] if the element yields no 2D context.
    pub fn attach(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| SurfaceError::Unavailable)?,
            Ok(None) | Err(_) => return Err(SurfaceError::Unavailable),
        };
        let surface = Self { canvas, ctx };
        let size = surface.layout_size();
        surface.canvas.set_width(size.width);
        surface.canvas.set_height(size.height);
        Ok(surface)
    }

    /// The element's current on-screen size in CSS pixels.
    #[must_use]
    pub fn layout_size(&self) -> Size {
        let width = u32::try_from(self.canvas.offset_width()).unwrap_or(0);
        let height = u32::try_from(self.canvas.offset_height()).unwrap_or(0);
        Size::new(width, height)
    }

    #[must_use]
    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    /// `None` when the bitmap is empty; `getImageData` rejects zero-sized reads.
    type Snapshot = Option<ImageData>;

    fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    fn origin(&self) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        Point::new(rect.left(), rect.top())
    }

    fn stroke_segment(&mut self, segment: &Segment, style: &StrokeStyle) -> Result<(), SurfaceError> {
        // Resizing a canvas resets its context state, so style is set per segment.
        self.ctx.set_stroke_style_str(&style.color.to_css());
        self.ctx.set_line_width(style.width);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");

        self.ctx.begin_path();
        self.ctx.move_to(segment.from.x, segment.from.y);
        self.ctx.line_to(segment.to.x, segment.to.y);
        self.ctx.stroke();
        Ok(())
    }

    fn fill(&mut self, color: Color) -> Result<(), SurfaceError> {
        let size = self.size();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, f64::from(size.width), f64::from(size.height));
        Ok(())
    }

    fn snapshot(&self) -> Result<Option<ImageData>, SurfaceError> {
        let size = self.size();
        if size.is_empty() {
            return Ok(None);
        }
        self.ctx
            .get_image_data(0.0, 0.0, f64::from(size.width), f64::from(size.height))
            .map(Some)
            .map_err(backend)
    }

    fn resize(&mut self, size: Size) -> Result<(), SurfaceError> {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        Ok(())
    }

    fn restore(&mut self, snapshot: &Option<ImageData>) -> Result<(), SurfaceError> {
        match snapshot {
            Some(data) => self.ctx.put_image_data(data, 0.0, 0.0).map_err(backend),
            None => Ok(()),
        }
    }
}
