use web_sys::HtmlCanvasElement;

use crate::config::SurfaceConfig;
use crate::error::SurfaceError;
use crate::geom::{Point, Segment, Size};
use crate::input::{StrokeSession, Tool, UiState};
use crate::surface::Surface;
use crate::web::CanvasSurface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// What an input handler did, for the host to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    StrokeStarted(Point),
    SegmentRendered(Segment),
    StrokeEnded,
    Cleared,
    Resized { from: Size, to: Size },
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Generic over the drawing backend so it can be tested against an in-memory
/// [`crate::raster::Raster`] without WASM/browser dependencies.
pub struct EngineCore<S: Surface> {
    pub config: SurfaceConfig,
    pub ui: UiState,
    pub input: StrokeSession,
    surface: Option<S>,
}

impl<S: Surface> Default for EngineCore<S> {
    fn default() -> Self {
        Self::new(SurfaceConfig::default())
    }
}

impl<S: Surface> EngineCore<S> {
    #[must_use]
    pub fn new(config: SurfaceConfig) -> Self {
        Self { config, ui: UiState::default(), input: StrokeSession::Idle, surface: None }
    }

    // --- Lifecycle ---

    /// Take ownership of `surface` and paint it with the background color.
    ///
    /// Replaces any previously mounted surface and drops an in-progress stroke.
    ///
    /// # Errors
    ///
    /// Propagates a backend failure from the initial fill; the surface is then
    /// not mounted.
    pub fn mount(&mut self, mut surface: S) -> Result<(), SurfaceError> {
        self.input.end();
        self.surface = None;
        surface.fill(self.config.palette.background)?;
        let size = surface.size();
        log::debug!("surface mounted at {}x{}", size.width, size.height);
        self.surface = Some(surface);
        Ok(())
    }

    /// Release the surface. Any in-progress stroke ends.
    pub fn unmount(&mut self) -> Option<S> {
        self.input.end();
        let surface = self.surface.take();
        if surface.is_some() {
            log::debug!("surface unmounted");
        }
        surface
    }

    // --- Stroke gestures (surface-local coordinates) ---

    /// Begin a stroke at `p`. Ignored when no surface is mounted.
    pub fn pointer_down(&mut self, p: Point) -> Action {
        if self.surface.is_none() {
            return Action::None;
        }
        self.input.begin(p);
        Action::StrokeStarted(p)
    }

    /// Render one segment from the previous sample to `p` with the active tool.
    ///
    /// # Errors
    ///
    /// Propagates a backend failure while stroking.
    pub fn pointer_move(&mut self, p: Point) -> Result<Action, SurfaceError> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(Action::None);
        };
        let Some(segment) = self.input.advance(p) else {
            return Ok(Action::None);
        };
        let style = self.config.style_for(self.ui.tool);
        surface.stroke_segment(&segment, &style)?;
        log::trace!(
            "segment ({:.1}, {:.1}) -> ({:.1}, {:.1}) with {:?}",
            segment.from.x,
            segment.from.y,
            segment.to.x,
            segment.to.y,
            self.ui.tool
        );
        Ok(Action::SegmentRendered(segment))
    }

    /// End the current stroke, if any.
    pub fn pointer_up(&mut self) -> Action {
        if self.input.end() { Action::StrokeEnded } else { Action::None }
    }

    /// The pointer left the surface; ends the stroke exactly like pointer-up.
    pub fn pointer_leave(&mut self) -> Action {
        self.pointer_up()
    }

    // --- Stroke gestures (screen coordinates) ---

    /// Convert a screen-space point to surface-local coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NotMounted`] when there is no surface to measure.
    pub fn local_point(&self, screen: Point) -> Result<Point, SurfaceError> {
        let surface = self.surface.as_ref().ok_or(SurfaceError::NotMounted)?;
        Ok(screen.relative_to(surface.origin()))
    }

    /// [`Self::pointer_down`] for a screen-space point.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NotMounted`] when no surface is mounted.
    pub fn on_pointer_down(&mut self, screen: Point) -> Result<Action, SurfaceError> {
        let p = self.local_point(screen)?;
        Ok(self.pointer_down(p))
    }

    /// [`Self::pointer_move`] for a screen-space point. Moves while idle
    /// return before any coordinate translation.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NotMounted`] or a backend failure.
    pub fn on_pointer_move(&mut self, screen: Point) -> Result<Action, SurfaceError> {
        if !self.input.is_drawing() {
            return Ok(Action::None);
        }
        let p = self.local_point(screen)?;
        self.pointer_move(p)
    }

    // --- Controls ---

    /// Set the active tool. Only segments rendered afterwards are affected.
    pub fn select_tool(&mut self, tool: Tool) {
        if self.ui.tool != tool {
            log::debug!("tool changed to {tool:?}");
        }
        self.ui.tool = tool;
    }

    /// Repaint the whole surface with the background color.
    ///
    /// # Errors
    ///
    /// Propagates a backend failure from the fill.
    pub fn clear(&mut self) -> Result<Action, SurfaceError> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(Action::None);
        };
        surface.fill(self.config.palette.background)?;
        log::debug!("surface cleared");
        Ok(Action::Cleared)
    }

    /// Resize the surface to `size`, keeping existing content anchored at the
    /// origin. Content beyond the new bounds is lost. Newly exposed area is
    /// background-filled when `config.fill_exposed` is set.
    ///
    /// # Errors
    ///
    /// Propagates a backend failure from snapshot, resize, fill, or restore.
    pub fn handle_resize(&mut self, size: Size) -> Result<Action, SurfaceError> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(Action::None);
        };
        let from = surface.size();
        if from == size {
            return Ok(Action::None);
        }

        let snapshot = surface.snapshot()?;
        surface.resize(size)?;
        if self.config.fill_exposed {
            surface.fill(self.config.palette.background)?;
        }
        surface.restore(&snapshot)?;

        log::debug!("surface resized {}x{} -> {}x{}", from.width, from.height, size.width, size.height);
        Ok(Action::Resized { from, to: size })
    }

    // --- Queries ---

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.input.is_drawing()
    }

    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.input.last_point()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Current pixel dimensions of the mounted surface.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NotMounted`] when no surface is mounted.
    pub fn size(&self) -> Result<Size, SurfaceError> {
        self.surface.as_ref().map(S::size).ok_or(SurfaceError::NotMounted)
    }

    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }
}

/// The full canvas engine. Wraps `EngineCore` over the browser canvas element.
pub struct Engine {
    pub core: EngineCore<CanvasSurface>,
}

impl Engine {
    /// Bind to `canvas`, size it to its layout box, and paint the background.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Unavailable`] if the element has no 2D context;
    /// the host should leave the element non-interactive.
    pub fn mount(canvas: HtmlCanvasElement, config: SurfaceConfig) -> Result<Self, SurfaceError> {
        let surface = CanvasSurface::attach(canvas)?;
        let mut core = EngineCore::new(config);
        core.mount(surface)?;
        Ok(Self { core })
    }

    // --- Input events (client coordinates) ---

    /// # Errors
    ///
    /// Returns [`SurfaceError::NotMounted`] after teardown.
    pub fn on_pointer_down(&mut self, client: Point) -> Result<Action, SurfaceError> {
        self.core.on_pointer_down(client)
    }

    /// # Errors
    ///
    /// Returns [`SurfaceError::NotMounted`] after teardown, or a backend failure.
    pub fn on_pointer_move(&mut self, client: Point) -> Result<Action, SurfaceError> {
        self.core.on_pointer_move(client)
    }

    pub fn on_pointer_up(&mut self) -> Action {
        self.core.pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Action {
        self.core.pointer_leave()
    }

    // --- Controls ---

    pub fn select_tool(&mut self, tool: Tool) {
        self.core.select_tool(tool);
    }

    /// # Errors
    ///
    /// Propagates a backend failure from the fill.
    pub fn clear(&mut self) -> Result<Action, SurfaceError> {
        self.core.clear()
    }

    /// Match the backing store to the element's current layout size.
    ///
    /// # Errors
    ///
    /// Propagates a backend failure from the resize sequence.
    pub fn handle_resize(&mut self) -> Result<Action, SurfaceError> {
        let Some(size) = self.core.surface().map(CanvasSurface::layout_size) else {
            return Ok(Action::None);
        };
        self.core.handle_resize(size)
    }

    /// Release the canvas element.
    pub fn unmount(&mut self) -> Option<HtmlCanvasElement> {
        self.core.unmount().map(|surface| surface.element().clone())
    }
}
