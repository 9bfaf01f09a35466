//! Pointer mapping and engine result reporting for the canvas host.

use canvas::engine::Action;
use canvas::error::SurfaceError;

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

/// Client-space position of a pointer event.
#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> canvas::geom::Point {
    canvas::geom::Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Log a failed engine call. Returns the action on success.
///
/// A missing surface is a host wiring bug, so it is logged as an error; backend
/// failures only lose the current segment and are warnings.
pub fn report(result: Result<Action, SurfaceError>) -> Option<Action> {
    match result {
        Ok(action) => Some(action),
        Err(err @ SurfaceError::NotMounted) => {
            log::error!("pointer event without a mounted surface: {err}");
            None
        }
        Err(err) => {
            log::warn!("drawing call failed: {err}");
            None
        }
    }
}
