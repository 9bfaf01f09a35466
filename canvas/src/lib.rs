//! Raster drawing engine for the whiteboard.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! drawing surface: translating pointer events into straight stroke segments,
//! painting them with the active tool, clearing, and preserving content across
//! resizes. The host layer only wires DOM events and toolbar buttons to the
//! engine.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser [`engine::Engine`] and testable [`engine::EngineCore`] |
//! | [`input`] | Tools and the stroke state machine |
//! | [`geom`] | Points, sizes, and segments |
//! | [`config`] | Colors, palettes, and per-tool stroke styling |
//! | [`surface`] | The drawing backend trait |
//! | [`raster`] | In-memory RGBA backend |
//! | [`web`] | `<canvas>` backend |
//! | [`error`] | Surface and config error types |
//! | [`consts`] | Shared numeric constants (default widths, raster layout) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geom;
pub mod input;
pub mod raster;
pub mod surface;
pub mod web;
