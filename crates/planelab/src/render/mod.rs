//! Renderer seam used by the scene browser.
//!
//! A renderer accepts batches of points and segments with their style map,
//! owns the viewport of the single plotting surface, and can fit that
//! viewport to whatever it drew since the last `clear`.
//!
//! Implementations
//! - `Canvas`: in-memory frame (draw calls + viewport). Used by tests and as
//!   the backing store of other renderers.
//! - `SvgRenderer`: a `Canvas` that can export its current frame as SVG.

mod canvas;
mod svg;

pub use canvas::{Canvas, Frame};
pub use svg::SvgRenderer;

use std::fmt;

use crate::geom::{Point, Segment, Style, Viewport};

/// Non-fatal draw failure; the browser logs it and skips the collection.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    Unsupported { what: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { what } => write!(f, "renderer cannot draw {what}"),
        }
    }
}

impl std::error::Error for RenderError {}

pub trait Renderer {
    /// Drop everything drawn so far (the viewport is kept).
    fn clear(&mut self);
    fn draw_points(&mut self, points: &[Point], style: &Style) -> Result<(), RenderError>;
    fn draw_segments(&mut self, segments: &[Segment], style: &Style) -> Result<(), RenderError>;
    fn viewport(&self) -> Viewport;
    fn set_viewport(&mut self, viewport: Viewport);
    /// Fit the viewport to the data drawn since the last `clear`.
    fn autoscale(&mut self);
    /// Flush the frame to its surface.
    fn present(&mut self) {}
}
