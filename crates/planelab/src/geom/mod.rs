//! Plane geometry values shared by scenes, the interaction state and renderers.
//!
//! - `Point`: a 2D coordinate pair (nalgebra column vector, `Copy`).
//! - `Segment`: two points; order matters only for drawing.
//! - `Viewport`: the visible x/y ranges of the single active plotting surface.
//! - `Style`: an opaque, validated option map handed to renderers unmodified.

mod style;
mod types;

pub use style::{Style, StyleError};
pub use types::{point, Point, Segment, Viewport};
