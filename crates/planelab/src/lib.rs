//! Interactive 2D scene plotting and the orientation lab.
//!
//! Layers, leaf to root:
//! - `geom`: points, segments, viewports and style maps.
//! - `scene`: point/segment collections, scenes, and the portable JSON format.
//! - `interact`: the authoring state machine (point, segment, polygon modes).
//! - `browser`: the session object that owns scenes, overlays, controls and a renderer.
//! - `render`: the `Renderer` seam plus an in-memory canvas and an SVG exporter.
//! - `lab`: orientation tests against a fixed line, tolerance sweeps and reports.
//!
//! API Policy
//! - The crate is consumed by the workspace CLI only. There is no stable public API.

pub mod browser;
mod cfg;
pub mod geom;
pub mod interact;
pub mod lab;
pub mod render;
pub mod scene;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use browser::{Control, ControlSurface, PlotCfg, PlotError, SceneBrowser};
pub use geom::{Point, Segment, Style, StyleError, Viewport};
pub use interact::{ClickOutcome, InteractionState, Mode, ModeKind};
pub use scene::{PointSet, Scene, SceneDataError, SegmentSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::browser::{BrowserEvent, ClickEvent, Control, PlotCfg, SceneBrowser};
    pub use crate::geom::{Point, Segment, Style, Viewport};
    pub use crate::interact::{Mode, ModeKind};
    pub use crate::lab::{Determinant, LabCfg, SampleKind, Side, Sweep};
    pub use crate::render::{Canvas, Renderer, SvgRenderer};
    pub use crate::scene::{PointSet, Scene, SegmentSet};
    pub use nalgebra::Vector2;
}
