//! Orientation lab: which side of a fixed line does each point lie on?
//!
//! Purpose
//! - Evaluate four determinant formulations of the orientation test (2×2 and
//!   3×3, each by hand and through nalgebra's LU-based `determinant`) for every
//!   point, under a sweep of collinearity tolerances.
//! - Surface the points on which two formulations disagree, and package
//!   results as scenes for the browser.
//!
//! Model
//! - Line through `a` and `b`; `d(c) > eps` is left, `d(c) < -eps` right,
//!   `|d(c)| < eps` collinear (`|d| == eps` counts as a side).
//! - Samples are seeded (`StdRng::seed_from_u64`) so every table is reproducible.

mod orient;
mod report;
mod sample;
mod sweep;

pub use orient::{classify, Determinant, Side};
pub use report::format_table;
pub use sample::{sample_points, SampleKind, SampleParams};
pub use sweep::{Counts, Sweep};

use std::fmt;

use crate::cfg::EPSILONS;
use crate::geom::{point, Point, Style};
use crate::scene::{PointSet, Scene};

/// Lab configuration: the reference line and the tolerance sweep.
#[derive(Clone, Debug)]
pub struct LabCfg {
    pub a: Point,
    pub b: Point,
    pub epsilons: Vec<f64>,
}

impl Default for LabCfg {
    fn default() -> Self {
        Self {
            a: point(-1.0, 0.0),
            b: point(1.0, 0.1),
            epsilons: EPSILONS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LabError {
    InvalidParams { reason: String },
}

impl LabError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid lab params: {reason}"),
        }
    }
}

impl std::error::Error for LabError {}

fn colored(points: Vec<Point>, color: &str) -> PointSet {
    // Literal keys/values: insertion cannot fail.
    let style = Style::new().with("color", color).unwrap_or_default();
    PointSet::styled(points, style)
}

/// Left points red, right green, collinear blue.
pub fn classification_scene(sweep: &Sweep, det: Determinant, eps_index: usize) -> Scene {
    let [left, right, collinear] = sweep.sides(det, eps_index);
    Scene::new(
        vec![
            colored(left, "red"),
            colored(right, "green"),
            colored(collinear, "blue"),
        ],
        vec![],
    )
}

/// Points classified differently by two formulations, in red.
pub fn discrepancy_scene(points: Vec<Point>) -> Scene {
    Scene::new(vec![colored(points, "red")], vec![])
}

#[cfg(test)]
mod tests;
