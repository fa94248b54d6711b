//! Seeded point samples for the lab.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::LabError;
use crate::geom::{point, Point};

/// Sample families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleKind {
    /// Uniform in `[-1000, 1000]²`.
    Square,
    /// Uniform in `[-1e14, 1e14]²`.
    Wide,
    /// Uniform angle on the circle of radius 100 about the origin.
    Circle,
    /// `x` uniform in `[-1000, 1000]`, `y = 0.05 x + 0.05`.
    Line,
}

impl SampleKind {
    pub fn default_params(self) -> SampleParams {
        match self {
            SampleKind::Square => SampleParams {
                count: 100_000,
                extent: 1000.0,
            },
            SampleKind::Wide => SampleParams {
                count: 100_000,
                extent: 1e14,
            },
            SampleKind::Circle => SampleParams {
                count: 1000,
                extent: 100.0,
            },
            SampleKind::Line => SampleParams {
                count: 1000,
                extent: 1000.0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SampleKind::Square => "square",
            SampleKind::Wide => "wide",
            SampleKind::Circle => "circle",
            SampleKind::Line => "line",
        }
    }
}

/// `extent` is the half-width of the range (square/wide/line) or the radius (circle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleParams {
    pub count: usize,
    pub extent: f64,
}

impl SampleParams {
    fn validate(&self) -> Result<(), LabError> {
        if self.count == 0 {
            return Err(LabError::invalid("count must be > 0"));
        }
        if !self.extent.is_finite() || self.extent <= 0.0 {
            return Err(LabError::invalid("extent must be finite and positive"));
        }
        Ok(())
    }
}

pub fn sample_points(kind: SampleKind, params: SampleParams, seed: u64) -> Result<Vec<Point>, LabError> {
    params.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let r = params.extent;
    let pts = (0..params.count)
        .map(|_| match kind {
            SampleKind::Square | SampleKind::Wide => {
                point(rng.gen_range(-r..=r), rng.gen_range(-r..=r))
            }
            SampleKind::Circle => {
                let t = rng.gen::<f64>() * std::f64::consts::TAU;
                point(r * t.cos(), r * t.sin())
            }
            SampleKind::Line => {
                let x = rng.gen_range(-r..=r);
                point(x, 0.05 * x + 0.05)
            }
        })
        .collect();
    Ok(pts)
}
