use nalgebra::{Matrix2, Matrix3};
use serde::{Deserialize, Serialize};

use crate::geom::Point;

/// Orientation test formulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Determinant {
    /// `(a - c) × (b - c)` expanded by hand.
    Det2x2,
    /// Same 2×2 matrix through `Matrix2::determinant`.
    LibDet2x2,
    /// `|a 1; b 1; c 1|` expanded by hand (Sarrus).
    Det3x3,
    /// Same 3×3 matrix through `Matrix3::determinant`.
    LibDet3x3,
}

impl Determinant {
    pub const ALL: [Determinant; 4] = [
        Determinant::Det2x2,
        Determinant::LibDet2x2,
        Determinant::Det3x3,
        Determinant::LibDet3x3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Determinant::Det2x2 => "DET2X2",
            Determinant::LibDet2x2 => "LIB_DET2X2",
            Determinant::Det3x3 => "DET3X3",
            Determinant::LibDet3x3 => "LIB_DET3X3",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Determinant::Det2x2 => 0,
            Determinant::LibDet2x2 => 1,
            Determinant::Det3x3 => 2,
            Determinant::LibDet3x3 => 3,
        }
    }

    /// Signed orientation of `c` relative to the directed line `a → b`
    /// (positive on the left).
    pub fn eval(self, a: Point, b: Point, c: Point) -> f64 {
        match self {
            Determinant::Det2x2 => (a.x - c.x) * (b.y - c.y) - (a.y - c.y) * (b.x - c.x),
            Determinant::LibDet2x2 => {
                Matrix2::new(a.x - c.x, a.y - c.y, b.x - c.x, b.y - c.y).determinant()
            }
            Determinant::Det3x3 => {
                a.x * b.y + a.y * c.x + b.x * c.y - c.x * b.y - b.x * a.y - a.x * c.y
            }
            Determinant::LibDet3x3 => {
                Matrix3::new(a.x, a.y, 1.0, b.x, b.y, 1.0, c.x, c.y, 1.0).determinant()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
    Collinear,
}

impl Side {
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
            Side::Collinear => 2,
        }
    }
}

/// Classify a determinant value under tolerance `eps`.
#[inline]
pub fn classify(det: f64, eps: f64) -> Side {
    if det.abs() < eps {
        Side::Collinear
    } else if det > 0.0 {
        Side::Left
    } else {
        Side::Right
    }
}
