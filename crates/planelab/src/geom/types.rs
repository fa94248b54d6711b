use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cfg::DEGENERATE_HALF_EXTENT;

/// A point in data coordinates.
pub type Point = Vector2<f64>;

/// Shorthand constructor used throughout tests and callers.
#[inline]
pub fn point(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Straight segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
    /// Coordinates as `[[x1, y1], [x2, y2]]`.
    #[inline]
    pub fn to_array(&self) -> [[f64; 2]; 2] {
        [[self.start.x, self.start.y], [self.end.x, self.end.y]]
    }
    #[inline]
    pub fn from_array(a: [[f64; 2]; 2]) -> Self {
        Self::new(point(a[0][0], a[0][1]), point(a[1][0], a[1][1]))
    }
}

/// Visible data ranges `x = (lo, hi)`, `y = (lo, hi)`.
///
/// Ranges are stored as given; an inverted axis (`lo > hi`) is legal and keeps
/// a positive extent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: (0.0, 1.0),
            y: (0.0, 1.0),
        }
    }
}

impl Viewport {
    #[inline]
    pub const fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn x_extent(&self) -> f64 {
        (self.x.1 - self.x.0).abs()
    }
    #[inline]
    pub fn y_extent(&self) -> f64 {
        (self.y.1 - self.y.0).abs()
    }
    /// Mean of the two axis extents.
    #[inline]
    pub fn mean_extent(&self) -> f64 {
        0.5 * (self.x_extent() + self.y_extent())
    }
    pub fn contains(&self, p: Point) -> bool {
        let (x0, x1) = ordered(self.x);
        let (y0, y1) = ordered(self.y);
        p.x >= x0 && p.x <= x1 && p.y >= y0 && p.y <= y1
    }
    pub fn is_valid(&self) -> bool {
        [self.x.0, self.x.1, self.y.0, self.y.1]
            .iter()
            .all(|v| v.is_finite())
            && self.x_extent() > 0.0
            && self.y_extent() > 0.0
    }

    /// Bounding box of `points` padded by `margin` (fraction of the extent) on
    /// every side. Zero-extent axes are widened to a unit-wide range.
    /// Returns `None` when no finite point is given.
    pub fn fit<I>(points: I, margin: f64) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut lo = point(f64::INFINITY, f64::INFINITY);
        let mut hi = point(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut any = false;
        for p in points {
            if !(p.x.is_finite() && p.y.is_finite()) {
                continue;
            }
            lo = lo.inf(&p);
            hi = hi.sup(&p);
            any = true;
        }
        if !any {
            return None;
        }
        Some(Self {
            x: pad_axis(lo.x, hi.x, margin),
            y: pad_axis(lo.y, hi.y, margin),
        })
    }
}

#[inline]
fn ordered(r: (f64, f64)) -> (f64, f64) {
    if r.0 <= r.1 {
        r
    } else {
        (r.1, r.0)
    }
}

fn pad_axis(lo: f64, hi: f64, margin: f64) -> (f64, f64) {
    let extent = hi - lo;
    if extent <= 0.0 {
        return (lo - DEGENERATE_HALF_EXTENT, hi + DEGENERATE_HALF_EXTENT);
    }
    let pad = extent * margin.max(0.0);
    (lo - pad, hi + pad)
}
