use super::orient::{classify, Determinant, Side};
use super::LabCfg;
use crate::geom::Point;

/// Per-side totals for one (determinant, tolerance) cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub left: usize,
    pub right: usize,
    pub collinear: usize,
}

impl Counts {
    pub fn total(&self) -> usize {
        self.left + self.right + self.collinear
    }
}

/// Labels for every point under every determinant and tolerance.
///
/// Each determinant is evaluated once per point; the tolerance sweep reuses
/// that value.
#[derive(Clone, Debug)]
pub struct Sweep {
    points: Vec<Point>,
    epsilons: Vec<f64>,
    // [determinant][epsilon][point]
    labels: Vec<Vec<Vec<Side>>>,
}

impl Sweep {
    pub fn run(points: Vec<Point>, cfg: &LabCfg) -> Self {
        let labels: Vec<Vec<Vec<Side>>> = Determinant::ALL
            .iter()
            .map(|&det| {
                let values: Vec<f64> = points.iter().map(|&c| det.eval(cfg.a, cfg.b, c)).collect();
                cfg.epsilons
                    .iter()
                    .map(|&eps| values.iter().map(|&d| classify(d, eps)).collect())
                    .collect()
            })
            .collect();
        tracing::debug!(points = points.len(), epsilons = cfg.epsilons.len(), "sweep done");
        Self {
            points,
            epsilons: cfg.epsilons.clone(),
            labels,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn epsilons(&self) -> &[f64] {
        &self.epsilons
    }

    /// Labels in point order. Panics if `eps_index` is out of range.
    #[inline]
    pub fn labels(&self, det: Determinant, eps_index: usize) -> &[Side] {
        &self.labels[det.index()][eps_index]
    }

    pub fn counts(&self, det: Determinant, eps_index: usize) -> Counts {
        let mut c = Counts::default();
        for side in self.labels(det, eps_index) {
            match side {
                Side::Left => c.left += 1,
                Side::Right => c.right += 1,
                Side::Collinear => c.collinear += 1,
            }
        }
        c
    }

    /// Points partitioned as `[left, right, collinear]`.
    pub fn sides(&self, det: Determinant, eps_index: usize) -> [Vec<Point>; 3] {
        let mut out: [Vec<Point>; 3] = Default::default();
        for (&p, side) in self.points.iter().zip(self.labels(det, eps_index)) {
            out[side.index()].push(p);
        }
        out
    }

    /// Points that `a` and `b` label differently at the same tolerance.
    pub fn discrepancies(&self, a: Determinant, b: Determinant, eps_index: usize) -> Vec<Point> {
        self.points
            .iter()
            .zip(self.labels(a, eps_index).iter().zip(self.labels(b, eps_index)))
            .filter(|(_, (la, lb))| la != lb)
            .map(|(&p, _)| p)
            .collect()
    }
}
