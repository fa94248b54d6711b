//! Fixed defaults (internal).
//!
//! Policy
//! - Defaults are constants; callers override them through `PlotCfg` / `LabCfg`
//!   rather than by touching these values.

/// Fraction of the mean viewport extent within which a click closes a polygon.
pub(crate) const CLOSE_TOLERANCE: f64 = 0.15;
/// Relative padding added on each side when a renderer fits its data.
pub(crate) const AUTOSCALE_MARGIN: f64 = 0.05;
/// Half-width used when fitting a degenerate (zero-extent) axis.
pub(crate) const DEGENERATE_HALF_EXTENT: f64 = 0.5;
/// Collinearity tolerances swept by the orientation lab.
pub(crate) const EPSILONS: [f64; 5] = [1e-5, 1e-8, 1e-10, 1e-12, 1e-18];
