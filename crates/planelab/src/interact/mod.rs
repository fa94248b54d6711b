//! Authoring state machine: point, segment and polygon capture.
//!
//! Invariants
//! - At most one mode is active; activating one replaces any other.
//! - Pending geometry (a segment's first click, an open polygon's vertices)
//!   never survives a mode change. Committed geometry is append-only.
//! - Every (re-)activation starts a fresh captured container; containers of
//!   the same kind are never merged.
//!
//! Polygon closing compares the click's distance to the first vertex against
//! `mean(viewport x extent, viewport y extent) * close_tolerance`, using the
//! viewport as currently displayed (zooming changes the sensitivity).

mod state;

pub use state::{ClickOutcome, InteractionState, Mode, ModeKind};

#[cfg(test)]
mod tests;
