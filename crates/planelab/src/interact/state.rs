use serde::{Deserialize, Serialize};

use crate::cfg::CLOSE_TOLERANCE;
use crate::geom::{Point, Segment, Viewport};
use crate::scene::{PointSet, Scene, SegmentSet};

/// Authoring mode a control toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    Points,
    Segments,
    Polygon,
}

/// Current authoring mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    None,
    AddingPoints,
    AddingSegments,
    AddingPolygon,
}

impl From<ModeKind> for Mode {
    fn from(kind: ModeKind) -> Self {
        match kind {
            ModeKind::Points => Mode::AddingPoints,
            ModeKind::Segments => Mode::AddingSegments,
            ModeKind::Polygon => Mode::AddingPolygon,
        }
    }
}

/// What a click did to the state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickOutcome {
    /// No mode active.
    Ignored,
    PointAdded(Point),
    SegmentStarted(Point),
    SegmentCommitted(Segment),
    PolygonStarted(Point),
    PolygonEdge(Segment),
    /// Closing edge `(last, first)`; a new empty polygon container was started.
    PolygonClosed(Segment),
}

#[derive(Clone, Debug)]
pub struct InteractionState {
    mode: Mode,
    pending_segment_start: Option<Point>,
    pending_polygon: Vec<Point>,
    captured_points: Vec<PointSet>,
    captured_segments: Vec<SegmentSet>,
    captured_polygons: Vec<SegmentSet>,
    close_tolerance: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(CLOSE_TOLERANCE)
    }
}

impl InteractionState {
    pub fn new(close_tolerance: f64) -> Self {
        Self {
            mode: Mode::None,
            pending_segment_start: None,
            pending_polygon: Vec::new(),
            captured_points: Vec::new(),
            captured_segments: Vec::new(),
            captured_polygons: Vec::new(),
            close_tolerance,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }
    #[inline]
    pub fn pending_segment_start(&self) -> Option<Point> {
        self.pending_segment_start
    }
    #[inline]
    pub fn pending_polygon(&self) -> &[Point] {
        &self.pending_polygon
    }
    #[inline]
    pub fn captured_points(&self) -> &[PointSet] {
        &self.captured_points
    }
    #[inline]
    pub fn captured_segments(&self) -> &[SegmentSet] {
        &self.captured_segments
    }
    #[inline]
    pub fn captured_polygons(&self) -> &[SegmentSet] {
        &self.captured_polygons
    }
    #[inline]
    pub fn close_tolerance(&self) -> f64 {
        self.close_tolerance
    }

    /// Captured overlays as one scene: points, then segments followed by polygons.
    pub fn captured_scene(&self) -> Scene {
        let lines = self
            .captured_segments
            .iter()
            .chain(self.captured_polygons.iter())
            .cloned()
            .collect();
        Scene::new(self.captured_points.clone(), lines)
    }

    /// Switch to `target`, or back to `Mode::None` if it is already active.
    /// Returns the resulting mode.
    pub fn toggle_mode(&mut self, target: ModeKind) -> Mode {
        self.pending_segment_start = None;
        self.pending_polygon.clear();
        let target = Mode::from(target);
        if self.mode == target {
            self.mode = Mode::None;
            tracing::debug!(mode = ?target, "authoring mode off");
            return self.mode;
        }
        self.mode = target;
        match target {
            Mode::AddingPoints => self.captured_points.push(PointSet::default()),
            Mode::AddingSegments => self.captured_segments.push(SegmentSet::default()),
            Mode::AddingPolygon => self.captured_polygons.push(SegmentSet::default()),
            Mode::None => {}
        }
        tracing::debug!(mode = ?target, "authoring mode on");
        self.mode
    }

    /// Apply one click in data coordinates. `viewport` is the currently
    /// displayed range; it only matters when closing a polygon.
    pub fn handle_click(&mut self, p: Point, viewport: &Viewport) -> ClickOutcome {
        match self.mode {
            Mode::None => ClickOutcome::Ignored,
            Mode::AddingPoints => {
                last_or_new(&mut self.captured_points).add_point(p);
                ClickOutcome::PointAdded(p)
            }
            Mode::AddingSegments => match self.pending_segment_start.take() {
                None => {
                    self.pending_segment_start = Some(p);
                    ClickOutcome::SegmentStarted(p)
                }
                Some(start) => {
                    let seg = Segment::new(start, p);
                    last_or_new(&mut self.captured_segments).add(seg);
                    ClickOutcome::SegmentCommitted(seg)
                }
            },
            Mode::AddingPolygon => self.polygon_click(p, viewport),
        }
    }

    fn polygon_click(&mut self, p: Point, viewport: &Viewport) -> ClickOutcome {
        let n = self.pending_polygon.len();
        if n == 0 {
            self.pending_polygon.push(p);
            return ClickOutcome::PolygonStarted(p);
        }
        let first = self.pending_polygon[0];
        let last = self.pending_polygon[n - 1];
        if n >= 2 {
            let threshold = viewport.mean_extent() * self.close_tolerance;
            if (p - first).norm() < threshold {
                let closing = Segment::new(last, first);
                last_or_new(&mut self.captured_polygons).add(closing);
                self.captured_polygons.push(SegmentSet::default());
                self.pending_polygon.clear();
                tracing::debug!(threshold, "polygon closed");
                return ClickOutcome::PolygonClosed(closing);
            }
        }
        let edge = Segment::new(last, p);
        last_or_new(&mut self.captured_polygons).add(edge);
        self.pending_polygon.push(p);
        ClickOutcome::PolygonEdge(edge)
    }
}

fn last_or_new<T: Default>(items: &mut Vec<T>) -> &mut T {
    if items.is_empty() {
        items.push(T::default());
    }
    let n = items.len();
    &mut items[n - 1]
}
