//! Display data: point/segment collections and scenes.
//!
//! A collection's style is fixed when it is built; geometry may only grow.
//! Scenes are plain value containers; the browser treats them as read-only.

mod portable;

pub use portable::{
    from_portable, scenes_from_json, scenes_to_json, to_portable, PortableScene, SceneDataError,
};

use crate::geom::{Point, Segment, Style};

/// Points drawn with one shared style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
    style: Style,
}

impl PointSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self::styled(points, Style::new())
    }
    pub fn styled(points: Vec<Point>, style: Style) -> Self {
        Self { points, style }
    }
    #[inline]
    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
    }
    pub fn add_points<I: IntoIterator<Item = Point>>(&mut self, points: I) {
        self.points.extend(points);
    }
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Segments drawn with one shared style, rendered as a single batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentSet {
    segments: Vec<Segment>,
    style: Style,
}

impl SegmentSet {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self::styled(segments, Style::new())
    }
    pub fn styled(segments: Vec<Segment>, style: Style) -> Self {
        Self { segments, style }
    }
    #[inline]
    pub fn add(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
    pub fn extend<I: IntoIterator<Item = Segment>>(&mut self, segments: I) {
        self.segments.extend(segments);
    }
    /// The renderable batch.
    #[inline]
    pub fn as_batch(&self) -> &[Segment] {
        &self.segments
    }
    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Everything visible in one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub points: Vec<PointSet>,
    pub lines: Vec<SegmentSet>,
}

impl Scene {
    pub fn new(points: Vec<PointSet>, lines: Vec<SegmentSet>) -> Self {
        Self { points, lines }
    }

    pub fn is_empty(&self) -> bool {
        self.points.iter().all(PointSet::is_empty) && self.lines.iter().all(SegmentSet::is_empty)
    }
}
