use super::{RenderError, Renderer};
use crate::cfg::AUTOSCALE_MARGIN;
use crate::geom::{Point, Segment, Style, Viewport};

/// Draw calls recorded since the last `clear`, in call order per kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub points: Vec<(Vec<Point>, Style)>,
    pub segments: Vec<(Vec<Segment>, Style)>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.segments.is_empty()
    }

    fn data(&self) -> impl Iterator<Item = Point> + '_ {
        let pts = self.points.iter().flat_map(|(p, _)| p.iter().copied());
        let ends = self
            .segments
            .iter()
            .flat_map(|(s, _)| s.iter().flat_map(|s| [s.start, s.end]));
        pts.chain(ends)
    }
}

/// In-memory renderer.
#[derive(Clone, Debug)]
pub struct Canvas {
    frame: Frame,
    viewport: Viewport,
    margin: f64,
    presented: usize,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(AUTOSCALE_MARGIN)
    }
}

impl Canvas {
    pub fn new(margin: f64) -> Self {
        Self {
            frame: Frame::default(),
            viewport: Viewport::default(),
            margin,
            presented: 0,
        }
    }
    #[inline]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }
    /// Number of `present` calls so far.
    #[inline]
    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl Renderer for Canvas {
    fn clear(&mut self) {
        self.frame = Frame::default();
    }

    fn draw_points(&mut self, points: &[Point], style: &Style) -> Result<(), RenderError> {
        self.frame.points.push((points.to_vec(), style.clone()));
        Ok(())
    }

    fn draw_segments(&mut self, segments: &[Segment], style: &Style) -> Result<(), RenderError> {
        self.frame.segments.push((segments.to_vec(), style.clone()));
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn autoscale(&mut self) {
        // An empty frame keeps the current view.
        if let Some(vp) = Viewport::fit(self.frame.data(), self.margin) {
            self.viewport = vp;
        }
    }

    fn present(&mut self) {
        self.presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;

    #[test]
    fn autoscale_fits_drawn_data() {
        let mut c = Canvas::new(0.0);
        c.draw_points(&[point(-2.0, 1.0), point(4.0, 3.0)], &Style::new())
            .unwrap();
        c.draw_segments(
            &[Segment::new(point(0.0, -5.0), point(1.0, 0.0))],
            &Style::new(),
        )
        .unwrap();
        c.autoscale();
        assert_eq!(c.viewport(), Viewport::new((-2.0, 4.0), (-5.0, 3.0)));
    }

    #[test]
    fn clear_keeps_viewport_and_empty_autoscale_is_noop() {
        let mut c = Canvas::default();
        let vp = Viewport::new((10.0, 20.0), (-1.0, 1.0));
        c.set_viewport(vp);
        c.draw_points(&[point(0.0, 0.0)], &Style::new()).unwrap();
        c.clear();
        assert!(c.frame().is_empty());
        c.autoscale();
        assert_eq!(c.viewport(), vp);
    }
}
