use std::fmt::Write as _;

use serde_json::Value;

use super::{Canvas, RenderError, Renderer};
use crate::geom::{Point, Segment, Style, Viewport};

/// Default colors, cycled per collection when a style has no `color`.
const PALETTE: [&str; 6] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];
const DEFAULT_POINT_RADIUS: f64 = 2.5;
const DEFAULT_LINE_WIDTH: f64 = 1.5;

/// `Canvas` plus SVG export of the current frame.
///
/// Style keys read here: `color` (string), `size` (point radius, px) and
/// `width` (stroke width, px). Other keys are carried but ignored.
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    canvas: Canvas,
    width: u32,
    height: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: Canvas::default(),
            width: width.max(1),
            height: height.max(1),
        }
    }

    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Render the current frame in the current viewport.
    pub fn to_svg(&self) -> String {
        let (w, h) = (self.width as f64, self.height as f64);
        let vp = self.canvas.viewport();
        let map = |p: Point| to_pixels(p, &vp, w, h);
        let frame = self.canvas.frame();
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{1}" viewBox="0 0 {0} {1}" overflow="hidden">"#,
            self.width, self.height
        );
        let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#);
        for (k, (segments, style)) in frame.segments.iter().enumerate() {
            let color = color_of(style, k);
            let width = number_of(style, "width").unwrap_or(DEFAULT_LINE_WIDTH);
            let _ = writeln!(out, r#"<g stroke="{color}" stroke-width="{width}">"#);
            for s in segments {
                let (a, b) = (map(s.start), map(s.end));
                let _ = writeln!(
                    out,
                    r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                    a.0, a.1, b.0, b.1
                );
            }
            let _ = writeln!(out, "</g>");
        }
        for (k, (points, style)) in frame.points.iter().enumerate() {
            let color = color_of(style, k);
            let r = number_of(style, "size").unwrap_or(DEFAULT_POINT_RADIUS);
            let _ = writeln!(out, r#"<g fill="{color}">"#);
            for &p in points {
                let (x, y) = map(p);
                let _ = writeln!(out, r#"<circle cx="{x:.2}" cy="{y:.2}" r="{r}"/>"#);
            }
            let _ = writeln!(out, "</g>");
        }
        out.push_str("</svg>\n");
        out
    }
}

fn to_pixels(p: Point, vp: &Viewport, w: f64, h: f64) -> (f64, f64) {
    let sx = (p.x - vp.x.0) / (vp.x.1 - vp.x.0);
    let sy = (p.y - vp.y.0) / (vp.y.1 - vp.y.0);
    (sx * w, h - sy * h)
}

fn color_of(style: &Style, index: usize) -> &str {
    match style.get("color") {
        Some(Value::String(s)) => s.as_str(),
        _ => PALETTE[index % PALETTE.len()],
    }
}

fn number_of(style: &Style, key: &str) -> Option<f64> {
    style.get(key).and_then(Value::as_f64)
}

/// Reject style values this exporter cannot place into SVG attributes.
fn check_style(style: &Style) -> Result<(), RenderError> {
    if let Some(v) = style.get("color") {
        let ok = v.as_str().is_some_and(|s| {
            !s.is_empty()
                && s.chars()
                    .all(|c| c.is_ascii_alphanumeric() || "#(),.% ".contains(c))
        });
        if !ok {
            return Err(RenderError::Unsupported {
                what: format!("color {v}"),
            });
        }
    }
    for key in ["size", "width"] {
        if let Some(v) = style.get(key) {
            match v.as_f64() {
                Some(x) if x.is_finite() && x >= 0.0 => {}
                _ => {
                    return Err(RenderError::Unsupported {
                        what: format!("{key} {v}"),
                    })
                }
            }
        }
    }
    Ok(())
}

impl Renderer for SvgRenderer {
    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn draw_points(&mut self, points: &[Point], style: &Style) -> Result<(), RenderError> {
        check_style(style)?;
        self.canvas.draw_points(points, style)
    }

    fn draw_segments(&mut self, segments: &[Segment], style: &Style) -> Result<(), RenderError> {
        check_style(style)?;
        self.canvas.draw_segments(segments, style)
    }

    fn viewport(&self) -> Viewport {
        self.canvas.viewport()
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.canvas.set_viewport(viewport);
    }

    fn autoscale(&mut self) {
        self.canvas.autoscale();
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;

    #[test]
    fn maps_viewport_corners_to_pixel_corners() {
        let vp = Viewport::new((0.0, 10.0), (0.0, 5.0));
        assert_eq!(to_pixels(point(0.0, 0.0), &vp, 100.0, 50.0), (0.0, 50.0));
        assert_eq!(to_pixels(point(10.0, 5.0), &vp, 100.0, 50.0), (100.0, 0.0));
    }

    #[test]
    fn exports_styled_points_and_lines() {
        let mut r = SvgRenderer::new(100, 100);
        r.set_viewport(Viewport::new((0.0, 1.0), (0.0, 1.0)));
        let red = Style::new().with("color", "red").unwrap();
        r.draw_points(&[point(0.5, 0.5)], &red).unwrap();
        r.draw_segments(
            &[Segment::new(point(0.0, 0.0), point(1.0, 1.0))],
            &Style::new(),
        )
        .unwrap();
        let svg = r.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"<g fill="red">"#));
        assert!(svg.contains(r#"<circle cx="50.00" cy="50.00" r="2.5"/>"#));
        assert!(svg.contains(r#"<line x1="0.00" y1="100.00" x2="100.00" y2="0.00"/>"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn rejects_unusable_style_without_recording() {
        let mut r = SvgRenderer::default();
        let bad = Style::new().with("color", "\"><script>").unwrap();
        assert!(r.draw_points(&[point(0.0, 0.0)], &bad).is_err());
        let neg = Style::new().with("size", -1.0).unwrap();
        assert!(r.draw_points(&[point(0.0, 0.0)], &neg).is_err());
        assert!(r.canvas().frame().is_empty());
    }
}
