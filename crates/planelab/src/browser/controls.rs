use serde::{Deserialize, Serialize};

use crate::geom::Viewport;
use crate::interact::ModeKind;

/// The five operations exposed to the control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Previous,
    Next,
    AddPoint,
    AddSegment,
    AddPolygon,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Previous,
        Control::Next,
        Control::AddPoint,
        Control::AddSegment,
        Control::AddPolygon,
    ];

    /// Authoring mode toggled by this control, if any.
    pub fn mode(self) -> Option<ModeKind> {
        match self {
            Control::AddPoint => Some(ModeKind::Points),
            Control::AddSegment => Some(ModeKind::Segments),
            Control::AddPolygon => Some(ModeKind::Polygon),
            Control::Previous | Control::Next => None,
        }
    }
}

/// One button: label plus figure-relative area `[left, bottom, width, height]`.
#[derive(Clone, Debug, PartialEq)]
struct ControlBinding {
    control: Control,
    label: &'static str,
    area: [f64; 4],
}

impl ControlBinding {
    fn contains(&self, fx: f64, fy: f64) -> bool {
        let [l, b, w, h] = self.area;
        fx >= l && fx <= l + w && fy >= b && fy <= b + h
    }
}

/// Button row below the plotting area. Owned by the browser for the whole
/// session; dropping it ends event delivery.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlSurface {
    bindings: Vec<ControlBinding>,
}

impl Default for ControlSurface {
    fn default() -> Self {
        Self::standard()
    }
}

impl ControlSurface {
    pub fn standard() -> Self {
        let row = |left: f64| [left, 0.05, 0.15, 0.075];
        let bindings = vec![
            ControlBinding {
                control: Control::AddPolygon,
                label: "Add polygon",
                area: row(0.12),
            },
            ControlBinding {
                control: Control::AddSegment,
                label: "Add segment",
                area: row(0.28),
            },
            ControlBinding {
                control: Control::AddPoint,
                label: "Add point",
                area: row(0.44),
            },
            ControlBinding {
                control: Control::Previous,
                label: "Previous",
                area: row(0.60),
            },
            ControlBinding {
                control: Control::Next,
                label: "Next",
                area: row(0.76),
            },
        ];
        Self { bindings }
    }

    pub fn label(&self, control: Control) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|b| b.control == control)
            .map(|b| b.label)
    }

    /// Control under a figure-relative position (`[0, 1]²`, origin bottom-left).
    pub fn hit_test(&self, fx: f64, fy: f64) -> Option<Control> {
        self.bindings
            .iter()
            .find(|b| b.contains(fx, fy))
            .map(|b| b.control)
    }
}

fn inside_default() -> bool {
    true
}

/// A click from the plotting surface, in data coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub x: f64,
    pub y: f64,
    /// Whether the click landed on the active plotting area.
    #[serde(default = "inside_default")]
    pub inside: bool,
}

impl ClickEvent {
    pub fn inside(x: f64, y: f64) -> Self {
        Self { x, y, inside: true }
    }
    pub fn outside(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            inside: false,
        }
    }
}

/// A press on the figure, in figure-relative coordinates (`[0, 1]²`, origin
/// bottom-left). Resolved to a control through `ControlSurface::hit_test`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ButtonPress {
    pub fx: f64,
    pub fy: f64,
}

/// Serialized session input, replayed in order by `SceneBrowser::dispatch`.
///
/// JSON: `{"control": "next"}`, `{"button": {"fx": 0.8, "fy": 0.08}}`,
/// `{"click": {"x": 0.5, "y": 1.0}}`, `{"view": {"x": [-1, 1], "y": [-1, 1]}}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrowserEvent {
    Control(Control),
    Button(ButtonPress),
    Click(ClickEvent),
    /// User pan/zoom of the plotting surface.
    View(Viewport),
}
