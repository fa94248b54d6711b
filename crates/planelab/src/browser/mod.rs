//! Scene browser: the session object behind an interactive plot.
//!
//! Owns the scene list (never empty), the active index, the authoring
//! overlay, the renderer and the control surface. All mutation happens in
//! `&mut self` methods called once per UI event; there is no shared or global
//! drawing state.
//!
//! Viewport policy
//! - Navigation renders with autoscale (fit the new scene).
//! - Clicks render without autoscale: the viewport is captured before the
//!   frame is cleared and restored exactly afterwards.

mod controls;

pub use controls::{BrowserEvent, ButtonPress, ClickEvent, Control, ControlSurface};

use std::fmt;

use crate::cfg::CLOSE_TOLERANCE;
use crate::geom::{point, Viewport};
use crate::interact::{ClickOutcome, InteractionState, Mode, ModeKind};
use crate::render::Renderer;
use crate::scene::{to_portable, PointSet, PortableScene, Scene, SegmentSet};

/// Browser configuration.
#[derive(Clone, Copy, Debug)]
pub struct PlotCfg {
    /// Polygon closing distance as a fraction of the mean viewport extent.
    pub close_tolerance: f64,
}

impl Default for PlotCfg {
    fn default() -> Self {
        Self {
            close_tolerance: CLOSE_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlotError {
    /// A browser needs at least one scene.
    EmptySceneList,
    /// The control surface was released; the session no longer takes events.
    SessionClosed,
    /// A view range that is non-finite or has a zero-width axis.
    InvalidViewport(Viewport),
    /// Closing tolerance must be finite and non-negative.
    InvalidTolerance(f64),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySceneList => write!(f, "a scene browser needs at least one scene"),
            Self::SessionClosed => write!(f, "the plotting session is closed"),
            Self::InvalidViewport(vp) => {
                write!(f, "invalid viewport x={:?} y={:?}", vp.x, vp.y)
            }
            Self::InvalidTolerance(t) => write!(f, "invalid polygon close tolerance {t}"),
        }
    }
}

impl std::error::Error for PlotError {}

pub struct SceneBrowser<R: Renderer> {
    scenes: Vec<Scene>,
    active: usize,
    interaction: InteractionState,
    renderer: R,
    controls: Option<ControlSurface>,
}

impl<R: Renderer> SceneBrowser<R> {
    /// Open a session over `scenes` and draw the first one, autoscaled.
    pub fn new(scenes: Vec<Scene>, renderer: R, cfg: PlotCfg) -> Result<Self, PlotError> {
        if scenes.is_empty() {
            return Err(PlotError::EmptySceneList);
        }
        Self::open(scenes, renderer, cfg)
    }

    /// Session over a single scene built from loose collections.
    pub fn single(
        points: Vec<PointSet>,
        lines: Vec<SegmentSet>,
        renderer: R,
        cfg: PlotCfg,
    ) -> Result<Self, PlotError> {
        Self::open(vec![Scene::new(points, lines)], renderer, cfg)
    }

    fn open(scenes: Vec<Scene>, renderer: R, cfg: PlotCfg) -> Result<Self, PlotError> {
        let tol = cfg.close_tolerance;
        if !tol.is_finite() || tol < 0.0 {
            return Err(PlotError::InvalidTolerance(tol));
        }
        let mut browser = Self {
            scenes,
            active: 0,
            interaction: InteractionState::new(tol),
            renderer,
            controls: Some(ControlSurface::standard()),
        };
        tracing::debug!(scenes = browser.scenes.len(), "session opened");
        browser.render_frame(true);
        Ok(browser)
    }

    pub fn add_scene(&mut self, scene: Scene) {
        self.scenes.push(scene);
    }

    pub fn add_scenes<I: IntoIterator<Item = Scene>>(&mut self, scenes: I) {
        self.scenes.extend(scenes);
    }

    #[inline]
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }
    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }
    #[inline]
    pub fn active_scene(&self) -> &Scene {
        &self.scenes[self.active]
    }
    #[inline]
    pub fn mode(&self) -> Mode {
        self.interaction.mode()
    }
    #[inline]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }
    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.renderer.viewport()
    }
    #[inline]
    pub fn controls(&self) -> Option<&ControlSurface> {
        self.controls.as_ref()
    }
    #[inline]
    pub fn is_open(&self) -> bool {
        self.controls.is_some()
    }

    pub fn captured_points(&self) -> &[PointSet] {
        self.interaction.captured_points()
    }
    pub fn captured_segments(&self) -> &[SegmentSet] {
        self.interaction.captured_segments()
    }
    pub fn captured_polygons(&self) -> &[SegmentSet] {
        self.interaction.captured_polygons()
    }
    /// Everything drawn by the user as one scene.
    pub fn captured_scene(&self) -> Scene {
        self.interaction.captured_scene()
    }

    pub fn to_portable(&self) -> Vec<PortableScene> {
        to_portable(&self.scenes)
    }

    /// Release the control surface. Later events fail with `SessionClosed`.
    pub fn close(&mut self) {
        if self.controls.take().is_some() {
            tracing::debug!("session closed");
        }
    }

    /// Close the session and hand back the renderer.
    pub fn into_renderer(mut self) -> R {
        self.close();
        self.renderer
    }

    fn ensure_open(&self) -> Result<(), PlotError> {
        if self.controls.is_some() {
            Ok(())
        } else {
            Err(PlotError::SessionClosed)
        }
    }

    pub fn next(&mut self) -> Result<(), PlotError> {
        self.ensure_open()?;
        self.active = (self.active + 1) % self.scenes.len();
        tracing::debug!(active = self.active, "next scene");
        self.render_frame(true);
        Ok(())
    }

    pub fn previous(&mut self) -> Result<(), PlotError> {
        self.ensure_open()?;
        let n = self.scenes.len();
        self.active = (self.active + n - 1) % n;
        tracing::debug!(active = self.active, "previous scene");
        self.render_frame(true);
        Ok(())
    }

    pub fn toggle_mode(&mut self, kind: ModeKind) -> Result<Mode, PlotError> {
        self.ensure_open()?;
        Ok(self.interaction.toggle_mode(kind))
    }

    /// Entry point for the control surface.
    pub fn trigger(&mut self, control: Control) -> Result<(), PlotError> {
        match control {
            Control::Previous => self.previous(),
            Control::Next => self.next(),
            Control::AddPoint | Control::AddSegment | Control::AddPolygon => {
                if let Some(kind) = control.mode() {
                    self.toggle_mode(kind)?;
                }
                Ok(())
            }
        }
    }

    /// Route a click. Clicks outside the plotting area are dropped here and
    /// never reach the interaction state.
    pub fn on_click(&mut self, ev: ClickEvent) -> Result<ClickOutcome, PlotError> {
        self.ensure_open()?;
        if !ev.inside {
            tracing::trace!(x = ev.x, y = ev.y, "click outside plotting area");
            return Ok(ClickOutcome::Ignored);
        }
        let viewport = self.renderer.viewport();
        let outcome = self.interaction.handle_click(point(ev.x, ev.y), &viewport);
        tracing::debug!(?outcome, "click");
        self.render_frame(false);
        Ok(outcome)
    }

    /// User pan/zoom. The frame is kept; only the visible range changes.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), PlotError> {
        self.ensure_open()?;
        if !viewport.is_valid() {
            return Err(PlotError::InvalidViewport(viewport));
        }
        self.renderer.set_viewport(viewport);
        self.renderer.present();
        Ok(())
    }

    /// A press on the figure at a figure-relative position. Presses that miss
    /// every button do nothing.
    pub fn press(&mut self, at: ButtonPress) -> Result<Option<Control>, PlotError> {
        let Some(surface) = &self.controls else {
            return Err(PlotError::SessionClosed);
        };
        let control = surface.hit_test(at.fx, at.fy);
        if let Some(c) = control {
            tracing::debug!(label = surface.label(c).unwrap_or_default(), "button pressed");
            self.trigger(c)?;
        }
        Ok(control)
    }

    pub fn dispatch(&mut self, event: BrowserEvent) -> Result<(), PlotError> {
        match event {
            BrowserEvent::Control(c) => self.trigger(c),
            BrowserEvent::Button(at) => self.press(at).map(|_| ()),
            BrowserEvent::Click(ev) => self.on_click(ev).map(|_| ()),
            BrowserEvent::View(vp) => self.set_viewport(vp),
        }
    }

    /// Redraw the active scene merged with the authoring overlay.
    pub fn render_frame(&mut self, autoscale: bool) {
        let saved = if autoscale {
            None
        } else {
            Some(self.renderer.viewport())
        };
        self.renderer.clear();

        let scene = &self.scenes[self.active];
        for set in scene.points.iter().chain(self.interaction.captured_points()) {
            if set.is_empty() {
                continue;
            }
            if let Err(err) = self.renderer.draw_points(set.points(), set.style()) {
                tracing::warn!(%err, "skipping point collection");
            }
        }
        let overlays = self
            .interaction
            .captured_segments()
            .iter()
            .chain(self.interaction.captured_polygons());
        for set in scene.lines.iter().chain(overlays) {
            if set.is_empty() {
                continue;
            }
            if let Err(err) = self.renderer.draw_segments(set.as_batch(), set.style()) {
                tracing::warn!(%err, "skipping segment collection");
            }
        }

        match saved {
            Some(vp) => self.renderer.set_viewport(vp),
            None => self.renderer.autoscale(),
        }
        self.renderer.present();
    }
}
