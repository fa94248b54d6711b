//! `cli render` and `cli session`: drive a `SceneBrowser` over a persisted
//! scene file with the SVG renderer.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use planelab::browser::{BrowserEvent, PlotCfg, SceneBrowser};
use planelab::render::SvgRenderer;
use planelab::scene::{scenes_from_json, scenes_to_json, Scene};

use crate::provenance::{write_sidecar, Payload};

fn load_scenes(path: &Path) -> Result<Vec<Scene>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let scenes = scenes_from_json(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(scenes)
}

fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

/// Write `scene_NNN.svg` for every scene, stepping through them with `next`.
pub fn render(input: &Path, out_dir: &Path, width: u32, height: u32) -> Result<Vec<PathBuf>> {
    let scenes = load_scenes(input)?;
    let n = scenes.len();
    let mut browser = SceneBrowser::new(scenes, SvgRenderer::new(width, height), PlotCfg::default())?;
    let mut written = Vec::with_capacity(n);
    for i in 0..n {
        let path = out_dir.join(format!("scene_{i:03}.svg"));
        write_file(&path, browser.renderer().to_svg())?;
        written.push(path);
        browser.next()?;
    }
    browser.close();
    tracing::info!(scenes = n, out = %out_dir.display(), "rendered");
    Ok(written)
}

pub struct SessionArgs {
    pub input: PathBuf,
    pub events: PathBuf,
    pub out: PathBuf,
    pub svg: Option<PathBuf>,
    pub close_tolerance: f64,
}

/// Replay an event script and persist what the user drew.
pub fn session(args: &SessionArgs) -> Result<Scene> {
    let scenes = load_scenes(&args.input)?;
    let text = fs::read_to_string(&args.events)
        .with_context(|| format!("reading {}", args.events.display()))?;
    let events: Vec<BrowserEvent> = serde_json::from_str(&text)
        .with_context(|| format!("parsing events {}", args.events.display()))?;

    let cfg = PlotCfg {
        close_tolerance: args.close_tolerance,
    };
    let mut browser = SceneBrowser::new(scenes, SvgRenderer::default(), cfg)?;
    for (i, ev) in events.into_iter().enumerate() {
        let label = format!("{ev:?}");
        browser
            .dispatch(ev)
            .with_context(|| format!("event #{i} ({label})"))?;
    }

    let captured = browser.captured_scene();
    write_file(&args.out, scenes_to_json(std::slice::from_ref(&captured))?)?;
    if let Some(svg) = &args.svg {
        write_file(svg, browser.renderer().to_svg())?;
    }
    browser.close();
    write_sidecar(
        &args.out,
        Payload::new(serde_json::json!({ "close_tolerance": args.close_tolerance }))
            .with_input(&args.input)
            .with_input(&args.events),
    )?;
    tracing::info!(
        points = captured.points.len(),
        lines = captured.lines.len(),
        "session captured"
    );
    Ok(captured)
}
