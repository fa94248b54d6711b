//! `cli lab`: sample (or load) points, run the tolerance sweep, print the
//! tables and write the result scenes.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use planelab::geom::{point, Point};
use planelab::lab::{
    classification_scene, discrepancy_scene, format_table, sample_points, Determinant, LabCfg,
    SampleKind, SampleParams, Sweep,
};
use planelab::scene::scenes_to_json;

use crate::provenance::{write_sidecar, Payload};

pub struct LabArgs {
    pub kind: SampleKind,
    pub count: Option<usize>,
    pub seed: u64,
    pub eps_index: usize,
    pub input: Option<PathBuf>,
    pub out: PathBuf,
}

/// Formulation pairs whose disagreements are reported.
const COMPARED: [(Determinant, Determinant); 2] = [
    (Determinant::Det2x2, Determinant::LibDet2x2),
    (Determinant::Det3x3, Determinant::LibDet3x3),
];

#[derive(Debug, Serialize)]
pub struct LabSummary {
    pub points: usize,
    pub epsilon: f64,
    pub scenes: PathBuf,
    pub counts: PathBuf,
    /// `(a, b, disagreeing points)`
    pub discrepancies: Vec<(Determinant, Determinant, usize)>,
}

pub fn run(args: &LabArgs) -> Result<LabSummary> {
    let cfg = LabCfg::default();
    if args.eps_index >= cfg.epsilons.len() {
        bail!(
            "eps-index {} out of range (0..{})",
            args.eps_index,
            cfg.epsilons.len()
        );
    }
    let (points, stem) = match &args.input {
        Some(path) => (read_points_csv(path)?, file_stem(path)),
        None => {
            let mut params = args.kind.default_params();
            if let Some(count) = args.count {
                params = SampleParams { count, ..params };
            }
            let pts = sample_points(args.kind, params, args.seed)?;
            (pts, args.kind.name().to_string())
        }
    };
    tracing::info!(points = points.len(), stem, "lab input ready");

    let sweep = Sweep::run(points, &cfg);
    for det in Determinant::ALL {
        println!("{}", format_table(&sweep, det));
    }

    let mut scenes: Vec<_> = Determinant::ALL
        .iter()
        .map(|&det| classification_scene(&sweep, det, args.eps_index))
        .collect();
    let mut discrepancies = Vec::new();
    for (a, b) in COMPARED {
        let diff = sweep.discrepancies(a, b, args.eps_index);
        println!(
            "{} vs {}: {} points classified differently",
            a.name(),
            b.name(),
            diff.len()
        );
        discrepancies.push((a, b, diff.len()));
        scenes.push(discrepancy_scene(diff));
    }

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output dir {}", args.out.display()))?;
    let scenes_path = args.out.join(format!("{stem}.scenes.json"));
    fs::write(&scenes_path, scenes_to_json(&scenes)?)
        .with_context(|| format!("writing {}", scenes_path.display()))?;
    let counts_path = args.out.join(format!("{stem}.counts.csv"));
    write_counts_csv(&sweep, &counts_path)?;

    let mut payload = Payload::new(serde_json::json!({
        "kind": args.kind.name(),
        "seed": args.seed,
        "count": sweep.points().len(),
        "eps_index": args.eps_index,
        "epsilons": cfg.epsilons,
        "line": [[cfg.a.x, cfg.a.y], [cfg.b.x, cfg.b.y]],
    }));
    if let Some(input) = &args.input {
        payload = payload.with_input(input);
    }
    write_sidecar(&scenes_path, payload)?;

    Ok(LabSummary {
        points: sweep.points().len(),
        epsilon: cfg.epsilons[args.eps_index],
        scenes: scenes_path,
        counts: counts_path,
        discrepancies,
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "points".to_string())
}

/// Points from a CSV with numeric `x` and `y` columns. Empty or non-finite
/// cells are an error.
pub fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let x = df.column("x")?.cast(&DataType::Float64)?;
    let y = df.column("y")?.cast(&DataType::Float64)?;
    x.f64()?
        .into_iter()
        .zip(y.f64()?.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Ok(point(x, y)),
            _ => Err(anyhow!(
                "{}: row {row} has a missing or non-finite coordinate",
                path.display()
            )),
        })
        .collect()
}

/// One row per (determinant, epsilon) with the side counts.
fn write_counts_csv(sweep: &Sweep, path: &Path) -> Result<()> {
    let mut dets = Vec::new();
    let mut eps = Vec::new();
    let (mut left, mut right, mut collinear) = (Vec::new(), Vec::new(), Vec::new());
    for det in Determinant::ALL {
        for (i, &e) in sweep.epsilons().iter().enumerate() {
            let c = sweep.counts(det, i);
            dets.push(det.name());
            eps.push(e);
            left.push(c.left as u64);
            right.push(c.right as u64);
            collinear.push(c.collinear as u64);
        }
    }
    let mut df = df!(
        "determinant" => dets,
        "epsilon" => eps,
        "left" => left,
        "right" => right,
        "collinear" => collinear
    )?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}
