//! Portable scene records (lossy: styles are not persisted).
//!
//! Format: a JSON list with one record per scene,
//! `{"points": [[[x, y], ...], ...], "lines": [[[[x1, y1], [x2, y2]], ...], ...]}`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PointSet, Scene, SegmentSet};
use crate::geom::{point, Point, Segment};

/// Malformed persisted data. No partial scene list is ever produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneDataError {
    MalformedSceneData { reason: String },
}

impl SceneDataError {
    fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedSceneData {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SceneDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedSceneData { reason } => write!(f, "malformed scene data: {reason}"),
        }
    }
}

impl std::error::Error for SceneDataError {}

/// One persisted scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortableScene {
    pub points: Vec<Vec<[f64; 2]>>,
    pub lines: Vec<Vec<[[f64; 2]; 2]>>,
}

pub fn to_portable(scenes: &[Scene]) -> Vec<PortableScene> {
    scenes
        .iter()
        .map(|scene| PortableScene {
            points: scene
                .points
                .iter()
                .map(|c| c.points().iter().map(|p| [p.x, p.y]).collect())
                .collect(),
            lines: scene
                .lines
                .iter()
                .map(|c| c.as_batch().iter().map(Segment::to_array).collect())
                .collect(),
        })
        .collect()
}

pub fn from_portable(records: Vec<PortableScene>) -> Vec<Scene> {
    records
        .into_iter()
        .map(|rec| Scene {
            points: rec
                .points
                .into_iter()
                .map(|col| PointSet::new(col.into_iter().map(|[x, y]| point(x, y)).collect()))
                .collect(),
            lines: rec
                .lines
                .into_iter()
                .map(|col| SegmentSet::new(col.into_iter().map(Segment::from_array).collect()))
                .collect(),
        })
        .collect()
}

/// Serialize a scene list. JSON has no NaN or infinity, so any non-finite
/// coordinate is refused rather than written as `null`.
pub fn scenes_to_json(scenes: &[Scene]) -> Result<String, SceneDataError> {
    check_finite(scenes)?;
    serde_json::to_string(&to_portable(scenes)).map_err(|e| SceneDataError::malformed(e.to_string()))
}

fn check_finite(scenes: &[Scene]) -> Result<(), SceneDataError> {
    let finite = |p: &Point| p.x.is_finite() && p.y.is_finite();
    for (i, scene) in scenes.iter().enumerate() {
        if let Some(k) = scene
            .points
            .iter()
            .position(|c| !c.points().iter().all(finite))
        {
            return Err(SceneDataError::malformed(format!(
                "scene {i}, point collection {k}: non-finite coordinate"
            )));
        }
        if let Some(k) = scene.lines.iter().position(|c| {
            !c.as_batch()
                .iter()
                .all(|s| finite(&s.start) && finite(&s.end))
        }) {
            return Err(SceneDataError::malformed(format!(
                "scene {i}, line collection {k}: non-finite coordinate"
            )));
        }
    }
    Ok(())
}

/// Parse a persisted scene list. Fails on missing `points`/`lines` keys,
/// non-numeric coordinates, or pairs of the wrong arity.
pub fn scenes_from_json(data: &str) -> Result<Vec<Scene>, SceneDataError> {
    let records: Vec<PortableScene> =
        serde_json::from_str(data).map_err(|e| SceneDataError::malformed(e.to_string()))?;
    Ok(from_portable(records))
}
