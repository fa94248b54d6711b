//! Provenance sidecars: every artifact the CLI writes gets a
//! `<stem>.provenance.json` next to it.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Caller-supplied part of a sidecar.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<PathBuf>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: impl AsRef<Path>) -> Self {
        self.inputs.push(input.as_ref().to_path_buf());
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    params: &'a Value,
    inputs: &'a [PathBuf],
    outputs: [&'a Path; 1],
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let caller = Location::caller();
    let artifact = artifact.as_ref();
    let sidecar = Sidecar {
        code_rev: current_git_rev(),
        version: planelab::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        params: &payload.params,
        inputs: &payload.inputs,
        outputs: [artifact],
    };
    let path = provenance_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance written");
    Ok(path)
}

/// `dir/square.scenes.json` -> `dir/square.provenance.json`. Leading dots
/// belong to the stem, so `dir/.points.csv` -> `dir/.points.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let name = artifact
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let lead = name.len() - name.trim_start_matches('.').len();
    let stem_end = name[lead..].find('.').map_or(name.len(), |i| lead + i);
    artifact.with_file_name(format!("{}.provenance.json", &name[..stem_end]))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`,
/// else `"unknown"`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
