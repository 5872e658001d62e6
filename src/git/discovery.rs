//! Locating the git executable
//!
//! An optional path hint is probed first; on failure we fall back to a PATH
//! lookup. The result carries the executable path and its parsed version.

use std::path::Path;

use anyhow::{bail, Context, Result};
use std::process::Command;

use super::runner::GitBinary;

/// Strip the `git version ` prefix from `git --version` output.
fn parse_version(raw: &str) -> String {
    raw.trim()
        .strip_prefix("git version ")
        .unwrap_or(raw.trim())
        .to_string()
}

/// Probe a specific executable by asking it for its version.
fn probe(path: &Path) -> Result<GitBinary> {
    let output = Command::new(path)
        .arg("--version")
        .output()
        .with_context(|| format!("failed to execute {}", path.display()))?;
    if !output.status.success() {
        bail!("{} is not a usable git executable", path.display());
    }
    let version = parse_version(&String::from_utf8_lossy(&output.stdout));
    Ok(GitBinary {
        path: path.to_path_buf(),
        version,
    })
}

/// Locate a git executable, preferring the given hint.
pub fn find_git(hint: Option<&Path>) -> Result<GitBinary> {
    if let Some(path) = hint {
        if let Ok(binary) = probe(path) {
            return Ok(binary);
        }
    }
    let path = which::which("git").context("git executable not found on PATH")?;
    probe(&path)
}
