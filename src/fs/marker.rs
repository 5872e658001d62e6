//! Merge-conflict marker file
//!
//! When a publish attempt leaves a merge conflict unresolved, the target
//! branch name is recorded under the git metadata directory. Presence of the
//! file blocks subsequent publish attempts; it is cleared once the tree is
//! clean again. Presence/absence is the entire contract.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn marker_path(repo_root: &Path) -> PathBuf {
    repo_root.join(".git").join(".branchflow").join("MERGE_BASE")
}

pub fn exists(repo_root: &Path) -> bool {
    marker_path(repo_root).is_file()
}

/// The recorded merge-target branch name, if a marker is present.
pub fn read(repo_root: &Path) -> io::Result<Option<String>> {
    let path = marker_path(repo_root);
    if !path.is_file() {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(path)?.trim().to_string()))
}

pub fn write(repo_root: &Path, target_branch: &str) -> io::Result<()> {
    let path = marker_path(repo_root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, target_branch)
}

pub fn clear(repo_root: &Path) -> io::Result<()> {
    let path = marker_path(repo_root);
    if path.is_file() {
        fs::remove_file(path)?;
    }
    Ok(())
}
