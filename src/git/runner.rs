//! Git command runner abstraction
//!
//! Provides a `Git` handle that runs the located git executable against one
//! repository with consistent error handling. Every VCS access in the crate
//! funnels through here.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use thiserror::Error;
use tracing::debug;

/// Errors produced by the git subprocess layer.
#[derive(Debug, Error)]
pub enum GitError {
    /// The executable could not be spawned at all.
    #[error("failed to execute `git {command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A "must succeed" invocation exited non-zero.
    #[error("`git {command}` failed: {stderr}")]
    Command { command: String, stderr: String },

    /// HEAD does not point at a named branch.
    #[error("HEAD is not attached to a branch")]
    DetachedHead,
}

/// A located git executable and its self-reported version.
#[derive(Debug, Clone)]
pub struct GitBinary {
    pub path: PathBuf,
    pub version: String,
}

/// Handle to one repository through one located git executable.
///
/// Created once at startup and passed by reference to all collaborators;
/// there is no process-global executable state.
#[derive(Debug, Clone)]
pub struct Git {
    binary: GitBinary,
    repo_root: PathBuf,
}

impl Git {
    pub fn new(binary: GitBinary, repo_root: impl Into<PathBuf>) -> Self {
        Self {
            binary,
            repo_root: repo_root.into(),
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn version(&self) -> &str {
        &self.binary.version
    }

    /// Run a git command and return the raw Output ("probing" mode).
    ///
    /// A non-zero exit is not an error here; the caller inspects the status.
    /// Use this for checks like merge conflicts or ref existence where the
    /// exit code carries the answer.
    pub fn run(&self, args: &[&str]) -> Result<Output, GitError> {
        let output = Command::new(&self.binary.path)
            .args(args)
            .current_dir(&self.repo_root)
            .output()
            .map_err(|source| GitError::Spawn {
                command: args.join(" "),
                source,
            })?;
        debug!(
            command = args.join(" "),
            code = output.status.code(),
            "git invocation"
        );
        Ok(output)
    }

    /// Run a git command that must succeed and return stdout, trimmed
    /// ("required" mode).
    ///
    /// On a non-zero exit the whole operation fails with the stderr content.
    pub fn run_checked(&self, args: &[&str]) -> Result<String, GitError> {
        let output = self.run(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::Command {
                command: args.join(" "),
                stderr,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run a git command and return true iff it exited zero.
    ///
    /// Swallows spawn failures as well; use only for pure existence probes.
    pub fn run_bool(&self, args: &[&str]) -> bool {
        self.run(args)
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}
