//! State-changing repository operations

use super::refs::RemoteRef;
use super::runner::{Git, GitError};

/// Outcome of a merge attempt.
///
/// Conflicts are not fatal at this layer: the working tree is left
/// mid-conflict for the caller to handle, because the conflicted state is
/// the artifact the user resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    Merged,
    Conflict,
}

impl Git {
    pub fn checkout(&self, rev: &str) -> Result<(), GitError> {
        self.run_checked(&["checkout", rev])?;
        Ok(())
    }

    /// Create `name` at `base`'s commit, optionally switching to it.
    pub fn create_branch(&self, name: &str, base: &str, checkout: bool) -> Result<(), GitError> {
        if checkout {
            self.run_checked(&["checkout", "-b", name, base])?;
        } else {
            self.run_checked(&["branch", "--no-track", name, base])?;
        }
        Ok(())
    }

    /// Create a local branch tracking an existing remote branch.
    pub fn create_tracking_branch(&self, name: &str, remote_branch: &str) -> Result<(), GitError> {
        self.run_checked(&["branch", name, remote_branch])?;
        Ok(())
    }

    /// Merge `rev` into the current branch, always recording a merge commit
    /// (`--no-ff`) so workflow history keeps explicit integration points.
    pub fn merge(&self, rev: &str) -> Result<MergeOutcome, GitError> {
        let output = self.run(&["merge", "--no-ff", rev])?;
        if output.status.success() {
            return Ok(MergeOutcome::Merged);
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if stdout.contains("CONFLICT") || stderr.contains("CONFLICT") {
            return Ok(MergeOutcome::Conflict);
        }
        Err(GitError::Command {
            command: format!("merge --no-ff {rev}"),
            stderr: stderr.trim().to_string(),
        })
    }

    /// Files currently carrying conflict markers.
    pub fn conflicting_files(&self) -> Result<Vec<String>, GitError> {
        let listing = self.run_checked(&["diff", "--name-only", "--diff-filter=U"])?;
        Ok(listing
            .lines()
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    pub fn push(&self, remote: &RemoteRef, branch: &str, set_upstream: bool) -> Result<(), GitError> {
        if set_upstream {
            self.run_checked(&["push", "--set-upstream", remote.name(), branch])?;
        } else {
            self.run_checked(&["push", remote.name(), branch])?;
        }
        Ok(())
    }

    pub fn push_tags(&self, remote: &RemoteRef) -> Result<(), GitError> {
        self.run_checked(&["push", "--tags", remote.name()])?;
        Ok(())
    }

    pub fn delete_branch(&self, name: &str, force: bool) -> Result<(), GitError> {
        let flag = if force { "-D" } else { "-d" };
        self.run_checked(&["branch", flag, name])?;
        Ok(())
    }

    /// A remote delete is a push of a deletion.
    pub fn delete_remote_branch(&self, remote: &RemoteRef, branch: &str) -> Result<(), GitError> {
        self.run_checked(&["push", remote.name(), "--delete", branch])?;
        Ok(())
    }

    /// Create an annotated tag at the current commit.
    pub fn tag(&self, name: &str, message: &str) -> Result<(), GitError> {
        self.run_checked(&["tag", "-a", name, "-m", message])?;
        Ok(())
    }

    /// Point HEAD at a branch that may not exist yet (empty-repo bootstrap).
    pub fn set_head_branch(&self, branch: &str) -> Result<(), GitError> {
        let rref = format!("refs/heads/{branch}");
        self.run_checked(&["symbolic-ref", "HEAD", &rref])?;
        Ok(())
    }

    pub fn commit_empty(&self, message: &str) -> Result<(), GitError> {
        self.run_checked(&["commit", "--allow-empty", "--quiet", "-m", message])?;
        Ok(())
    }
}
