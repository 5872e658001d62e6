//! Read-only repository queries
//!
//! None of these mutate the repository. Results are never cached: remote
//! state can change between operations, so callers re-query immediately
//! before the mutation that depends on the answer.

use super::refs::{parse_branch_listing, Branch, BranchRef, TagRef};
use super::runner::{Git, GitError};

impl Git {
    /// Resolve HEAD to a named branch with its commit and upstream.
    pub fn current_branch(&self) -> Result<Branch, GitError> {
        let name = self.run_checked(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        if name == "HEAD" {
            return Err(GitError::DetachedHead);
        }
        let commit = self.resolve(&name)?;
        let probe = self.run(&["rev-parse", "--abbrev-ref", "@{upstream}"])?;
        let upstream = probe.status.success().then(|| {
            BranchRef::new(String::from_utf8_lossy(&probe.stdout).trim().to_string())
        });
        Ok(Branch::new(BranchRef::new(name), commit, upstream))
    }

    /// True iff there are no uncommitted or staged changes. Untracked files
    /// do not count: the workflow's own config file lives untracked in the
    /// repository root.
    pub fn is_clean(&self) -> Result<bool, GitError> {
        Ok(self
            .run_checked(&["status", "--porcelain", "--untracked-files=no"])?
            .is_empty())
    }

    /// Union of local and remote branches, de-duplicated, first-seen order.
    pub fn all_branches(&self) -> Result<Vec<BranchRef>, GitError> {
        let local = self.run_checked(&["branch", "--no-color"])?;
        let remote = self.run_checked(&["branch", "-r", "--no-color"])?;
        Ok(parse_branch_listing(&format!("{local}\n{remote}")))
    }

    /// Membership test against the full local+remote branch listing.
    pub fn branch_exists(&self, name: &str) -> Result<bool, GitError> {
        Ok(self.all_branches()?.iter().any(|b| b.name() == name))
    }

    pub fn all_tags(&self) -> Result<Vec<TagRef>, GitError> {
        let listing = self.run_checked(&["tag", "-l"])?;
        Ok(listing
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(TagRef::new)
            .collect())
    }

    pub fn tag_exists(&self, name: &str) -> Result<bool, GitError> {
        Ok(self.all_tags()?.iter().any(|t| t.name() == name))
    }

    /// The tag reachable from the most recently tagged commit, if any.
    pub fn latest_tag(&self) -> Result<Option<String>, GitError> {
        if self.all_tags()?.is_empty() {
            return Ok(None);
        }
        let commit = self.run_checked(&["rev-list", "--tags", "--max-count=1"])?;
        let tag = self.run_checked(&["describe", "--tags", &commit])?;
        Ok(Some(tag))
    }

    /// True iff `subject`'s tip is reachable from `base`.
    ///
    /// Exact ancestry via `merge-base --is-ancestor`. Any failure to resolve
    /// `subject` (e.g. the ref does not exist) reads as "not merged".
    pub fn is_merged(&self, subject: &str, base: &str) -> Result<bool, GitError> {
        let output = self.run(&["merge-base", "--is-ancestor", subject, base])?;
        Ok(output.status.success())
    }

    /// The commit a revision currently points to.
    pub fn resolve(&self, rev: &str) -> Result<String, GitError> {
        self.run_checked(&["rev-parse", rev])
    }

    /// Whether the repository has any commit at all.
    pub fn has_commits(&self) -> bool {
        self.run_bool(&["rev-parse", "--quiet", "--verify", "HEAD"])
    }
}
