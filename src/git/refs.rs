//! Branch, tag and remote reference value types

use std::fmt;

/// A branch identified by name, either local (`feature/x`) or
/// remote-qualified (`origin/feature/x`). Two refs are equal iff their
/// names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchRef(String);

impl BranchRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// The remote-qualified form of a local ref.
    pub fn remote_at(&self, remote: &RemoteRef) -> BranchRef {
        BranchRef(format!("{}/{}", remote.name(), self.0))
    }
}

impl fmt::Display for BranchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tag identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagRef(String);

impl TagRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A remote identified by name. The workflow assumes one primary remote.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteRef(String);

impl RemoteRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The conventional primary remote.
    pub fn origin() -> Self {
        Self("origin".to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A branch resolved against the live repository: its ref, the commit it
/// currently points to, and its upstream tracking branch if any.
///
/// Never cached; re-fetched whenever consistency must be checked, because
/// remote state can change between operations.
#[derive(Debug, Clone)]
pub struct Branch {
    rref: BranchRef,
    commit: String,
    upstream: Option<BranchRef>,
}

impl Branch {
    pub fn new(rref: BranchRef, commit: String, upstream: Option<BranchRef>) -> Self {
        Self {
            rref,
            commit,
            upstream,
        }
    }

    pub fn rref(&self) -> &BranchRef {
        &self.rref
    }

    pub fn name(&self) -> &str {
        self.rref.name()
    }

    pub fn commit(&self) -> &str {
        &self.commit
    }

    pub fn upstream(&self) -> Option<&BranchRef> {
        self.upstream.as_ref()
    }
}

/// Parse `git branch` / `git branch -r` listings into refs.
///
/// Strips the current-branch marker, drops the detached-HEAD entries git
/// emits (`no branch`, parenthesized forms) and symref alias lines
/// (`origin/HEAD -> origin/main`), and de-duplicates while preserving
/// first-seen order.
pub fn parse_branch_listing(output: &str) -> Vec<BranchRef> {
    let mut names: Vec<String> = Vec::new();

    for line in output.lines() {
        let cleaned = line.trim().trim_start_matches("* ").trim();
        if cleaned.is_empty() || cleaned == "no branch" || cleaned.starts_with('(') {
            continue;
        }
        if cleaned.contains(" -> ") {
            continue;
        }
        if !names.iter().any(|n| n == cleaned) {
            names.push(cleaned.to_string());
        }
    }

    names.into_iter().map(BranchRef::new).collect()
}
