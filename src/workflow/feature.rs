//! Feature/hotfix work branches: create, send to test, publish to develop

use crate::error::{FlowError, FlowResult};
use crate::fs::marker;
use crate::git::{Branch, MergeOutcome};
use crate::ui::Ui;

use super::core::Workflow;

/// The two kinds of work branch the workflow creates off master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Feature,
    Hotfix,
}

impl BranchKind {
    pub fn role(&self) -> &'static str {
        match self {
            BranchKind::Feature => "feature",
            BranchKind::Hotfix => "hotfix",
        }
    }
}

impl<U: Ui> Workflow<U> {
    /// The configured name prefix for a branch kind.
    pub fn prefix(&self, kind: BranchKind) -> FlowResult<String> {
        let cfg = self.require_enabled()?;
        Ok(match kind {
            BranchKind::Feature => cfg.feature_prefix,
            BranchKind::Hotfix => cfg.hotfix_prefix,
        })
    }

    /// The current branch, required to carry the kind's prefix. Returns the
    /// resolved branch and its name with the prefix stripped.
    pub fn current_flow_branch(&self, kind: BranchKind) -> FlowResult<(Branch, String)> {
        let prefix = self.prefix(kind)?;
        let current = self.git.current_branch()?;
        match current.name().strip_prefix(&prefix) {
            Some(short) => {
                let short = short.to_string();
                Ok((current, short))
            }
            None => Err(FlowError::WrongBranch {
                current: current.name().to_string(),
                expected: kind.role().to_string(),
            }),
        }
    }

    /// Create `prefix+name` off master and push it with upstream tracking.
    ///
    /// Fails rather than pulls when local master is behind its remote, so
    /// branch creation never silently moves the base under the user.
    pub fn create_branch(&mut self, name: &str, kind: BranchKind) -> FlowResult<String> {
        let cfg = self.require_enabled()?;
        let prefix = match kind {
            BranchKind::Feature => &cfg.feature_prefix,
            BranchKind::Hotfix => &cfg.hotfix_prefix,
        };
        let new_name = format!("{prefix}{name}");

        self.ui.progress("Checking branches");
        if self.git.branch_exists(&new_name)?
            || self.git.branch_exists(&self.remote_name(&new_name))?
        {
            return Err(FlowError::DuplicateBranch(new_name));
        }

        let master = &cfg.master_branch;
        let remote_master = self.remote_name(master);
        if self.git.branch_exists(&remote_master)? {
            self.require_equal(master, &remote_master)?;
        }

        self.ui.progress(&format!("Checking out {master}"));
        self.git.checkout(master)?;

        self.ui
            .progress(&format!("Creating {new_name} from {master}"));
        self.git.create_branch(&new_name, master, true)?;

        self.ui.progress(&format!("Pushing {new_name}"));
        self.git.push(&self.remote(), &new_name, true)?;

        Ok(new_name)
    }

    /// Merge the current feature/hotfix branch into the test branch and push
    /// it, then return to the original branch.
    ///
    /// On conflict the repository is left on the test branch mid-conflict;
    /// the conflicted tree is the artifact the user resolves.
    pub fn start_test_branch(&mut self) -> FlowResult<bool> {
        let cfg = self.require_enabled()?;

        self.ui.progress("Checking working tree");
        self.require_clean()?;

        let current = self.git.current_branch()?;
        let name = current.name().to_string();
        if !name.starts_with(&cfg.feature_prefix) && !name.starts_with(&cfg.hotfix_prefix) {
            return Err(FlowError::WrongBranch {
                current: name,
                expected: "feature or hotfix".to_string(),
            });
        }

        let test = cfg.test_branch.clone();
        if test.is_empty() {
            return Err(FlowError::Config("no test branch configured".to_string()));
        }
        let remote_test = self.remote_name(&test);
        if !self.git.branch_exists(&remote_test)? {
            return Err(FlowError::MissingRemoteBranch(remote_test));
        }

        let proceed = self
            .ui
            .confirm(&format!("Merge `{name}` into `{test}` and push?"), "merge")?;
        if !proceed {
            return Ok(false);
        }

        self.require_equal(&test, &remote_test)?;

        self.ui.progress(&format!("Checking out {test}"));
        self.git.checkout(&test)?;

        self.ui.progress(&format!("Merging {name} into {test}"));
        if self.git.merge(&name)? == MergeOutcome::Conflict {
            return Err(FlowError::MergeConflict {
                branch: name,
                target: test,
            });
        }

        self.ui.progress(&format!("Pushing {test}"));
        self.git.push(&self.remote(), &test, true)?;

        self.git.checkout(&name)?;
        Ok(true)
    }

    /// Publish whichever work branch is currently checked out, detecting its
    /// kind from the configured prefixes.
    ///
    /// The marker check runs before kind detection: a conflicted publish
    /// leaves the user on develop, and a retry from there must report the
    /// unresolved merge, not a wrong-branch failure.
    pub fn publish_current_branch(&mut self) -> FlowResult<bool> {
        let cfg = self.require_enabled()?;
        self.check_conflict_marker()?;
        let current = self.git.current_branch()?;
        let name = current.name();
        let kind = if name.starts_with(&cfg.feature_prefix) {
            BranchKind::Feature
        } else if name.starts_with(&cfg.hotfix_prefix) {
            BranchKind::Hotfix
        } else {
            return Err(FlowError::WrongBranch {
                current: name.to_string(),
                expected: "feature or hotfix".to_string(),
            });
        };
        self.publish_branch(kind)
    }

    /// Merge the current work branch into develop and push it.
    ///
    /// A conflicted merge records a marker naming develop; the next publish
    /// attempt refuses to run until the tree is clean, then clears it.
    pub fn publish_branch(&mut self, kind: BranchKind) -> FlowResult<bool> {
        let cfg = self.require_enabled()?;

        self.ui.progress("Checking for unfinished merges");
        self.check_conflict_marker()?;
        self.require_clean()?;

        self.ui.progress("Checking current branch");
        let (current, _) = self.current_flow_branch(kind)?;
        let name = current.name().to_string();

        let develop = cfg.release_branch.clone();
        let proceed = self
            .ui
            .confirm(&format!("Publish `{name}` to `{develop}`?"), "publish")?;
        if !proceed {
            return Ok(false);
        }

        self.ui.progress("Checking remote branches");
        let remote_current = self.remote_name(&name);
        if !self.git.branch_exists(&remote_current)? {
            return Err(FlowError::MissingRemoteBranch(remote_current));
        }
        self.require_equal(&name, &remote_current)?;

        let remote_develop = self.remote_name(&develop);
        if !self.git.branch_exists(&remote_develop)? {
            return Err(FlowError::MissingRemoteBranch(remote_develop));
        }
        self.require_equal(&develop, &remote_develop)?;

        if self.git.is_merged(&name, &develop)? {
            let again = self.ui.confirm(
                &format!("`{name}` is already merged into `{develop}`. Continue anyway?"),
                "continue",
            )?;
            if !again {
                return Ok(false);
            }
        }

        self.ui.progress(&format!("Checking out {develop}"));
        self.git.checkout(&develop)?;

        self.ui
            .progress(&format!("Merging {name} into {develop}"));
        if self.git.merge(&name)? == MergeOutcome::Conflict {
            marker::write(self.git.repo_root(), &develop)?;
            return Err(FlowError::MergeConflict {
                branch: name,
                target: develop,
            });
        }

        self.ui.progress(&format!("Pushing {develop}"));
        self.git.push(&self.remote(), &develop, true)?;

        self.git.checkout(&name)?;
        Ok(true)
    }
}
