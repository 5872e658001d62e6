//! Workflow engine: shared state, guards, initialize and delete
//!
//! One `Workflow` value drives every action. The role-specific operations
//! (feature/release/hotfix) live in sibling modules as further `impl`
//! blocks on the same type.

use serde_json::json;

use crate::error::{FlowError, FlowResult};
use crate::fs::{config, marker, WorkflowConfig};
use crate::git::{Git, RemoteRef};
use crate::ui::Ui;

/// Inputs to `initialize`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    pub master: String,
    pub develop: String,
    pub test: String,
    pub feature_prefix: String,
    pub hotfix_prefix: String,
    pub release_prefix: String,
    pub tag_prefix: String,
}

impl Default for InitOptions {
    fn default() -> Self {
        let defaults = WorkflowConfig::default();
        Self {
            master: defaults.master_branch,
            develop: defaults.release_branch,
            test: defaults.test_branch,
            feature_prefix: defaults.feature_prefix,
            hotfix_prefix: defaults.hotfix_prefix,
            release_prefix: defaults.release_prefix,
            tag_prefix: defaults.tag_prefix,
        }
    }
}

/// The workflow orchestrator: resolves branch roles from config, validates
/// preconditions against live repository state, then drives the mutating
/// git operations for each action.
pub struct Workflow<U: Ui> {
    pub(crate) git: Git,
    pub(crate) ui: U,
}

impl<U: Ui> Workflow<U> {
    pub fn new(git: Git, ui: U) -> Self {
        Self { git, ui }
    }

    pub fn git(&self) -> &Git {
        &self.git
    }

    pub fn ui(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Whether the workflow config file exists for this repository.
    pub fn enabled(&self) -> bool {
        config::is_enabled(self.git.repo_root())
    }

    /// Load the config, failing with `NotInitialized` when absent.
    pub fn config(&self) -> FlowResult<WorkflowConfig> {
        if !self.enabled() {
            return Err(FlowError::NotInitialized);
        }
        config::load(self.git.repo_root())
    }

    pub(crate) fn require_enabled(&self) -> FlowResult<WorkflowConfig> {
        self.config()
    }

    pub(crate) fn require_clean(&self) -> FlowResult<()> {
        if !self.git.is_clean()? {
            return Err(FlowError::DirtyWorkTree);
        }
        Ok(())
    }

    /// Hard equality check between a local branch and a remote counterpart.
    /// Never pulls; a mismatch is the caller's problem to resolve.
    pub(crate) fn require_equal(&self, local: &str, remote: &str) -> FlowResult<()> {
        if self.git.resolve(local)? != self.git.resolve(remote)? {
            return Err(FlowError::Diverged {
                local: local.to_string(),
                remote: remote.to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn remote(&self) -> RemoteRef {
        RemoteRef::origin()
    }

    pub(crate) fn remote_name(&self, branch: &str) -> String {
        format!("{}/{branch}", self.remote().name())
    }

    /// Set up the workflow in this repository.
    ///
    /// Returns false when the user declines to overwrite an existing
    /// configuration. Re-running with the same inputs is idempotent in
    /// effect on the fields it sets.
    pub fn initialize(&mut self, opts: InitOptions) -> FlowResult<bool> {
        if self.enabled() {
            let reinit = self.ui.confirm(
                "The workflow is already initialized here. Reconfigure it?",
                "reconfigure",
            )?;
            if !reinit {
                return Ok(false);
            }
        }

        if opts.master.is_empty() || opts.develop.is_empty() {
            return Err(FlowError::Config(
                "master and develop branch names must not be empty".to_string(),
            ));
        }
        if opts.master == opts.develop {
            return Err(FlowError::Config(
                "master and develop must be different branches".to_string(),
            ));
        }

        if !self.git.has_commits() {
            self.ui.progress("Creating initial commit");
            self.git.set_head_branch(&opts.master)?;
            self.git.commit_empty("Initial commit")?;
        }

        if !self.git.branch_exists(&opts.develop)? {
            let remote_develop = self.remote_name(&opts.develop);
            if self.git.branch_exists(&remote_develop)? {
                self.ui.progress(&format!(
                    "Creating {} tracking {remote_develop}",
                    opts.develop
                ));
                self.git.create_tracking_branch(&opts.develop, &remote_develop)?;
            } else {
                self.ui
                    .progress(&format!("Creating {} from {}", opts.develop, opts.master));
                self.git.create_branch(&opts.develop, &opts.master, false)?;
            }
            self.git.checkout(&opts.develop)?;
        }

        self.ui.progress("Writing workflow config");
        config::write_merged(
            self.git.repo_root(),
            json!({
                "masterBranch": opts.master,
                "releaseBranch": opts.develop,
                "testBranch": opts.test,
                "featurePrefix": opts.feature_prefix,
                "hotfixPrefix": opts.hotfix_prefix,
                "releasePrefix": opts.release_prefix,
                "tagPrefix": opts.tag_prefix,
            }),
        )?;

        Ok(true)
    }

    /// Delete the current branch locally and, when present, on the remote.
    pub fn delete_current_branch(&mut self) -> FlowResult<bool> {
        let cfg = self.require_enabled()?;
        let current = self.git.current_branch()?;
        let name = current.name().to_string();

        if name == cfg.master_branch || name == cfg.release_branch || name == cfg.test_branch {
            return Err(FlowError::Config(format!(
                "refusing to delete workflow branch `{name}`"
            )));
        }

        let proceed = self
            .ui
            .confirm(&format!("About to delete branch `{name}`. Continue?"), "delete")?;
        if !proceed {
            return Ok(false);
        }

        self.ui
            .progress(&format!("Checking out {}", cfg.master_branch));
        self.git.checkout(&cfg.master_branch)?;

        self.ui.progress(&format!("Deleting local branch {name}"));
        self.git.delete_branch(&name, true)?;

        let remote_branch = self.remote_name(&name);
        if self.git.branch_exists(&remote_branch)? {
            self.ui
                .progress(&format!("Deleting remote branch {remote_branch}"));
            self.git.delete_remote_branch(&self.remote(), &name)?;
        }

        Ok(true)
    }

    /// Stale-marker protocol shared by publish attempts: a marker left by a
    /// conflicted merge is cleared once the tree is clean again, and blocks
    /// the action while the tree is still dirty.
    pub(crate) fn check_conflict_marker(&self) -> FlowResult<()> {
        let root = self.git.repo_root();
        if let Some(target) = marker::read(root)? {
            if self.git.is_clean()? {
                marker::clear(root)?;
            } else {
                return Err(FlowError::UnresolvedConflict(target));
            }
        }
        Ok(())
    }
}
