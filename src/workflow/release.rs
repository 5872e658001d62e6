//! Release branches and the develop→master convergence point

use chrono::Local;

use crate::error::{FlowError, FlowResult};
use crate::git::{BranchRef, MergeOutcome};
use crate::ui::Ui;

use super::core::Workflow;

impl<U: Ui> Workflow<U> {
    /// The active release branch, if one exists.
    pub fn current_release(&self) -> FlowResult<Option<BranchRef>> {
        let cfg = self.require_enabled()?;
        if cfg.release_prefix.is_empty() {
            return Err(FlowError::Config(
                "no release branch prefix configured".to_string(),
            ));
        }
        Ok(self
            .git
            .all_branches()?
            .into_iter()
            .find(|b| b.name().starts_with(&cfg.release_prefix)))
    }

    /// Create and check out a new release branch off develop.
    ///
    /// At most one release branch may be active at a time, and the proposed
    /// name must not collide with an existing tag or branch.
    pub fn release_start(&mut self, name: &str) -> FlowResult<String> {
        let cfg = self.require_enabled()?;

        self.ui.progress("Checking working tree");
        self.require_clean()?;

        if let Some(existing) = self.current_release()? {
            return Err(FlowError::ActiveBranchExists {
                role: "release".to_string(),
                branch: existing.name().to_string(),
            });
        }
        if self.git.tag_exists(name)? {
            return Err(FlowError::DuplicateTag(name.to_string()));
        }

        let new_name = format!("{}{name}", cfg.release_prefix);
        if self.git.branch_exists(&new_name)? {
            return Err(FlowError::DuplicateBranch(new_name));
        }

        let remote_develop = self.remote_name(&cfg.release_branch);
        if self.git.branch_exists(&remote_develop)? {
            self.require_equal(&cfg.release_branch, &remote_develop)?;
        }

        self.ui.progress(&format!(
            "Creating {new_name} from {}",
            cfg.release_branch
        ));
        self.git.create_branch(&new_name, &cfg.release_branch, true)?;

        Ok(new_name)
    }

    /// Finish the active release branch: merge to master and develop, tag.
    pub fn release_finish(&mut self) -> FlowResult<bool> {
        let cfg = self.require_enabled()?;
        let branch = self
            .current_release()?
            .ok_or_else(|| FlowError::NoActiveBranch("release".to_string()))?;
        self.finalize_with_branch(&cfg.release_prefix, &branch)
    }

    /// Retire a release/hotfix branch: merge it into master, tag master,
    /// merge it into develop, then optionally delete it and push everything.
    ///
    /// The caller must already be on `branch`; if not, the `NotOnBranch`
    /// error tells the host to check it out and retry the same action.
    pub(crate) fn finalize_with_branch(
        &mut self,
        role_prefix: &str,
        branch: &BranchRef,
    ) -> FlowResult<bool> {
        let cfg = self.require_enabled()?;

        self.ui.progress("Getting current branch");
        let current = self.git.current_branch()?;
        if current.name() != branch.name() {
            return Err(FlowError::NotOnBranch {
                expected: branch.name().to_string(),
            });
        }

        self.ui.progress("Checking working tree");
        self.require_clean()?;

        self.ui.progress("Checking remotes");
        let master = cfg.master_branch.clone();
        let develop = cfg.release_branch.clone();
        let remote_master = self.remote_name(&master);
        let remote_develop = self.remote_name(&develop);
        let has_remote_master = self.git.branch_exists(&remote_master)?;
        if has_remote_master {
            self.require_equal(&master, &remote_master)?;
        }
        let has_remote_develop = self.git.branch_exists(&remote_develop)?;
        if has_remote_develop {
            self.require_equal(&develop, &remote_develop)?;
        }

        let Some(tag_message) = self.ui.prompt("Tag message (optional)", Some(""))? else {
            return Ok(false);
        };

        self.ui.progress(&format!("Checking out {master}"));
        self.git.checkout(&master)?;

        if !self.git.is_merged(branch.name(), &master)? {
            self.ui
                .progress(&format!("Merging {branch} into {master}"));
            if self.git.merge(branch.name())? == MergeOutcome::Conflict {
                return Err(FlowError::MergeConflict {
                    branch: branch.name().to_string(),
                    target: master,
                });
            }
        }

        let short = branch.name().strip_prefix(role_prefix).unwrap_or(branch.name());
        let tag_name = format!("{}{short}", cfg.tag_prefix);
        self.ui
            .progress(&format!("Tagging {master} as {tag_name}"));
        self.git.tag(&tag_name, &tag_message)?;

        self.ui.progress(&format!("Checking out {develop}"));
        self.git.checkout(&develop)?;

        if !self.git.is_merged(branch.name(), &develop)? {
            self.ui
                .progress(&format!("Merging {branch} into {develop}"));
            if self.git.merge(branch.name())? == MergeOutcome::Conflict {
                return Err(FlowError::MergeConflict {
                    branch: branch.name().to_string(),
                    target: develop,
                });
            }
        }

        if cfg.delete_branch_on_finish {
            self.ui.progress(&format!("Deleting {branch}"));
            self.git.delete_branch(branch.name(), true)?;

            if cfg.delete_remote_branches && has_remote_master && has_remote_develop {
                let remote = self.remote();
                self.ui.progress(&format!("Pushing {develop}"));
                self.git.push(&remote, &develop, false)?;
                self.ui.progress(&format!("Pushing {master}"));
                self.git.push(&remote, &master, false)?;
                self.ui.progress("Pushing tags");
                self.git.push_tags(&remote)?;

                let remote_branch = self.remote_name(branch.name());
                if self.git.branch_exists(&remote_branch)? {
                    self.ui
                        .progress(&format!("Deleting remote branch {remote_branch}"));
                    self.git.delete_remote_branch(&remote, branch.name())?;
                }
            }
        }

        Ok(true)
    }

    /// Finish publishing the current feature/hotfix branch: merge develop
    /// into master, tag the release point, push master and tags, and retire
    /// the work branch when configured to.
    pub fn publish_finish(&mut self) -> FlowResult<bool> {
        let cfg = self.require_enabled()?;

        let current = self.git.current_branch()?;
        let name = current.name().to_string();
        if !name.starts_with(&cfg.feature_prefix) && !name.starts_with(&cfg.hotfix_prefix) {
            return Err(FlowError::WrongBranch {
                current: name,
                expected: "feature or hotfix".to_string(),
            });
        }

        self.ui.progress("Checking working tree");
        self.require_clean()?;

        let master = cfg.master_branch.clone();
        let develop = cfg.release_branch.clone();
        let remote_master = self.remote_name(&master);
        let remote_develop = self.remote_name(&develop);

        self.ui.progress("Checking remotes");
        if !self.git.branch_exists(&remote_master)? {
            return Err(FlowError::MissingRemoteBranch(remote_master));
        }
        if !self.git.branch_exists(&remote_develop)? {
            return Err(FlowError::MissingRemoteBranch(remote_develop));
        }
        self.require_equal(&master, &remote_master)?;
        self.require_equal(&develop, &remote_develop)?;

        // The branch must have gone through publish: its remote copy has to
        // be merged into develop already.
        let remote_current = self.remote_name(&name);
        if !self.git.is_merged(&remote_current, &develop)? {
            return Err(FlowError::NotYetPublished(name));
        }

        let Some(tag_name) = self.ui.prompt("Tag name", Some(&name))? else {
            return Ok(false);
        };
        let default_message = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let Some(tag_message) = self.ui.prompt("Tag message", Some(&default_message))? else {
            return Ok(false);
        };
        if self.git.tag_exists(&tag_name)? {
            return Err(FlowError::DuplicateTag(tag_name));
        }

        self.ui.progress(&format!("Checking out {master}"));
        self.git.checkout(&master)?;

        self.ui
            .progress(&format!("Merging {develop} into {master}"));
        if self.git.merge(&develop)? == MergeOutcome::Conflict {
            return Err(FlowError::MergeConflict {
                branch: develop,
                target: master,
            });
        }

        self.ui
            .progress(&format!("Tagging {master} as {tag_name}"));
        self.git.tag(&tag_name, &tag_message)?;

        let remote = self.remote();
        self.ui.progress(&format!("Pushing {master}"));
        self.git.push(&remote, &master, false)?;
        self.ui.progress("Pushing tags");
        self.git.push_tags(&remote)?;

        if cfg.delete_branch_on_finish {
            self.ui.progress(&format!("Deleting local branch {name}"));
            self.git.delete_branch(&name, true)?;

            if cfg.delete_remote_branches && self.git.branch_exists(&remote_current)? {
                self.ui
                    .progress(&format!("Deleting remote branch {remote_current}"));
                self.git.delete_remote_branch(&remote, &name)?;
            }
        }

        Ok(true)
    }
}
