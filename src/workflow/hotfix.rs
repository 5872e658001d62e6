//! Hotfix branches: urgent fixes cut from master

use crate::error::{FlowError, FlowResult};
use crate::git::BranchRef;
use crate::ui::Ui;

use super::core::Workflow;

impl<U: Ui> Workflow<U> {
    /// The active hotfix branch, if one exists.
    pub fn current_hotfix(&self) -> FlowResult<Option<BranchRef>> {
        let cfg = self.require_enabled()?;
        if cfg.hotfix_prefix.is_empty() {
            return Err(FlowError::Config(
                "no hotfix branch prefix configured".to_string(),
            ));
        }
        Ok(self
            .git
            .all_branches()?
            .into_iter()
            .find(|b| b.name().starts_with(&cfg.hotfix_prefix)))
    }

    /// Create and check out a new hotfix branch off master.
    pub fn hotfix_start(&mut self, name: &str) -> FlowResult<String> {
        let cfg = self.require_enabled()?;

        self.ui.progress("Checking working tree");
        self.require_clean()?;

        if let Some(existing) = self.current_hotfix()? {
            return Err(FlowError::ActiveBranchExists {
                role: "hotfix".to_string(),
                branch: existing.name().to_string(),
            });
        }
        if self.git.tag_exists(name)? {
            return Err(FlowError::DuplicateTag(name.to_string()));
        }

        let new_name = format!("{}{name}", cfg.hotfix_prefix);
        if self.git.branch_exists(&new_name)? {
            return Err(FlowError::DuplicateBranch(new_name));
        }

        let remote_master = self.remote_name(&cfg.master_branch);
        if self.git.branch_exists(&remote_master)? {
            self.require_equal(&cfg.master_branch, &remote_master)?;
        }

        self.ui
            .progress(&format!("Creating {new_name} from {}", cfg.master_branch));
        self.git.create_branch(&new_name, &cfg.master_branch, true)?;

        Ok(new_name)
    }

    /// Finish the active hotfix branch: merge to master and develop, tag.
    pub fn hotfix_finish(&mut self) -> FlowResult<bool> {
        let cfg = self.require_enabled()?;
        let branch = self
            .current_hotfix()?
            .ok_or_else(|| FlowError::NoActiveBranch("hotfix".to_string()))?;
        self.finalize_with_branch(&cfg.hotfix_prefix, &branch)
    }
}
