//! Workflow configuration persistence
//!
//! A single JSON file at a fixed path under the repository root, rewritten
//! wholesale on every write. Its existence is what "workflow enabled" means;
//! there is no separate flag. The file is human-editable, so re-initializing
//! merges into whatever object is already there instead of discarding
//! foreign keys.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FlowResult;

pub const CONFIG_FILE: &str = "branchflow.config.json";

/// The persisted workflow record: branch roles and name prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowConfig {
    pub master_branch: String,
    /// The develop (release-integration) branch.
    pub release_branch: String,
    pub test_branch: String,
    pub feature_prefix: String,
    pub hotfix_prefix: String,
    pub release_prefix: String,
    pub tag_prefix: String,
    pub delete_branch_on_finish: bool,
    pub delete_remote_branches: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            master_branch: "master".to_string(),
            release_branch: "develop".to_string(),
            test_branch: "test".to_string(),
            feature_prefix: "feature/".to_string(),
            hotfix_prefix: "hotfix/".to_string(),
            release_prefix: "release/".to_string(),
            tag_prefix: String::new(),
            delete_branch_on_finish: true,
            delete_remote_branches: true,
        }
    }
}

pub fn config_path(repo_root: &Path) -> PathBuf {
    repo_root.join(CONFIG_FILE)
}

/// Workflow enablement is derived solely from the file's existence.
pub fn is_enabled(repo_root: &Path) -> bool {
    config_path(repo_root).is_file()
}

pub fn load(repo_root: &Path) -> FlowResult<WorkflowConfig> {
    let text = fs::read_to_string(config_path(repo_root))?;
    Ok(serde_json::from_str(&text)?)
}

/// Merge `updates` into the existing config object (if any) and rewrite the
/// whole file. Keys not named in `updates` survive untouched.
pub fn write_merged(repo_root: &Path, updates: Value) -> FlowResult<()> {
    let path = config_path(repo_root);
    let mut merged: Value = if path.is_file() {
        serde_json::from_str(&fs::read_to_string(&path)?)?
    } else {
        Value::Object(Map::new())
    };
    if !merged.is_object() {
        merged = Value::Object(Map::new());
    }
    if let (Value::Object(base), Value::Object(new)) = (&mut merged, updates) {
        for (key, value) in new {
            base.insert(key, value);
        }
    }
    let mut text = serde_json::to_string_pretty(&merged)?;
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}
