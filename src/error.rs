//! Workflow error taxonomy
//!
//! Every engine-raised error carries a user-facing message and an ordered
//! list of remedies: labelled command hints the caller can present. This
//! replaces callback-carrying error objects with plain data; the CLI decides
//! how to surface them.

use thiserror::Error;

use crate::git::GitError;

pub type FlowResult<T> = Result<T, FlowError>;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("this repository has not been initialized for the branching workflow")]
    NotInitialized,

    #[error("invalid workflow configuration: {0}")]
    Config(String),

    #[error("current branch `{current}` is not a {expected} branch")]
    WrongBranch { current: String, expected: String },

    /// Recoverable: check out the expected branch and retry the same action.
    #[error("not currently on branch `{expected}`")]
    NotOnBranch { expected: String },

    #[error("branch `{0}` already exists")]
    DuplicateBranch(String),

    #[error("tag `{0}` already exists")]
    DuplicateTag(String),

    #[error("there is an existing {role} branch `{branch}`; finish it before starting a new one")]
    ActiveBranchExists { role: String, branch: String },

    #[error("local branch `{local}` does not match `{remote}`")]
    Diverged { local: String, remote: String },

    #[error("merging `{branch}` into `{target}` left conflicts in the working tree")]
    MergeConflict { branch: String, target: String },

    #[error("an earlier merge into `{0}` still has unresolved conflicts")]
    UnresolvedConflict(String),

    #[error("no active {0} branch to finish")]
    NoActiveBranch(String),

    #[error("remote branch `{0}` does not exist")]
    MissingRemoteBranch(String),

    #[error("branch `{0}` has not been published to the develop branch yet")]
    NotYetPublished(String),

    #[error("the working tree has uncommitted changes")]
    DirtyWorkTree,

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("workflow config file is not valid JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// A labelled recovery hint: a command the user can run before retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remedy {
    pub label: &'static str,
    pub command: String,
}

impl Remedy {
    fn new(label: &'static str, command: impl Into<String>) -> Self {
        Self {
            label,
            command: command.into(),
        }
    }
}

impl FlowError {
    /// Ordered recovery hints for this error, if any.
    pub fn remedies(&self) -> Vec<Remedy> {
        match self {
            FlowError::NotInitialized => {
                vec![Remedy::new("Initialize the workflow", "branchflow init")]
            }
            FlowError::NotOnBranch { expected } => vec![Remedy::new(
                "Check out the branch, then retry the same action",
                format!("git checkout {expected}"),
            )],
            FlowError::Diverged { local, remote } => vec![
                Remedy::new("Update the local branch", format!("git pull origin {local}")),
                Remedy::new("Inspect the divergence", format!("git log {local}..{remote}")),
            ],
            FlowError::MergeConflict { .. } => vec![
                Remedy::new(
                    "List conflicting files",
                    "git diff --name-only --diff-filter=U",
                ),
                Remedy::new("After resolving, conclude the merge", "git add -A && git commit"),
            ],
            FlowError::UnresolvedConflict(_) | FlowError::DirtyWorkTree => {
                vec![Remedy::new("Review uncommitted changes", "git status")]
            }
            FlowError::NotYetPublished(_) => {
                vec![Remedy::new("Publish the branch first", "branchflow publish")]
            }
            _ => Vec::new(),
        }
    }
}
