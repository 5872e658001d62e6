//! The branching-workflow engine
//!
//! `Workflow` is one type whose operations are grouped by role: shared
//! guards and initialization in `core`, work branches in `feature`, the
//! release cycle in `release`, hotfixes in `hotfix`, and version
//! suggestion in `version`.

mod core;
mod feature;
mod hotfix;
mod release;
mod version;

pub use core::{InitOptions, Workflow};
pub use feature::BranchKind;
pub use version::{guess_new_version, Bump};
