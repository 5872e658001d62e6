//! Git subprocess layer
//!
//! This module provides:
//! - Executable discovery (path hint, then PATH lookup)
//! - A `Git` handle running commands against one repository
//! - Read-only state queries and state-changing operations
//! - Branch/tag/remote reference value types

pub mod discovery;
pub mod ops;
pub mod query;
pub mod refs;
pub mod runner;

pub use discovery::find_git;
pub use ops::MergeOutcome;
pub use refs::{parse_branch_listing, Branch, BranchRef, RemoteRef, TagRef};
pub use runner::{Git, GitBinary, GitError};
