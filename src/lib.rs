//! Branching-workflow orchestration over the git CLI.
//!
//! The crate is layered: `git` wraps the git binary with typed queries and
//! operations, `fs` persists workflow state (config file, conflict marker),
//! `workflow` implements the branching model on top of both, and
//! `commands` binds it all to the CLI surface.

pub mod commands;
pub mod error;
pub mod fs;
pub mod git;
pub mod ui;
pub mod workflow;
