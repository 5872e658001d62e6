//! CLI command entry points
//!
//! Each command opens a workflow for the current repository, drives one
//! engine action and reports the outcome. Policy lives in `workflow`;
//! these modules only translate between the terminal and the engine.

pub mod branch;
pub mod common;
pub mod delete;
pub mod finish;
pub mod hotfix;
pub mod init;
pub mod publish;
pub mod release;
pub mod status;
pub mod test_branch;
