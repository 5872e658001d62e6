//! Branch command - start a new feature or hotfix branch off master

use anyhow::Result;

use crate::commands::common::{open_workflow, success};
use crate::workflow::BranchKind;

pub fn execute(name: String, kind: BranchKind) -> Result<()> {
    let mut wf = open_workflow()?;
    let created = wf.create_branch(&name, kind)?;
    success(&format!("Created and pushed {created}"));
    Ok(())
}
