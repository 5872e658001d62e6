//! Test command - merge the current work branch into the shared test branch

use anyhow::Result;

use crate::commands::common::{cancelled, open_workflow, success};

pub fn execute() -> Result<()> {
    let mut wf = open_workflow()?;
    if wf.start_test_branch()? {
        let test = wf.config()?.test_branch;
        success(&format!("Merged into {test} and pushed"));
    } else {
        cancelled();
    }
    Ok(())
}
