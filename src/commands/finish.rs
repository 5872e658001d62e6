//! Finish command - conclude publishing: merge develop into master and tag

use anyhow::Result;

use crate::commands::common::{cancelled, open_workflow, success};

pub fn execute() -> Result<()> {
    let mut wf = open_workflow()?;
    if wf.publish_finish()? {
        let master = wf.config()?.master_branch;
        success(&format!("Merged into {master}, tagged and pushed"));
    } else {
        cancelled();
    }
    Ok(())
}
