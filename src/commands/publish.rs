//! Publish command - merge the current work branch into develop

use anyhow::Result;

use crate::commands::common::{cancelled, open_workflow, success};

pub fn execute() -> Result<()> {
    let mut wf = open_workflow()?;
    if wf.publish_current_branch()? {
        let develop = wf.config()?.release_branch;
        success(&format!("Published to {develop}"));
    } else {
        cancelled();
    }
    Ok(())
}
