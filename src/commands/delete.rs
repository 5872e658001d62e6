//! Delete command - remove the current branch locally and on the remote

use anyhow::Result;

use crate::commands::common::{cancelled, open_workflow, success};

pub fn execute() -> Result<()> {
    let mut wf = open_workflow()?;
    if wf.delete_current_branch()? {
        success("Branch deleted");
    } else {
        cancelled();
    }
    Ok(())
}
