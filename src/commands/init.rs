//! Init command - set up the branching workflow in the current repository

use anyhow::Result;

use crate::commands::common::{cancelled, open_workflow, success};
use crate::workflow::InitOptions;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    master: String,
    develop: String,
    test: String,
    feature_prefix: String,
    hotfix_prefix: String,
    release_prefix: String,
    tag_prefix: String,
) -> Result<()> {
    let mut wf = open_workflow()?;
    let opts = InitOptions {
        master,
        develop,
        test,
        feature_prefix,
        hotfix_prefix,
        release_prefix,
        tag_prefix,
    };

    if wf.initialize(opts)? {
        success("Workflow initialized");
    } else {
        cancelled();
    }
    Ok(())
}
