//! Shared command plumbing: workflow construction and result reporting

use std::env;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::error::{FlowError, FlowResult};
use crate::git::{find_git, Git};
use crate::ui::{Console, Ui};
use crate::workflow::Workflow;

/// Build a workflow for the repository containing the current directory.
///
/// `BRANCHFLOW_GIT` may point at a specific git executable; otherwise the
/// PATH lookup applies.
pub fn open_workflow() -> Result<Workflow<Console>> {
    let hint = env::var_os("BRANCHFLOW_GIT").map(PathBuf::from);
    let binary = find_git(hint.as_deref())?;

    let output = Command::new(&binary.path)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .context("failed to execute git")?;
    if !output.status.success() {
        bail!("the current directory is not inside a git repository");
    }
    let root = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());

    Ok(Workflow::new(Git::new(binary, root), Console::new()))
}

pub fn success(message: &str) {
    println!("{} {message}", "✓".green().bold());
}

pub fn cancelled() {
    println!("{} Cancelled", "─".dimmed());
}

/// Run a finishing action, retrying once after checking out the branch it
/// reports being absent from.
///
/// Finish actions require being on the branch they retire; rather than
/// switching branches behind the user's back, the engine reports which
/// branch it needs and the retry is explicit.
pub fn finish_with_reentry<F>(wf: &mut Workflow<Console>, mut action: F) -> Result<bool>
where
    F: FnMut(&mut Workflow<Console>) -> FlowResult<bool>,
{
    match action(wf) {
        Err(FlowError::NotOnBranch { expected }) => {
            let proceed = wf.ui().confirm(
                &format!("Not on `{expected}`. Check it out and continue?"),
                "checkout",
            )?;
            if !proceed {
                return Ok(false);
            }
            println!("{} Checking out {expected}", "→".cyan().bold());
            wf.git().checkout(&expected)?;
            Ok(action(wf)?)
        }
        other => Ok(other?),
    }
}
