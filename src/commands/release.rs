//! Release commands - start and finish release branches

use anyhow::Result;
use colored::Colorize;

use crate::commands::common::{cancelled, finish_with_reentry, open_workflow, success};
use crate::ui::Ui;
use crate::workflow::Bump;

pub fn start(name: Option<String>) -> Result<()> {
    let mut wf = open_workflow()?;

    let name = match name {
        Some(name) => name,
        None => {
            let suggestion = wf.suggest_version(Bump::Release)?;
            match wf.ui().prompt("Release version", Some(&suggestion))? {
                Some(name) => name,
                None => {
                    cancelled();
                    return Ok(());
                }
            }
        }
    };

    let created = wf.release_start(&name)?;
    success(&format!("Created {created}"));
    println!(
        "  {} finish it with `branchflow release finish`",
        "→".dimmed()
    );
    Ok(())
}

pub fn finish() -> Result<()> {
    let mut wf = open_workflow()?;
    if finish_with_reentry(&mut wf, |wf| wf.release_finish())? {
        success("Release finished");
    } else {
        cancelled();
    }
    Ok(())
}
