//! Hotfix commands - start and finish hotfix branches

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
            let suggestion = wf.suggest_version(Bump::Hotfix)?;
            match wf.ui().prompt("Hotfix version", Some(&suggestion))? {
                Some(name) => name,
                None => {
                    cancelled();
                    return Ok(());
                }
            }
        }
    };

    let created = wf.hotfix_start(&name)?;
    success(&format!("Created {created}"));
    println!(
        "  {} finish it with `branchflow hotfix finish`",
        "→".dimmed()
    );
    Ok(())
}

pub fn finish() -> Result<()> {
    let mut wf = open_workflow()?;
    if finish_with_reentry(&mut wf, |wf| wf.hotfix_finish())? {
        success("Hotfix finished");
    } else {
        cancelled();
    }
    Ok(())
}
