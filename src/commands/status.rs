//! Status command - repository dashboard for the branching workflow

use anyhow::Result;
use colored::Colorize;

use crate::commands::common::open_workflow;
use crate::fs::marker;

pub fn execute() -> Result<()> {
    let wf = open_workflow()?;
    let git = wf.git();

    println!("{}", "Branching workflow".bold());
    println!("  repository: {}", git.repo_root().display());
    println!("  git:        {}", git.version());

    if !wf.enabled() {
        println!();
        println!(
            "  {} not initialized; run {}",
            "─".dimmed(),
            "branchflow init".cyan()
        );
        return Ok(());
    }

    let cfg = wf.config()?;
    println!("  master:     {}", cfg.master_branch);
    println!("  develop:    {}", cfg.release_branch);
    if !cfg.test_branch.is_empty() {
        println!("  test:       {}", cfg.test_branch);
    }

    println!();
    let current = git.current_branch()?;
    println!("  current:    {}", current.name().cyan());
    if let Some(upstream) = current.upstream() {
        println!("  upstream:   {upstream}");
    }
    if git.is_clean()? {
        println!("  tree:       {}", "clean".green());
    } else {
        println!("  tree:       {}", "uncommitted changes".yellow());
    }

    if !cfg.release_prefix.is_empty() {
        if let Some(release) = wf.current_release()? {
            println!("  release:    {}", release.name().cyan());
        }
    }
    if !cfg.hotfix_prefix.is_empty() {
        if let Some(hotfix) = wf.current_hotfix()? {
            println!("  hotfix:     {}", hotfix.name().cyan());
        }
    }
    if let Some(tag) = git.latest_tag()? {
        println!("  latest tag: {tag}");
    }
    if let Some(target) = marker::read(git.repo_root())? {
        println!(
            "  {} unfinished merge into {}",
            "!".red().bold(),
            target.red()
        );
    }

    Ok(())
}
