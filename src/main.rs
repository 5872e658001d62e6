use std::process::exit;

use branchflow::commands::{
    branch, delete, finish, hotfix, init, publish, release, status, test_branch,
};
use branchflow::error::FlowError;
use branchflow::workflow::BranchKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "branchflow")]
#[command(about = "Branching-workflow orchestrator for git", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the workflow in the current repository
    Init {
        /// Production branch name
        #[arg(long, default_value = "master")]
        master: String,

        /// Integration (develop) branch name
        #[arg(long, default_value = "develop")]
        develop: String,

        /// Shared test branch name
        #[arg(long, default_value = "test")]
        test: String,

        /// Prefix for feature branches
        #[arg(long, default_value = "feature/")]
        feature_prefix: String,

        /// Prefix for hotfix branches
        #[arg(long, default_value = "hotfix/")]
        hotfix_prefix: String,

        /// Prefix for release branches
        #[arg(long, default_value = "release/")]
        release_prefix: String,

        /// Prefix for release tags
        #[arg(long, default_value = "")]
        tag_prefix: String,
    },

    /// Start a new work branch off master and push it
    Branch {
        /// Branch name (without the prefix)
        name: String,

        /// Kind of work branch to create
        #[arg(short, long, value_enum, default_value = "feature")]
        kind: KindArg,
    },

    /// Merge the current work branch into the test branch and push
    Test,

    /// Merge the current work branch into develop and push
    Publish,

    /// Conclude publishing: merge develop into master, tag and push
    Finish,

    /// Manage release branches
    Release {
        #[command(subcommand)]
        command: StartFinishCommands,
    },

    /// Manage hotfix branches
    Hotfix {
        #[command(subcommand)]
        command: StartFinishCommands,
    },

    /// Delete the current branch locally and on the remote
    Delete,

    /// Show the workflow state of the current repository
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum StartFinishCommands {
    /// Cut a new branch; the version is suggested from the latest tag
    Start {
        /// Version or name for the branch (without the prefix)
        name: Option<String>,
    },

    /// Merge the active branch into master and develop, tag and clean up
    Finish,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Feature,
    Hotfix,
}

impl From<KindArg> for BranchKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Feature => BranchKind::Feature,
            KindArg::Hotfix => BranchKind::Hotfix,
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Init {
            master,
            develop,
            test,
            feature_prefix,
            hotfix_prefix,
            release_prefix,
            tag_prefix,
        } => init::execute(
            master,
            develop,
            test,
            feature_prefix,
            hotfix_prefix,
            release_prefix,
            tag_prefix,
        ),
        Commands::Branch { name, kind } => branch::execute(name, kind.into()),
        Commands::Test => test_branch::execute(),
        Commands::Publish => publish::execute(),
        Commands::Finish => finish::execute(),
        Commands::Release { command } => match command {
            StartFinishCommands::Start { name } => release::start(name),
            StartFinishCommands::Finish => release::finish(),
        },
        Commands::Hotfix { command } => match command {
            StartFinishCommands::Start { name } => hotfix::start(name),
            StartFinishCommands::Finish => hotfix::finish(),
        },
        Commands::Delete => delete::execute(),
        Commands::Status => status::execute(),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn report(err: &anyhow::Error) {
    eprintln!("{} {err:#}", "error:".red().bold());
    if let Some(flow) = err.downcast_ref::<FlowError>() {
        for remedy in flow.remedies() {
            eprintln!("  {} {}: {}", "→".dimmed(), remedy.label, remedy.command.cyan());
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("BRANCHFLOW_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        report(&err);
        exit(1);
    }
}
