//! Shared fixtures: a scripted UI and a repository with a bare remote.

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use branchflow::fs::config;
use branchflow::fs::WorkflowConfig;
use branchflow::git::{find_git, Git};
use branchflow::ui::Ui;
use branchflow::workflow::Workflow;

/// A `Ui` that answers from pre-loaded queues. An exhausted queue accepts:
/// confirms answer yes and prompts take their default, so tests only script
/// the answers they care about.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    confirms: VecDeque<bool>,
    prompts: VecDeque<Option<String>>,
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirm_next(mut self, answer: bool) -> Self {
        self.confirms.push_back(answer);
        self
    }

    pub fn prompt_next(mut self, answer: Option<&str>) -> Self {
        self.prompts.push_back(answer.map(str::to_string));
        self
    }
}

impl Ui for ScriptedUi {
    fn prompt(&mut self, _message: &str, default: Option<&str>) -> io::Result<Option<String>> {
        match self.prompts.pop_front() {
            Some(scripted) => Ok(scripted),
            None => Ok(default.map(str::to_string)),
        }
    }

    fn confirm(&mut self, _message: &str, _yes_label: &str) -> io::Result<bool> {
        Ok(self.confirms.pop_front().unwrap_or(true))
    }

    fn progress(&mut self, _message: &str) {}
}

/// A working repository with a bare `origin`, master/develop/test pushed,
/// and the workflow configured with defaults.
pub struct Fixture {
    _temp: TempDir,
    repo: PathBuf,
}

impl Fixture {
    /// A repository with only master, not yet configured.
    pub fn bare_master() -> Self {
        let temp = TempDir::new().unwrap();
        let origin = temp.path().join("origin.git");
        run_git(temp.path(), &["init", "--bare", "origin.git"]);

        let repo = temp.path().join("repo");
        std::fs::create_dir(&repo).unwrap();
        run_git(&repo, &["init"]);
        run_git(&repo, &["symbolic-ref", "HEAD", "refs/heads/master"]);
        run_git(&repo, &["config", "user.email", "test@test.com"]);
        run_git(&repo, &["config", "user.name", "Test"]);
        run_git(&repo, &["commit", "--allow-empty", "-m", "Initial commit"]);
        run_git(&repo, &["remote", "add", "origin", origin.to_str().unwrap()]);
        run_git(&repo, &["push", "-u", "origin", "master"]);

        Self { _temp: temp, repo }
    }

    /// A fully set-up repository: develop and test exist locally and on the
    /// remote, and the default workflow config is written.
    pub fn initialized() -> Self {
        let fixture = Self::bare_master();
        fixture.git(&["branch", "develop", "master"]);
        fixture.git(&["branch", "test", "master"]);
        fixture.git(&["push", "-u", "origin", "develop"]);
        fixture.git(&["push", "-u", "origin", "test"]);
        config::write_merged(
            &fixture.repo,
            serde_json::to_value(WorkflowConfig::default()).unwrap(),
        )
        .unwrap();
        fixture
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    pub fn workflow(&self, ui: ScriptedUi) -> Workflow<ScriptedUi> {
        let binary = find_git(None).unwrap();
        Workflow::new(Git::new(binary, &self.repo), ui)
    }

    /// Run git in the working repository, asserting success.
    pub fn git(&self, args: &[&str]) -> String {
        run_git(&self.repo, args)
    }

    /// Commit `content` to `file` on the current branch.
    pub fn commit_file(&self, file: &str, content: &str, message: &str) {
        std::fs::write(self.repo.join(file), content).unwrap();
        self.git(&["add", file]);
        self.git(&["commit", "-m", message]);
    }

    pub fn current_branch(&self) -> String {
        self.git(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    pub fn branch_exists(&self, name: &str) -> bool {
        let listing = format!(
            "{}\n{}",
            self.git(&["branch", "--no-color"]),
            self.git(&["branch", "-r", "--no-color"])
        );
        listing
            .lines()
            .map(|l| l.trim().trim_start_matches("* "))
            .any(|l| l == name)
    }
}

fn run_git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
