//! Initialization scenarios

use branchflow::error::FlowError;
use branchflow::fs::config;
use branchflow::workflow::InitOptions;

use crate::helpers::{Fixture, ScriptedUi};

#[test]
fn initialize_creates_develop_and_config() {
    let fixture = Fixture::bare_master();
    let mut wf = fixture.workflow(ScriptedUi::new());

    assert!(!wf.enabled());
    assert!(wf.initialize(InitOptions::default()).unwrap());

    assert!(wf.enabled());
    assert!(fixture.branch_exists("develop"));
    assert_eq!(fixture.current_branch(), "develop");

    let cfg = wf.config().unwrap();
    assert_eq!(cfg.master_branch, "master");
    assert_eq!(cfg.release_branch, "develop");
}

#[test]
fn reinitialize_declined_changes_nothing() {
    let fixture = Fixture::initialized();
    let before = std::fs::read_to_string(config::config_path(fixture.repo())).unwrap();

    let mut wf = fixture.workflow(ScriptedUi::new().confirm_next(false));
    let opts = InitOptions {
        master: "main".to_string(),
        ..InitOptions::default()
    };
    assert!(!wf.initialize(opts).unwrap());

    let after = std::fs::read_to_string(config::config_path(fixture.repo())).unwrap();
    assert_eq!(before, after);
}

#[test]
fn reinitialize_merges_over_existing_config() {
    let fixture = Fixture::initialized();
    config::write_merged(fixture.repo(), serde_json::json!({"customNote": "keep"})).unwrap();

    let mut wf = fixture.workflow(ScriptedUi::new().confirm_next(true));
    assert!(wf.initialize(InitOptions::default()).unwrap());

    let raw: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(config::config_path(fixture.repo())).unwrap(),
    )
    .unwrap();
    assert_eq!(raw["customNote"], "keep");
    assert_eq!(raw["masterBranch"], "master");
}

#[test]
fn initialize_rejects_equal_master_and_develop() {
    let fixture = Fixture::bare_master();
    let mut wf = fixture.workflow(ScriptedUi::new());
    let opts = InitOptions {
        master: "trunk".to_string(),
        develop: "trunk".to_string(),
        ..InitOptions::default()
    };
    assert!(matches!(
        wf.initialize(opts).unwrap_err(),
        FlowError::Config(_)
    ));
    assert!(!wf.enabled());
}

#[test]
fn initialize_bootstraps_empty_repository() {
    let temp = tempfile::TempDir::new().unwrap();
    let repo = temp.path().join("repo");
    std::fs::create_dir(&repo).unwrap();
    for args in [
        vec!["init"],
        vec!["config", "user.email", "test@test.com"],
        vec!["config", "user.name", "Test"],
    ] {
        let output = std::process::Command::new("git")
            .args(&args)
            .current_dir(&repo)
            .output()
            .unwrap();
        assert!(output.status.success(), "git {args:?} failed");
    }

    let binary = branchflow::git::find_git(None).unwrap();
    let git = branchflow::git::Git::new(binary, &repo);
    let mut wf = branchflow::workflow::Workflow::new(git, ScriptedUi::new());

    assert!(wf.initialize(InitOptions::default()).unwrap());
    assert!(wf.git().has_commits());
    assert!(wf.git().branch_exists("master").unwrap());
    assert!(wf.git().branch_exists("develop").unwrap());
}
