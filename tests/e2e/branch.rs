//! Work-branch creation scenarios

use branchflow::error::FlowError;
use branchflow::workflow::BranchKind;

use crate::helpers::{Fixture, ScriptedUi};

#[test]
fn create_branch_pushes_with_upstream() {
    let fixture = Fixture::initialized();
    let mut wf = fixture.workflow(ScriptedUi::new());

    let created = wf.create_branch("login", BranchKind::Feature).unwrap();
    assert_eq!(created, "feature/login");
    assert_eq!(fixture.current_branch(), "feature/login");
    assert!(fixture.branch_exists("origin/feature/login"));

    let upstream = fixture.git(&["rev-parse", "--abbrev-ref", "@{upstream}"]);
    assert_eq!(upstream, "origin/feature/login");
}

#[test]
fn create_branch_uses_hotfix_prefix() {
    let fixture = Fixture::initialized();
    let mut wf = fixture.workflow(ScriptedUi::new());

    let created = wf.create_branch("crash", BranchKind::Hotfix).unwrap();
    assert_eq!(created, "hotfix/crash");
}

#[test]
fn duplicate_branch_is_rejected_without_mutation() {
    let fixture = Fixture::initialized();
    let mut wf = fixture.workflow(ScriptedUi::new());
    wf.create_branch("login", BranchKind::Feature).unwrap();

    let err = wf.create_branch("login", BranchKind::Feature).unwrap_err();
    assert!(matches!(err, FlowError::DuplicateBranch(name) if name == "feature/login"));
    // the failed attempt must not have switched branches
    assert_eq!(fixture.current_branch(), "feature/login");
}

#[test]
fn create_branch_fails_when_master_diverged() {
    let fixture = Fixture::initialized();
    // local master moves ahead of origin/master
    fixture.commit_file("local.txt", "x", "local-only work");

    let mut wf = fixture.workflow(ScriptedUi::new());
    let err = wf.create_branch("login", BranchKind::Feature).unwrap_err();
    assert!(matches!(err, FlowError::Diverged { .. }));
    assert!(!fixture.branch_exists("feature/login"));
}
