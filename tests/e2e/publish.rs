//! Test-branch and publish scenarios, including the conflict marker

use branchflow::error::FlowError;
use branchflow::fs::marker;
use branchflow::workflow::BranchKind;

use crate::helpers::{Fixture, ScriptedUi};

fn fixture_with_feature(name: &str) -> Fixture {
    let fixture = Fixture::initialized();
    let mut wf = fixture.workflow(ScriptedUi::new());
    wf.create_branch(name, BranchKind::Feature).unwrap();
    fixture
}

#[test]
fn test_branch_gets_the_merge_and_push() {
    let fixture = fixture_with_feature("login");
    fixture.commit_file("login.rs", "fn login() {}", "add login");
    fixture.git(&["push"]);

    let mut wf = fixture.workflow(ScriptedUi::new());
    assert!(wf.start_test_branch().unwrap());

    // the work landed on test, local and remote, and we are back on the
    // feature branch
    assert_eq!(fixture.current_branch(), "feature/login");
    assert_eq!(
        fixture.git(&["rev-parse", "test"]),
        fixture.git(&["rev-parse", "origin/test"])
    );
    fixture.git(&["checkout", "test"]);
    assert!(fixture.repo().join("login.rs").is_file());
}

#[test]
fn test_branch_declined_changes_nothing() {
    let fixture = fixture_with_feature("login");
    let test_before = fixture.git(&["rev-parse", "test"]);

    let mut wf = fixture.workflow(ScriptedUi::new().confirm_next(false));
    assert!(!wf.start_test_branch().unwrap());
    assert_eq!(fixture.git(&["rev-parse", "test"]), test_before);
}

#[test]
fn test_branch_refused_off_workflow_branches() {
    let fixture = Fixture::initialized();
    fixture.git(&["checkout", "develop"]);

    let mut wf = fixture.workflow(ScriptedUi::new());
    let err = wf.start_test_branch().unwrap_err();
    assert!(matches!(err, FlowError::WrongBranch { .. }));
}

#[test]
fn publish_merges_into_develop_and_returns() {
    let fixture = fixture_with_feature("login");
    fixture.commit_file("login.rs", "fn login() {}", "add login");
    fixture.git(&["push"]);

    let mut wf = fixture.workflow(ScriptedUi::new());
    assert!(wf.publish_current_branch().unwrap());

    assert_eq!(fixture.current_branch(), "feature/login");
    assert_eq!(
        fixture.git(&["rev-parse", "develop"]),
        fixture.git(&["rev-parse", "origin/develop"])
    );
    fixture.git(&["checkout", "develop"]);
    assert!(fixture.repo().join("login.rs").is_file());
}

#[test]
fn publish_requires_the_branch_to_be_pushed() {
    let fixture = Fixture::initialized();
    fixture.git(&["checkout", "-b", "feature/raw", "master"]);

    let mut wf = fixture.workflow(ScriptedUi::new());
    let err = wf.publish_current_branch().unwrap_err();
    assert!(matches!(err, FlowError::MissingRemoteBranch(name) if name == "origin/feature/raw"));
}

#[test]
fn publish_conflict_records_marker_until_resolved() {
    let fixture = fixture_with_feature("login");
    fixture.commit_file("c.txt", "feature side", "feature change");
    fixture.git(&["push"]);

    fixture.git(&["checkout", "develop"]);
    fixture.commit_file("c.txt", "develop side", "develop change");
    fixture.git(&["push"]);
    fixture.git(&["checkout", "feature/login"]);

    let mut wf = fixture.workflow(ScriptedUi::new());
    let err = wf.publish_current_branch().unwrap_err();
    assert!(matches!(
        err,
        FlowError::MergeConflict { ref target, .. } if target == "develop"
    ));

    // left on develop mid-conflict with the marker recorded
    assert_eq!(fixture.current_branch(), "develop");
    assert!(marker::exists(fixture.repo()));
    assert_eq!(
        wf.git().conflicting_files().unwrap(),
        vec!["c.txt".to_string()]
    );

    // a publish retry while the tree is still conflicted is blocked, even
    // though the conflict stranded us on develop rather than a work branch
    let err = wf.publish_current_branch().unwrap_err();
    assert!(matches!(err, FlowError::UnresolvedConflict(_)));
    let err = wf.publish_branch(BranchKind::Feature).unwrap_err();
    assert!(matches!(err, FlowError::UnresolvedConflict(_)));

    // resolve, conclude the merge, push, and retry from the feature branch
    std::fs::write(fixture.repo().join("c.txt"), "resolved").unwrap();
    fixture.git(&["add", "c.txt"]);
    fixture.git(&["commit", "--no-edit"]);
    fixture.git(&["push"]);
    fixture.git(&["checkout", "feature/login"]);

    let mut wf = fixture.workflow(ScriptedUi::new());
    assert!(wf.publish_current_branch().unwrap());
    assert!(!marker::exists(fixture.repo()));
}
