//! Full lifecycle: branch, test, publish, finish

use branchflow::error::FlowError;
use branchflow::workflow::BranchKind;

use crate::helpers::{Fixture, ScriptedUi};

#[test]
fn feature_travels_from_branch_to_tagged_master() {
    let fixture = Fixture::initialized();

    let mut wf = fixture.workflow(ScriptedUi::new());
    wf.create_branch("login", BranchKind::Feature).unwrap();
    fixture.commit_file("login.rs", "fn login() {}", "add login");
    fixture.git(&["push"]);

    assert!(wf.start_test_branch().unwrap());
    assert_eq!(fixture.current_branch(), "feature/login");

    assert!(wf.publish_current_branch().unwrap());
    assert_eq!(fixture.current_branch(), "feature/login");

    let mut wf = fixture.workflow(ScriptedUi::new().prompt_next(Some("1.0.0")));
    assert!(wf.publish_finish().unwrap());

    // master carries the work, tagged and pushed
    assert!(wf.git().tag_exists("1.0.0").unwrap());
    assert_eq!(
        fixture.git(&["rev-parse", "master"]),
        fixture.git(&["rev-parse", "origin/master"])
    );
    fixture.git(&["checkout", "master"]);
    assert!(fixture.repo().join("login.rs").is_file());

    // the work branch is retired on both sides
    assert!(!fixture.branch_exists("feature/login"));
    assert!(!fixture.branch_exists("origin/feature/login"));
}

#[test]
fn finish_refuses_unpublished_branch() {
    let fixture = Fixture::initialized();
    let mut wf = fixture.workflow(ScriptedUi::new());
    wf.create_branch("login", BranchKind::Feature).unwrap();
    fixture.commit_file("login.rs", "fn login() {}", "add login");
    fixture.git(&["push"]);

    let err = wf.publish_finish().unwrap_err();
    assert!(matches!(err, FlowError::NotYetPublished(name) if name == "feature/login"));
    // no merge happened
    assert_eq!(
        fixture.git(&["rev-parse", "master"]),
        fixture.git(&["rev-parse", "origin/master"])
    );
}

#[test]
fn finish_rejects_duplicate_tag_before_merging() {
    let fixture = Fixture::initialized();
    let mut wf = fixture.workflow(ScriptedUi::new());
    wf.create_branch("login", BranchKind::Feature).unwrap();
    fixture.commit_file("login.rs", "fn login() {}", "add login");
    fixture.git(&["push"]);
    assert!(wf.publish_current_branch().unwrap());

    fixture.git(&["tag", "-a", "1.0.0", "-m", "taken"]);
    let master_before = fixture.git(&["rev-parse", "master"]);

    let mut wf = fixture.workflow(ScriptedUi::new().prompt_next(Some("1.0.0")));
    let err = wf.publish_finish().unwrap_err();
    assert!(matches!(err, FlowError::DuplicateTag(name) if name == "1.0.0"));
    assert_eq!(fixture.git(&["rev-parse", "master"]), master_before);
}
