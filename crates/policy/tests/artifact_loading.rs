use std::path::PathBuf;

use medstock_core::{Action, Observation};
use medstock_policy::{ArtifactError, Policy, load_policy};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn loads_fixture_and_answers_greedily() {
    let policy = load_policy(fixture("tiny_dqn.json")).expect("fixture should load");

    assert_eq!(policy.name(), "tiny_dqn");
    assert_eq!(policy.algorithm(), "dqn");
    assert_eq!(policy.input_dim(), Some(4));
    assert_eq!(policy.n_actions(), Some(3));

    // inventory=[1.0, 2.0], pipeline=[0.5], forecast=3.0
    // hidden = relu([1.0, 2.0, 3.5]); q = [1.0, 2.0, 2.5]
    let obs = Observation::new(vec![1.0, 2.0], vec![0.5], 3.0);
    assert_eq!(policy.predict(&obs.to_features()).unwrap(), Action::new(2));

    // hidden = relu([4.0, 0.0, 0.0]); q = [4.0, 0.0, -1.0]
    let obs = Observation::new(vec![4.0, 0.0], vec![0.0], 0.0);
    assert_eq!(policy.predict(&obs.to_features()).unwrap(), Action::new(0));
}

#[test]
fn loads_fixture_by_bare_name() {
    let policy = load_policy(fixture("tiny_dqn")).expect("bare name should resolve to .json");
    assert_eq!(policy.name(), "tiny_dqn");
}

#[test]
fn missing_artifact_names_the_path() {
    let err = load_policy(fixture("absent.json")).unwrap_err();
    assert!(matches!(err, ArtifactError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
