//! The process-wide cache is global state, so everything touching it lives
//! in this one test binary.

use lifeboat::{load_cached, ArtifactStore};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn write_artifacts(dir: &std::path::Path) {
    fs::write(
        dir.join("titanic_model.json"),
        r#"{ "coefficients": [-1.1, -2.6, -0.04, -0.36, -0.06, 0.002], "intercept": 4.6, "classes": [0, 1] }"#,
    )
    .unwrap();
    fs::write(dir.join("sex_encoder.json"), r#"{ "classes": ["female", "male"] }"#).unwrap();
    fs::write(
        dir.join("feature_names.json"),
        r#"["Pclass", "Sex", "Age", "SibSp", "Parch", "Fare"]"#,
    )
    .unwrap();
}

#[test]
fn test_load_cached_loads_once_and_shares() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());
    let store = ArtifactStore::new(dir.path());

    let first = load_cached(&store).unwrap();
    let second = load_cached(&store).unwrap();
    assert!(Arc::ptr_eq(&first.model, &second.model));
    assert!(Arc::ptr_eq(&first.encoder, &second.encoder));
    assert!(Arc::ptr_eq(&first.schema, &second.schema));

    // Once cached, the bundle is reused even if the files are gone.
    drop(dir);
    let third = load_cached(&store).unwrap();
    assert!(Arc::ptr_eq(&first.model, &third.model));
}
