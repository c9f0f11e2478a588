use devclean::rules::{classify, is_artifact_name, PROJECT_TYPES};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_classify_known_project_types() {
    let cases = [
        ("package.json", "node"),
        ("build.gradle", "java_gradle"),
        ("pom.xml", "java_maven"),
        ("Cargo.toml", "rust"),
        ("CMakeLists.txt", "cmake"),
    ];

    for (marker, expected) in cases {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(marker), "marker contents").unwrap();

        let rule = classify(dir.path())
            .unwrap_or_else(|| panic!("{} should classify as {}", marker, expected));
        assert_eq!(rule.name, expected);
    }
}

#[test]
fn test_classify_unmarked_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "hello").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();

    assert!(
        classify(dir.path()).is_none(),
        "a directory without marker files should not classify"
    );
}

#[test]
fn test_classify_requires_marker_to_be_a_file() {
    let dir = tempdir().unwrap();
    // A directory named like a marker does not count
    fs::create_dir(dir.path().join("package.json")).unwrap();

    assert!(classify(dir.path()).is_none());
}

#[test]
fn test_classify_does_not_look_into_subdirectories() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("Cargo.toml"), "[package]").unwrap();

    assert!(
        classify(dir.path()).is_none(),
        "marker lookup is single-level, not recursive"
    );
}

#[test]
fn test_classify_tie_break_is_table_order() {
    // Multiple markers present: the first rule in the table wins, so the
    // result is reproducible across runs.
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("package.json"), "{}").unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]").unwrap();

    assert_eq!(classify(dir.path()).unwrap().name, "node");
}

#[test]
fn test_structural_set_is_union_of_all_rules() {
    assert!(is_artifact_name("node_modules"));
    assert!(is_artifact_name("target"));
    assert!(is_artifact_name("build"));
    assert!(is_artifact_name("cmake-build-debug"));

    assert!(!is_artifact_name("src"));
    assert!(!is_artifact_name("dist"));
    assert!(!is_artifact_name("Target"), "matching is case-sensitive");

    for rule in PROJECT_TYPES {
        for name in rule.artifact_dirs {
            assert!(
                is_artifact_name(name),
                "{} from rule {} missing from the structural set",
                name,
                rule.name
            );
        }
    }
}
