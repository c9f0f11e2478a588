//! The fixed project-type rule table and directory classification.

use std::path::Path;

/// A known project type: marker files that identify a project root of this
/// type, and the artifact directories that type is allowed to regenerate.
#[derive(Debug)]
pub struct ProjectTypeRule {
    pub name: &'static str,
    /// Any one of these present as a regular file directly inside a directory
    /// marks it as a project root of this type.
    pub markers: &'static [&'static str],
    /// Subdirectory names (relative to the project root) that are safe to
    /// delete once the project type is confirmed.
    pub artifact_dirs: &'static [&'static str],
}

/// The built-in rule table. Declaration order is the classifier's tie-break:
/// the first rule with a matching marker wins.
pub const PROJECT_TYPES: &[ProjectTypeRule] = &[
    ProjectTypeRule {
        name: "node",
        markers: &["package.json"],
        artifact_dirs: &["node_modules"],
    },
    ProjectTypeRule {
        name: "java_gradle",
        markers: &["build.gradle"],
        artifact_dirs: &["build", "target"],
    },
    ProjectTypeRule {
        name: "java_maven",
        markers: &["pom.xml"],
        artifact_dirs: &["target"],
    },
    ProjectTypeRule {
        name: "rust",
        markers: &["Cargo.toml"],
        artifact_dirs: &["target"],
    },
    ProjectTypeRule {
        name: "cmake",
        markers: &["CMakeLists.txt"],
        artifact_dirs: &[
            "cmake-build-debug",
            "cmake-build-release",
            "cmake-build-relwithdebinfo",
            "cmake-build-minsizerel",
        ],
    },
];

/// Determine which project type a directory belongs to, by probing for each
/// rule's marker files directly inside it (non-recursive). Returns the first
/// matching rule in table order, or `None`.
pub fn classify(dir: &Path) -> Option<&'static ProjectTypeRule> {
    PROJECT_TYPES
        .iter()
        .find(|rule| rule.markers.iter().any(|m| dir.join(m).is_file()))
}

/// Check a directory name against the union of every rule's artifact-dir
/// names. This is the structural match: it fires regardless of whether any
/// marker file confirms the owning project type.
pub fn is_artifact_name(name: &str) -> bool {
    PROJECT_TYPES
        .iter()
        .any(|rule| rule.artifact_dirs.contains(&name))
}
