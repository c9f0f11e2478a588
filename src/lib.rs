//! devclean — find and remove build artifacts from project trees.
//!
//! devclean walks a directory tree looking for project roots, identified by
//! marker files (`package.json`, `Cargo.toml`, `pom.xml`, ...), and collects
//! the build-artifact subdirectories those project types are known to
//! regenerate (`node_modules`, `target`, `build`, ...). Collected directories
//! can be reported (dry-run) or deleted, with a summary of directories
//! cleaned and bytes freed.
//!
//! Collection unions two detection strategies: a structural match on the
//! directory name alone, and a marker-confirmed match against the parent's
//! project type. Matched directories are pruned from traversal, so a
//! dependency tree with millions of files costs a single directory entry
//! during the scan and is only walked once, for size accounting.

pub mod cleaner;
pub mod format;
pub mod rules;
pub mod scanner;

// Re-export commonly used items
pub use cleaner::{clean, CleanOptions, CleanSummary};
pub use format::human_size;
pub use rules::{classify, is_artifact_name, ProjectTypeRule, PROJECT_TYPES};
pub use scanner::{collect_artifacts, directory_size};
