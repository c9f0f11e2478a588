//! Tree traversal with artifact collection and pruning, plus directory size
//! accounting.

use crate::rules;

use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use walkdir::WalkDir;

/// Walk the tree rooted at `root` and collect every artifact directory, in
/// traversal order, with no duplicates.
///
/// A visited directory is an artifact if its name is in the structural
/// artifact-name set (any rule's artifact dir, marker or not), or if its
/// parent carries a marker file for a project type that claims the name.
/// The two checks are a union; either one alone is enough to collect.
///
/// Collected directories are pruned: traversal never continues beneath them,
/// so nothing inside an already-collected artifact is classified or collected
/// again. Unreadable or vanished entries are skipped and the scan continues.
pub fn collect_artifacts(root: &Path) -> Vec<PathBuf> {
    let marked = Arc::new(Mutex::new(HashSet::<PathBuf>::new()));
    let marked_filter = Arc::clone(&marked);

    let walker = WalkBuilder::new(root)
        .hidden(false)
        // Gitignore processing is irrelevant here: artifact directories are
        // almost always ignored, and we must visit them to collect them.
        .git_ignore(false)
        .ignore(false)
        .git_global(false)
        .git_exclude(false)
        .filter_entry(move |entry| {
            // The scan root itself is never a collection candidate.
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }

            let path = entry.path();

            // The walker visits parents before children, so a marked artifact
            // is in the set before anything beneath it shows up here. Refuse
            // descent below marked paths.
            {
                let marked = marked_filter.lock().unwrap();
                if marked.iter().any(|a: &PathBuf| path.starts_with(a)) {
                    return false;
                }
            }

            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => return true,
            };

            // Structural match: the directory name alone is in the union of
            // all artifact-dir names.
            let mut matched = rules::is_artifact_name(name);

            // Marker-confirmed match: the parent directory is a recognized
            // project root and this name belongs to that type's artifact set.
            if !matched {
                if let Some(rule) = path.parent().and_then(rules::classify) {
                    matched = rule.artifact_dirs.contains(&name);
                }
            }

            if matched {
                log::trace!("marked artifact directory {}", path.display());
                marked_filter.lock().unwrap().insert(path.to_path_buf());
                // Still yield this entry so the main loop records it in
                // traversal order; its contents are blocked above.
            }

            true
        })
        .build();

    let mut artifacts = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                // Permission denied or vanished mid-scan; skip and keep going.
                log::warn!("skipping unreadable entry: {}", err);
                continue;
            }
        };

        if marked.lock().unwrap().contains(entry.path()) {
            artifacts.push(entry.into_path());
        }
    }

    artifacts
}

/// Total byte size of all files under `path`, recursing the full subtree.
///
/// Symbolic links are never followed; a symlink contributes the size of the
/// link file itself, not its target. Entries that cannot be read contribute
/// zero and are skipped.
pub fn directory_size(path: &Path) -> u64 {
    let mut total = 0u64;

    for entry in WalkDir::new(path).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("skipping entry while sizing {}: {}", path.display(), err);
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_file() || file_type.is_symlink() {
            // With follow_links disabled this is the metadata of the entry
            // itself, so a symlink reports its own length.
            match entry.metadata() {
                Ok(meta) => total += meta.len(),
                Err(err) => {
                    log::debug!("no metadata for {}: {}", entry.path().display(), err);
                }
            }
        }
    }

    total
}
