//! Project scanner
//!
//! Walks the project root once and builds the in-memory [`ProjectTree`].
//! Ignored directories are pruned during the walk. [`IgnoreMatcher`] treats
//! everything beneath an ignored directory as ignored, so nothing pruned
//! here could have been visible to the resolver.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::domain::entities::ProjectTree;
use crate::domain::value_objects::IgnoreMatcher;
use crate::error::{AgentRulesError, AgentRulesResult};

/// Scan `root` into a [`ProjectTree`].
///
/// Built-in filters of the `ignore` crate are disabled: `ignore` decides
/// visibility for directories, the resolver for files. Symlinks are not
/// followed and not recorded.
pub fn scan_project(root: &Path, ignore: &IgnoreMatcher) -> AgentRulesResult<ProjectTree> {
    if !root.is_dir() {
        return Err(AgentRulesError::ProjectNotFound {
            path: root.to_path_buf(),
        });
    }
    let root = std::fs::canonicalize(root).map_err(|e| AgentRulesError::Scan {
        path: root.to_path_buf(),
        message: e.to_string(),
    })?;

    let prune_root = root.clone();
    let prune = ignore.clone();

    let mut walker = WalkBuilder::new(&root);
    walker
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if !is_dir {
                return true;
            }
            match relative(&prune_root, entry.path()) {
                Some(rel) => !prune.is_ignored(&rel, true),
                None => true,
            }
        });

    let mut builder = ProjectTree::builder(root.clone());
    let mut skipped_symlinks = 0usize;

    for entry in walker.build() {
        let entry = entry.map_err(|e| AgentRulesError::Scan {
            path: error_path(&e).unwrap_or_else(|| root.clone()),
            message: e.to_string(),
        })?;

        if entry.depth() == 0 {
            continue;
        }

        let Some(file_type) = entry.file_type() else {
            continue;
        };
        let Some(rel) = relative(&root, entry.path()) else {
            warn!(path = %entry.path().display(), "skipping non-UTF-8 path");
            continue;
        };

        if file_type.is_dir() {
            builder.add_dir(&rel);
        } else if file_type.is_file() {
            builder.add_file(&rel);
        } else {
            skipped_symlinks += 1;
        }
    }

    let tree = builder.build();
    debug!(
        root = %root.display(),
        files = tree.file_count(),
        dirs = tree.dir_count(),
        skipped_symlinks,
        "scanned project"
    );
    Ok(tree)
}

fn relative(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let text = rel.to_str()?;
    Some(text.replace('\\', "/"))
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
