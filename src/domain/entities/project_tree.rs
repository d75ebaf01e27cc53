//! ProjectTree entity - the scanned project, held in memory
//!
//! Built once per run, up front, then shared read-only by every domain
//! computation. Paths are project-relative and `/`-separated.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ancestors;

/// Snapshot of a project's directories and files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTree {
    root: PathBuf,
    dirs: BTreeSet<String>,
    files: BTreeSet<String>,
}

impl ProjectTree {
    /// Start building a tree rooted at `root`.
    pub fn builder(root: impl Into<PathBuf>) -> ProjectTreeBuilder {
        ProjectTreeBuilder {
            tree: ProjectTree {
                root: root.into(),
                dirs: BTreeSet::new(),
                files: BTreeSet::new(),
            },
        }
    }

    /// Build a tree from file paths alone; parent directories are implied.
    pub fn from_files<I, S>(root: impl Into<PathBuf>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::builder(root);
        for file in files {
            builder.add_file(file.as_ref());
        }
        builder.build()
    }

    /// Absolute (or caller-supplied) project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name of the project root directory, if it has one
    pub fn root_name(&self) -> Option<String> {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
    }

    /// All files, sorted
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    /// All directories (excluding the root), sorted
    pub fn dirs(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    pub fn is_dir(&self, rel: &str) -> bool {
        rel.is_empty() || self.dirs.contains(rel)
    }

    pub fn is_file(&self, rel: &str) -> bool {
        self.files.contains(rel)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn dir_count(&self) -> usize {
        self.dirs.len()
    }

    /// Files beneath `dir` at any depth (`""` = every file), sorted.
    pub fn files_under<'a>(&'a self, dir: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        if dir.is_empty() {
            return Box::new(self.files());
        }
        let prefix = format!("{}/", dir);
        Box::new(
            self.files
                .range(prefix.clone()..)
                .take_while(move |f| f.starts_with(&prefix))
                .map(String::as_str),
        )
    }

    /// Immediate subdirectories of `dir` (`""` = top level), sorted.
    pub fn child_dirs<'a>(&'a self, dir: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.dirs
            .iter()
            .map(String::as_str)
            .filter(move |d| parent_of(d) == dir)
    }

    /// Files directly inside `dir` (not nested), sorted.
    pub fn direct_files<'a>(&'a self, dir: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.files_under(dir).filter(move |f| parent_of(f) == dir)
    }
}

/// Number of segments in a relative path (`""` = 0).
pub fn depth(rel: &str) -> usize {
    if rel.is_empty() {
        0
    } else {
        rel.split('/').count()
    }
}

/// Parent directory of a relative path (`""` for top-level entries).
pub fn parent_of(rel: &str) -> &str {
    rel.rfind('/').map(|i| &rel[..i]).unwrap_or("")
}

/// Mutable phase of a [`ProjectTree`]; consumed by `build`.
#[derive(Debug)]
pub struct ProjectTreeBuilder {
    tree: ProjectTree,
}

impl ProjectTreeBuilder {
    /// Record a file and all of its ancestor directories.
    pub fn add_file(&mut self, rel: &str) -> &mut Self {
        let rel = rel.trim_matches('/');
        if rel.is_empty() {
            return self;
        }
        for dir in ancestors(rel) {
            self.tree.dirs.insert(dir.to_string());
        }
        self.tree.files.insert(rel.to_string());
        self
    }

    /// Record a directory (including empty ones) and its ancestors.
    pub fn add_dir(&mut self, rel: &str) -> &mut Self {
        let rel = rel.trim_matches('/');
        if rel.is_empty() {
            return self;
        }
        for dir in ancestors(rel) {
            self.tree.dirs.insert(dir.to_string());
        }
        self.tree.dirs.insert(rel.to_string());
        self
    }

    pub fn build(self) -> ProjectTree {
        self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectTree {
        ProjectTree::from_files(
            "/work/shop",
            [
                "backend/api/main.py",
                "backend/api/utils.py",
                "backend/api-docs/index.md",
                "frontend/dashboard/app.ts",
                "README.md",
            ],
        )
    }

    #[test]
    fn from_files_infers_directories() {
        let tree = sample();
        assert!(tree.is_dir("backend"));
        assert!(tree.is_dir("backend/api"));
        assert!(tree.is_dir("frontend/dashboard"));
        assert!(!tree.is_dir("README.md"));
        assert!(tree.is_file("README.md"));
        assert_eq!(tree.file_count(), 5);
        assert_eq!(tree.dir_count(), 5);
    }

    #[test]
    fn files_under_respects_segment_boundary() {
        let tree = sample();
        let api: Vec<&str> = tree.files_under("backend/api").collect();
        assert_eq!(api, vec!["backend/api/main.py", "backend/api/utils.py"]);
        assert_eq!(tree.files_under("").count(), 5);
    }

    #[test]
    fn child_dirs_and_direct_files() {
        let tree = sample();
        let top: Vec<&str> = tree.child_dirs("").collect();
        assert_eq!(top, vec!["backend", "frontend"]);
        let direct: Vec<&str> = tree.direct_files("").collect();
        assert_eq!(direct, vec!["README.md"]);
        assert_eq!(tree.direct_files("backend").count(), 0);
    }

    #[test]
    fn builder_keeps_empty_directories() {
        let mut builder = ProjectTree::builder("/p");
        builder.add_dir("empty/inner");
        let tree = builder.build();
        assert!(tree.is_dir("empty"));
        assert!(tree.is_dir("empty/inner"));
        assert_eq!(tree.file_count(), 0);
    }

    #[test]
    fn depth_and_parent() {
        assert_eq!(depth(""), 0);
        assert_eq!(depth("a"), 1);
        assert_eq!(depth("a/b/c"), 3);
        assert_eq!(parent_of("a/b/c"), "a/b");
        assert_eq!(parent_of("a"), "");
        assert_eq!(tree_root_name(), Some("shop".to_string()));
    }

    fn tree_root_name() -> Option<String> {
        sample().root_name()
    }
}
