//! Relative Path Value Object
//!
//! A validated, normalized project-relative path:
//! - `/`-separated, even when written with `\`
//! - no leading `./`, no trailing `/`
//! - no `..` components, not absolute
//!
//! The empty path denotes the project root.

use std::fmt;

/// Error when path validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => {
                write!(f, "path contains traversal components (..)")
            }
            PathError::AbsoluteNotAllowed => {
                write!(f, "absolute paths are not allowed")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A normalized project-relative path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelPath(String);

impl RelPath {
    /// Parse and normalize a user-supplied path.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let unified = raw.trim().replace('\\', "/");

        if unified.starts_with('/') || looks_like_drive(&unified) {
            return Err(PathError::AbsoluteNotAllowed);
        }

        let mut segments = Vec::new();
        for segment in unified.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return Err(PathError::ContainsTraversal),
                s => segments.push(s),
            }
        }

        Ok(Self(segments.join("/")))
    }

    /// The project root.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Whether this is the project root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments (empty for the root).
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// True when `path` equals this path or lives beneath it.
    pub fn contains(&self, path: &str) -> bool {
        is_within(&self.0, path)
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str(".")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// True when `path` equals `dir` or lives beneath it (`dir` empty = root).
pub fn is_within(dir: &str, path: &str) -> bool {
    if dir.is_empty() {
        return true;
    }
    match path.strip_prefix(dir) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

/// Every proper ancestor directory of a relative path, shallowest first.
///
/// `a/b/c.txt` yields `a`, `a/b`.
pub fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices('/').map(move |(i, _)| &path[..i])
}

fn looks_like_drive(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
