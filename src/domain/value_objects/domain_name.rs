//! Domain name value object
//!
//! Names end up in output filenames, so they are validated on construction
//! and sanitized on the way to disk.

use std::fmt;

use super::path::RelPath;

/// Validated domain name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainName(String);

impl DomainName {
    /// Validate a configured name.
    pub fn new(raw: &str) -> Result<Self, String> {
        let name = raw.trim();
        if name.is_empty() {
            return Err("name is empty".to_string());
        }
        if name.contains('/') || name.contains('\\') {
            return Err("name must not contain path separators".to_string());
        }
        if name.chars().any(char::is_control) {
            return Err("name must not contain control characters".to_string());
        }
        if name.chars().all(|c| c == '.') {
            return Err("name must not consist of dots only".to_string());
        }
        Ok(Self(name.to_string()))
    }

    /// Derive a name from a pattern's literal (non-glob) segments.
    ///
    /// `backend/api` → `backend_api`, `frontend/**/*.tsx` → `frontend`.
    /// Patterns with no literal segment fall back to their sanitized text,
    /// then to `root`.
    pub fn derive(pattern: &str) -> Self {
        let literal: Vec<&str> = pattern
            .split(['/', '\\'])
            .filter(|s| !s.is_empty() && *s != "." && !has_glob_meta(s))
            .collect();

        let joined = if literal.is_empty() {
            sanitize(pattern)
        } else {
            sanitize(&literal.join("_"))
        };

        if joined.is_empty() {
            Self("root".to_string())
        } else {
            Self(joined)
        }
    }

    /// Derive a name from a directory path (all segments joined with `_`).
    pub fn from_path(path: &RelPath) -> Self {
        if path.is_root() {
            return Self("root".to_string());
        }
        Self::derive(path.as_str())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filesystem-safe stem: anything outside `[A-Za-z0-9_-]` becomes `_`,
    /// runs of `_` collapse, and leading/trailing `_` are trimmed.
    pub fn file_stem(&self) -> String {
        let stem = sanitize(&self.0);
        if stem.is_empty() {
            "domain".to_string()
        } else {
            stem
        }
    }

    /// Output file name: `<prefix><file_stem>.md`.
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}{}.md", prefix, self.file_stem())
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a segment contains glob metacharacters.
pub fn has_glob_meta(s: &str) -> bool {
    s.contains(['*', '?', '[', ']', '{', '}'])
}

fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_underscore = false;
    for c in raw.chars() {
        let mapped = if c.is_ascii_alphanumeric() || c == '-' {
            c
        } else {
            '_'
        };
        if mapped == '_' {
            if last_underscore {
                continue;
            }
            last_underscore = true;
        } else {
            last_underscore = false;
        }
        out.push(mapped);
    }
    out.trim_matches('_').to_string()
}
