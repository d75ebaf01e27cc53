//! Domain pattern value object
//!
//! A `tree_focus` pattern is classified once, when the configuration is
//! loaded, into one of three variants. Matching is then a flat dispatch
//! over the variant with no further inspection of the pattern text.

use std::fmt;

use globset::{GlobBuilder, GlobMatcher};

use super::domain_name::has_glob_meta;
use super::path::{ancestors, is_within, RelPath};

/// How a path pattern selects files from the project tree.
#[derive(Debug, Clone)]
pub enum DomainPattern {
    /// A literal path: the file itself, or a directory and its subtree
    Exact(RelPath),
    /// A glob; `*` stops at `/`, `**` spans any depth
    Glob { source: String, matcher: GlobMatcher },
    /// A directory reference (written with a trailing `/`); empty = root
    Prefix(RelPath),
}

impl DomainPattern {
    /// Classify and validate a raw pattern string.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("pattern is empty".to_string());
        }

        let unified = trimmed.replace('\\', "/");

        if unified.split('/').any(has_glob_meta) {
            let glob_text = unified.trim_start_matches("./");
            if glob_text.starts_with('/') {
                return Err("absolute paths are not allowed".to_string());
            }
            if glob_text.split('/').any(|s| s == "..") {
                return Err("path contains traversal components (..)".to_string());
            }
            let matcher = GlobBuilder::new(glob_text)
                .literal_separator(true)
                .build()
                .map_err(|e| e.kind().to_string())?
                .compile_matcher();
            return Ok(Self::Glob {
                source: glob_text.to_string(),
                matcher,
            });
        }

        let path = RelPath::parse(&unified).map_err(|e| e.to_string())?;
        if unified.ends_with('/') || path.is_root() {
            Ok(Self::Prefix(path))
        } else {
            Ok(Self::Exact(path))
        }
    }

    /// Pattern covering the whole project.
    pub fn whole_project() -> Self {
        Self::Prefix(RelPath::root())
    }

    /// Whether `file` (a project-relative file path) is selected.
    ///
    /// `is_dir` answers whether a relative path names a directory in the
    /// project tree.
    pub fn matches_file(&self, file: &str, is_dir: impl Fn(&str) -> bool) -> bool {
        match self {
            Self::Exact(path) => path.contains(file),
            Self::Prefix(path) => {
                if path.is_root() {
                    return true;
                }
                is_dir(path.as_str()) && is_within(path.as_str(), file)
            }
            Self::Glob { matcher, .. } => {
                matcher.is_match(file) || ancestors(file).any(|dir| matcher.is_match(dir))
            }
        }
    }

    /// Original pattern text, normalized.
    pub fn source(&self) -> String {
        match self {
            Self::Exact(path) => path.to_string(),
            Self::Glob { source, .. } => source.clone(),
            Self::Prefix(path) if path.is_root() => ".".to_string(),
            Self::Prefix(path) => format!("{}/", path),
        }
    }

    /// Text that parses back to an equivalent pattern.
    ///
    /// Directory names containing glob metacharacters (`app/[id]`) are
    /// written as an escaped glob, which still selects the whole subtree.
    pub fn to_config_text(&self) -> String {
        match self {
            Self::Exact(path) | Self::Prefix(path) if has_glob_meta(path.as_str()) => {
                escape_glob(path.as_str())
            }
            other => other.source(),
        }
    }

    /// Short variant label, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Exact(_) => "exact",
            Self::Glob { .. } => "glob",
            Self::Prefix(_) => "prefix",
        }
    }
}

fn escape_glob(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len() + 8);
    for c in literal.chars() {
        match c {
            '*' | '?' | '[' | ']' | '{' | '}' => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => out.push(c),
        }
    }
    out
}

impl PartialEq for DomainPattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a == b,
            (Self::Prefix(a), Self::Prefix(b)) => a == b,
            (Self::Glob { source: a, .. }, Self::Glob { source: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for DomainPattern {}

impl fmt::Display for DomainPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_dirs(_: &str) -> bool {
        false
    }

    #[test]
    fn classifies_variants() {
        assert_eq!(DomainPattern::parse("src/app").unwrap().kind(), "exact");
        assert_eq!(DomainPattern::parse("src/app/").unwrap().kind(), "prefix");
        assert_eq!(DomainPattern::parse("src/**/*.rs").unwrap().kind(), "glob");
        assert_eq!(DomainPattern::parse(".").unwrap().kind(), "prefix");
    }

    #[test]
    fn rejects_bad_patterns() {
        assert!(DomainPattern::parse("").is_err());
        assert!(DomainPattern::parse("../up").is_err());
        assert!(DomainPattern::parse("/abs/path").is_err());
        assert!(DomainPattern::parse("src/[abc").is_err());
        assert!(DomainPattern::parse("../**/*.rs").is_err());
    }

    #[test]
    fn exact_matches_file_and_subtree() {
        let p = DomainPattern::parse("backend/api").unwrap();
        assert!(p.matches_file("backend/api/main.py", no_dirs));
        assert!(p.matches_file("backend/api/v1/routes.py", no_dirs));
        assert!(!p.matches_file("backend/apiary/main.py", no_dirs));

        let f = DomainPattern::parse("README.md").unwrap();
        assert!(f.matches_file("README.md", no_dirs));
        assert!(!f.matches_file("docs/README.md", no_dirs));
    }

    #[test]
    fn prefix_requires_directory() {
        let p = DomainPattern::parse("docs/").unwrap();
        assert!(p.matches_file("docs/intro.md", |d| d == "docs"));
        assert!(!p.matches_file("docs/intro.md", no_dirs));
        assert!(DomainPattern::whole_project().matches_file("any/file.txt", no_dirs));
    }

    #[test]
    fn glob_star_stops_at_separator() {
        let p = DomainPattern::parse("src/*.rs").unwrap();
        assert!(p.matches_file("src/lib.rs", no_dirs));
        assert!(!p.matches_file("src/nested/mod.rs", no_dirs));

        let deep = DomainPattern::parse("src/**/*.rs").unwrap();
        assert!(deep.matches_file("src/lib.rs", no_dirs));
        assert!(deep.matches_file("src/a/b/mod.rs", no_dirs));
    }

    #[test]
    fn glob_matching_directory_takes_subtree() {
        let p = DomainPattern::parse("services/*").unwrap();
        assert!(p.matches_file("services/auth/handler.go", no_dirs));
        assert!(p.matches_file("services/README.md", no_dirs));
        assert!(!p.matches_file("tools/auth/handler.go", no_dirs));
    }

    #[test]
    fn source_round_trips_normalized_text() {
        assert_eq!(DomainPattern::parse("./src/app/").unwrap().source(), "src/app/");
        assert_eq!(DomainPattern::parse("./src/*.rs").unwrap().source(), "src/*.rs");
        assert_eq!(DomainPattern::whole_project().source(), ".");
    }

    #[test]
    fn config_text_escapes_literal_metacharacters() {
        let dir = DomainPattern::Prefix(RelPath::parse("app/[id]").unwrap());
        let text = dir.to_config_text();
        assert_eq!(text, "app/[[]id[]]");
        let reparsed = DomainPattern::parse(&text).unwrap();
        assert!(reparsed.matches_file("app/[id]/page.tsx", no_dirs));
        assert!(!reparsed.matches_file("app/i/page.tsx", no_dirs));

        let plain = DomainPattern::parse("src/").unwrap();
        assert_eq!(plain.to_config_text(), "src/");
    }
}
