//! Ignore patterns value object
//!
//! Gitignore semantics over project-relative paths. Rules are added in
//! order from several sources; the last matching rule decides. As in git,
//! an ignored directory is final: a later `!` rule cannot re-include a path
//! beneath it, only the directory itself. Lines that fail to parse are
//! skipped and reported, never fatal.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::{Path, PathBuf};

use super::RunWarning;

/// Maximum size of a single ignore file (64KB)
pub const MAX_FILE_SIZE: u64 = 65536;

/// Maximum number of patterns taken from a single source
pub const MAX_PATTERNS: usize = 1000;

/// One parsed ignore rule, kept for introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRule {
    /// Pattern text without the `!` prefix
    pub pattern: String,
    /// Leading `!`: re-includes a previously ignored path
    pub negated: bool,
    /// Trailing `/`: matches directories only
    pub dir_only: bool,
    /// File (or pseudo-source) this rule came from
    pub source: PathBuf,
}

impl IgnoreRule {
    fn from_line(line: &str, source: &Path) -> Self {
        let trimmed = line.trim();
        let (negated, body) = match trimmed.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        Self {
            pattern: body.to_string(),
            negated,
            dir_only: body.ends_with('/'),
            source: source.to_path_buf(),
        }
    }
}

/// Compiled, ordered ignore rule set.
///
/// Uses the `ignore` crate for gitignore-compatible pattern matching.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    matcher: Gitignore,
    rules: Vec<IgnoreRule>,
}

impl Default for IgnoreMatcher {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnoreMatcher {
    /// Create an empty rule set (ignores nothing).
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            rules: Vec::new(),
        }
    }

    /// Start building a rule set rooted at `root`.
    pub fn builder(root: &Path) -> IgnoreMatcherBuilder {
        IgnoreMatcherBuilder::new(root)
    }

    /// Parse a single source (for tests and one-off matchers).
    pub fn from_content(root: &Path, source: &Path, content: &str) -> (Self, Vec<RunWarning>) {
        let mut builder = Self::builder(root);
        builder.add_content(source, content);
        builder.build()
    }

    /// Check if a project-relative path is excluded.
    ///
    /// A path beneath an ignored directory is ignored as well, whatever
    /// the rules say about the path itself.
    pub fn is_ignored(&self, rel_path: &str, is_dir: bool) -> bool {
        if rel_path.is_empty() {
            return false;
        }
        let path = Path::new(rel_path);
        let under_ignored_dir = path
            .ancestors()
            .skip(1)
            .filter(|dir| !dir.as_os_str().is_empty())
            .any(|dir| self.matcher.matched(dir, true).is_ignore());

        under_ignored_dir || self.matcher.matched(path, is_dir).is_ignore()
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[IgnoreRule] {
        &self.rules
    }

    /// Get the number of rules loaded.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Check if this is an empty rule set.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Accumulates rules from multiple sources, in order.
pub struct IgnoreMatcherBuilder {
    builder: GitignoreBuilder,
    rules: Vec<IgnoreRule>,
    warnings: Vec<RunWarning>,
}

impl IgnoreMatcherBuilder {
    fn new(root: &Path) -> Self {
        Self {
            builder: GitignoreBuilder::new(root),
            rules: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add every rule from an ignore-file body.
    ///
    /// Empty lines and `#` comments are skipped. Lines that fail to compile
    /// and lines past [`MAX_PATTERNS`] produce a warning each.
    pub fn add_content(&mut self, source: &Path, content: &str) -> &mut Self {
        let mut accepted = 0usize;

        for (line_num, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if accepted >= MAX_PATTERNS {
                self.warnings.push(RunWarning::IgnoreRuleSkipped {
                    file: source.to_path_buf(),
                    line: line_num + 1,
                    pattern: trimmed.to_string(),
                    message: format!("exceeds {} pattern limit", MAX_PATTERNS),
                });
                continue;
            }

            if self.add_rule(source, line_num + 1, line) {
                accepted += 1;
            }
        }

        self
    }

    /// Add one generated rule (tool exclusions, configured dirs).
    pub fn add_line(&mut self, source: &Path, line: &str) -> &mut Self {
        self.add_rule(source, 0, line);
        self
    }

    /// Record that a whole ignore file was skipped.
    pub fn skip_file(&mut self, source: &Path, reason: impl Into<String>) -> &mut Self {
        self.warnings.push(RunWarning::IgnoreFileSkipped {
            file: source.to_path_buf(),
            reason: reason.into(),
        });
        self
    }

    fn add_rule(&mut self, source: &Path, line_num: usize, line: &str) -> bool {
        match self.builder.add_line(Some(source.to_path_buf()), line) {
            Ok(_) => {
                self.rules.push(IgnoreRule::from_line(line, source));
                true
            }
            Err(e) => {
                self.warnings.push(RunWarning::IgnoreRuleSkipped {
                    file: source.to_path_buf(),
                    line: line_num,
                    pattern: line.trim().to_string(),
                    message: e.to_string(),
                });
                false
            }
        }
    }

    /// Compile the rule set.
    ///
    /// Individual lines are validated as they are added, so a build failure
    /// here leaves an empty matcher plus a warning rather than an error.
    pub fn build(self) -> (IgnoreMatcher, Vec<RunWarning>) {
        let mut warnings = self.warnings;
        match self.builder.build() {
            Ok(matcher) => (
                IgnoreMatcher {
                    matcher,
                    rules: self.rules,
                },
                warnings,
            ),
            Err(e) => {
                warnings.push(RunWarning::IgnoreFileSkipped {
                    file: PathBuf::from("<ignore rules>"),
                    reason: e.to_string(),
                });
                (IgnoreMatcher::empty(), warnings)
            }
        }
    }
}
