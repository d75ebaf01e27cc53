//! Run warnings
//!
//! Everything that goes wrong without aborting a run. Warnings are
//! collected for the whole run and reported together at the end.

use std::fmt;
use std::path::PathBuf;

use super::ConfigWarning;

/// Maximum number of uncovered paths listed in a warning message.
const UNCOVERED_SAMPLE: usize = 5;

/// A non-fatal condition recorded during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunWarning {
    /// An ignore-file line could not be parsed and was skipped
    IgnoreRuleSkipped {
        file: PathBuf,
        line: usize,
        pattern: String,
        message: String,
    },
    /// A whole ignore file was skipped (too large, unreadable)
    IgnoreFileSkipped { file: PathBuf, reason: String },
    /// A domain pattern matched zero paths
    PatternMatchedNothing { domain: String, pattern: String },
    /// A domain ended up with no files at all
    EmptyDomain { domain: String },
    /// Unknown key in the configuration file
    UnknownConfigKey(ConfigWarning),
    /// Visible files that no domain claims
    UncoveredPaths { count: usize, sample: Vec<String> },
}

impl RunWarning {
    /// Build an uncovered-paths warning from the full list.
    pub fn uncovered(paths: &[String]) -> Self {
        Self::UncoveredPaths {
            count: paths.len(),
            sample: paths.iter().take(UNCOVERED_SAMPLE).cloned().collect(),
        }
    }

    /// Short machine-friendly kind, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IgnoreRuleSkipped { .. } => "ignore_rule_skipped",
            Self::IgnoreFileSkipped { .. } => "ignore_file_skipped",
            Self::PatternMatchedNothing { .. } => "pattern_matched_nothing",
            Self::EmptyDomain { .. } => "empty_domain",
            Self::UnknownConfigKey(_) => "unknown_config_key",
            Self::UncoveredPaths { .. } => "uncovered_paths",
        }
    }
}

impl fmt::Display for RunWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IgnoreRuleSkipped {
                file,
                line,
                pattern,
                message,
            } => write!(
                f,
                "skipped ignore rule at {}:{}: '{}' ({})",
                file.display(),
                line,
                pattern,
                message
            ),
            Self::IgnoreFileSkipped { file, reason } => {
                write!(f, "skipped ignore file {}: {}", file.display(), reason)
            }
            Self::PatternMatchedNothing { domain, pattern } => {
                write!(f, "pattern '{}' in domain '{}' matched no files", pattern, domain)
            }
            Self::EmptyDomain { domain } => write!(f, "domain '{}' has no files", domain),
            Self::UnknownConfigKey(w) => {
                write!(f, "unknown config key '{}' in {}", w.key, w.file.display())?;
                if let Some(line) = w.line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = &w.suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            Self::UncoveredPaths { count, sample } => {
                write!(f, "{} file(s) belong to no domain", count)?;
                if !sample.is_empty() {
                    write!(f, ": {}", sample.join(", "))?;
                    if *count > sample.len() {
                        write!(f, ", ...")?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pattern_matched_nothing() {
        let w = RunWarning::PatternMatchedNothing {
            domain: "dash".to_string(),
            pattern: "frontend/dashboard".to_string(),
        };
        assert_eq!(
            w.to_string(),
            "pattern 'frontend/dashboard' in domain 'dash' matched no files"
        );
    }

    #[test]
    fn display_unknown_key_with_suggestion() {
        let w = RunWarning::UnknownConfigKey(ConfigWarning {
            key: "tree_fcous".to_string(),
            file: PathBuf::from(".agentrules/config.yaml"),
            line: Some(3),
            suggestion: Some("tree_focus".to_string()),
        });
        assert_eq!(
            w.to_string(),
            "unknown config key 'tree_fcous' in .agentrules/config.yaml:3 (did you mean 'tree_focus'?)"
        );
    }

    #[test]
    fn uncovered_samples_first_paths() {
        let paths: Vec<String> = (0..8).map(|i| format!("misc/{}.txt", i)).collect();
        let w = RunWarning::uncovered(&paths);
        match &w {
            RunWarning::UncoveredPaths { count, sample } => {
                assert_eq!(*count, 8);
                assert_eq!(sample.len(), 5);
            }
            other => panic!("unexpected warning {:?}", other),
        }
        assert!(w.to_string().ends_with(", ..."));
    }
}
