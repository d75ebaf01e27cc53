//! Generate Result
//!
//! Result types for generate operations.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::{AgentDocument, DomainResult};
use crate::domain::value_objects::{IgnoreMatcher, RunWarning};

/// Where the domain list came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigOrigin {
    /// A config file's `tree_focus`
    File { path: PathBuf },
    /// No config file; the auto-analyzer proposed the domains
    Auto,
}

/// Per-domain summary for views and JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainSummary {
    pub name: String,
    pub file_name: String,
    pub file_count: usize,
}

/// Everything computed before anything is written
#[derive(Debug, Clone)]
pub struct GeneratePlan {
    pub origin: ConfigOrigin,
    pub project_root: PathBuf,
    pub project_title: String,
    pub output_dir: PathBuf,
    pub results: Vec<DomainResult>,
    pub documents: Vec<AgentDocument>,
    pub warnings: Vec<RunWarning>,
    pub uncovered: Vec<String>,
    /// Rules the run used; watch mode filters change events with them
    pub ignore: IgnoreMatcher,
    /// `recurring.interval_secs` after overrides
    pub interval_secs: u64,
}

impl GeneratePlan {
    pub fn summaries(&self) -> Vec<DomainSummary> {
        self.results
            .iter()
            .zip(&self.documents)
            .map(|(r, d)| DomainSummary {
                name: r.name().to_string(),
                file_name: d.file_name().to_string(),
                file_count: r.paths().len(),
            })
            .collect()
    }
}

/// Result of a generate operation
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    pub origin: Option<ConfigOrigin>,
    pub project_title: String,
    pub output_dir: PathBuf,
    pub domains: Vec<DomainSummary>,
    /// Files that were written
    pub written: Vec<PathBuf>,
    /// Files whose content was already current
    pub unchanged: Vec<PathBuf>,
    /// Files a dry run would have written
    pub planned: Vec<PathBuf>,
    /// Write failures, one per document
    pub errors: Vec<String>,
    pub warnings: Vec<RunWarning>,
    /// Filled only when uncovered paths are reported
    pub uncovered: Vec<String>,
}

impl GenerateResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_changes(&self) -> bool {
        !self.written.is_empty()
    }
}
