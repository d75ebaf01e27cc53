//! Generate Options
//!
//! Configuration types for one pipeline run.

use std::path::PathBuf;

/// Options for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Project root to scan
    pub project_root: PathBuf,
    /// Explicit config file; discovered under `.agentrules/` when `None`
    pub config_path: Option<PathBuf>,
    /// Consider `.agentrules/detected_config.yaml` during discovery
    pub use_detected: bool,
    /// Overrides `output.dir` (relative to the project root)
    pub output_dir: Option<String>,
    /// Compose documents but write nothing
    pub dry_run: bool,
    /// Forces uncovered-path reporting on
    pub report_uncovered: bool,
}

impl GenerateOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            config_path: None,
            use_detected: false,
            output_dir: None,
            dry_run: false,
            report_uncovered: false,
        }
    }

    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn with_use_detected(mut self, use_detected: bool) -> Self {
        self.use_detected = use_detected;
        self
    }

    pub fn with_output_dir(mut self, dir: Option<String>) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_report_uncovered(mut self, report: bool) -> Self {
        self.report_uncovered = report;
        self
    }
}
