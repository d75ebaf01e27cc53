//! Error types for agentrules
//!
//! Fatal conditions only. Anything a run can survive is a
//! [`RunWarning`](crate::domain::value_objects::RunWarning) instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for agentrules operations
pub type AgentRulesResult<T> = Result<T, AgentRulesError>;

/// Main error type for agentrules operations
#[derive(Error, Debug)]
pub enum AgentRulesError {
    /// Two domains resolve to the same name
    #[error("duplicate domain name '{name}' in tree_focus")]
    DuplicateDomain { name: String },

    /// Two distinct domain names would write the same output file
    #[error("domains '{first}' and '{second}' would both write {file_name}")]
    OutputCollision {
        first: String,
        second: String,
        file_name: String,
    },

    /// Domain name cannot be used in an output filename
    #[error("invalid domain name '{name}': {reason}")]
    InvalidDomainName { name: String, reason: String },

    /// A tree_focus pattern could not be parsed
    #[error("invalid pattern '{pattern}' in domain '{domain}': {message}")]
    InvalidPattern {
        domain: String,
        pattern: String,
        message: String,
    },

    /// A domain was declared without any pattern
    #[error("domain '{domain}' has no patterns")]
    EmptyDomainSpec { domain: String },

    /// A required configuration field is absent
    #[error("configuration is missing required field '{field}'")]
    MissingField { field: String },

    /// Config file failed to parse
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config file was requested explicitly but does not exist
    #[error("configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Project root does not exist or is not a directory
    #[error("project directory not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// A path could not be read while scanning the project tree
    #[error("failed to scan {path}: {message}")]
    Scan { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// File watcher could not be started
    #[error("watch error: {0}")]
    Watch(String),
}

impl AgentRulesError {
    /// Configuration-level errors abort the run before any output is written.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::DuplicateDomain { .. }
                | Self::OutputCollision { .. }
                | Self::InvalidDomainName { .. }
                | Self::InvalidPattern { .. }
                | Self::EmptyDomainSpec { .. }
                | Self::MissingField { .. }
                | Self::InvalidConfig { .. }
                | Self::ConfigNotFound { .. }
        )
    }
}
