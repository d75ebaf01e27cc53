//! agentrules - domain boundary files for AI coding assistants
//!
//! agentrules partitions a project into named domains, renders the files of
//! each domain as a directory tree, and writes one agent document per domain
//! that tells an assistant to stay inside those files.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    config_from_directories, parse_tree_directories, GenerateOptions, GenerateResult,
    GenerateUseCase, WatchEvent, WatchOptions, WatchUseCase,
};
pub use config::{Config, FocusEntry, TreeFocus};
pub use domain::entities::{AgentDocument, DomainResult, DomainSpec, ProjectTree};
pub use domain::services::{aggregate, propose_domains, render};
pub use domain::value_objects::{DomainName, DomainPattern, IgnoreMatcher, RunWarning};
pub use error::{AgentRulesError, AgentRulesResult};
pub use infrastructure::{load_ignore, scan_project, LocalFs};
