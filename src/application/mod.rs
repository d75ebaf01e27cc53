//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Orchestrates one run (config, scan, resolve, compose, write)
//! - `WatchUseCase` - Recurring runs on an interval and on file changes
//!
//! ## Services
//!
//! - `analyze` - Analyzer proposals for `init` and `auto-config`
//! - `import` - Build a configuration from a pasted tree diagram

pub mod analyze;
pub mod generate;
pub mod import;
pub mod watch;

pub use analyze::{analyze_project, config_from_proposals};
pub use generate::{
    ConfigOrigin, DomainSummary, GenerateOptions, GeneratePlan, GenerateResult, GenerateUseCase,
};
pub use import::{config_from_directories, parse_tree_directories, COMMON_TOP_DIRS, MEDIA_DIRS};
pub use watch::{
    RunReason, WatchEvent, WatchOptions, WatchUseCase, WatcherState, DEBOUNCE_MS,
    DEFAULT_INTERVAL_SECS,
};
