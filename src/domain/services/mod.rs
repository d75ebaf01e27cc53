//! Domain Services
//!
//! Pure logic over an in-memory project tree. Nothing here touches the
//! file system.

mod aggregator;
mod auto_analyzer;
mod document;
mod resolver;
mod tree_renderer;

pub use aggregator::{aggregate, AggregateOptions, Aggregation};
pub use auto_analyzer::{
    analyze, propose_domains, AnalyzerOptions, Proposal, RoleVocabulary, STANDARD_ROLES,
};
pub use document::{compose, compose_all, DEFAULT_PREFIX};
pub use resolver::{Resolution, Resolver};
pub use tree_renderer::{render, TreeNode, EMPTY_MARKER};
