//! Domain Entities
//!
//! - `ProjectTree` - the scanned project, shared read-only
//! - `DomainSpec` - a named domain and its patterns
//! - `DomainResult` - matched paths and rendered tree for one domain
//! - `AgentDocument` - the markdown file written for one domain

mod agent_document;
mod domain_result;
mod domain_spec;
mod project_tree;

pub use agent_document::AgentDocument;
pub use domain_result::DomainResult;
pub use domain_spec::{validate_specs, DomainSpec};
pub use project_tree::{depth, parent_of, ProjectTree, ProjectTreeBuilder};
