//! DomainResult entity - the computed output for one domain
//!
//! Created fresh each run and never mutated afterwards.

use crate::domain::value_objects::DomainName;

/// Matched paths and rendered tree for one [`DomainSpec`](super::DomainSpec)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainResult {
    name: DomainName,
    paths: Vec<String>,
    tree: String,
}

impl DomainResult {
    /// `paths` must already be sorted and de-duplicated.
    pub fn new(name: DomainName, paths: Vec<String>, tree: String) -> Self {
        debug_assert!(paths.windows(2).all(|w| w[0] < w[1]));
        Self { name, paths, tree }
    }

    pub fn name(&self) -> &DomainName {
        &self.name
    }

    /// Matched file paths, sorted
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Rendered tree diagram
    pub fn tree(&self) -> &str {
        &self.tree
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
