//! DomainSpec entity - a named domain and its ordered path patterns

use std::collections::{HashMap, HashSet};

use crate::domain::value_objects::{DomainName, DomainPattern};
use crate::error::{AgentRulesError, AgentRulesResult};

/// A named domain with one or more path patterns
///
/// Domains are independent: membership is not exclusive, so a file may
/// belong to several specs at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSpec {
    name: DomainName,
    patterns: Vec<DomainPattern>,
}

impl DomainSpec {
    /// Create a spec from already-validated parts.
    pub fn new(name: DomainName, patterns: Vec<DomainPattern>) -> AgentRulesResult<Self> {
        if patterns.is_empty() {
            return Err(AgentRulesError::EmptyDomainSpec {
                domain: name.to_string(),
            });
        }
        Ok(Self { name, patterns })
    }

    /// Validate a raw name and raw pattern strings.
    pub fn parse<S: AsRef<str>>(name: &str, patterns: &[S]) -> AgentRulesResult<Self> {
        let name = DomainName::new(name).map_err(|reason| AgentRulesError::InvalidDomainName {
            name: name.to_string(),
            reason,
        })?;

        let patterns = patterns
            .iter()
            .map(|raw| {
                DomainPattern::parse(raw.as_ref()).map_err(|message| {
                    AgentRulesError::InvalidPattern {
                        domain: name.to_string(),
                        pattern: raw.as_ref().to_string(),
                        message,
                    }
                })
            })
            .collect::<AgentRulesResult<Vec<_>>>()?;

        Self::new(name, patterns)
    }

    /// A spec for a bare pattern; the name is derived from the pattern.
    pub fn from_bare(pattern: &str) -> AgentRulesResult<Self> {
        let name = DomainName::derive(pattern);
        Self::parse(name.as_str(), &[pattern])
    }

    /// A spec covering the entire project.
    pub fn whole_project(name: DomainName) -> Self {
        Self {
            name,
            patterns: vec![DomainPattern::whole_project()],
        }
    }

    pub fn name(&self) -> &DomainName {
        &self.name
    }

    pub fn patterns(&self) -> &[DomainPattern] {
        &self.patterns
    }

    /// Output file name for this domain (`<prefix><stem>.md`).
    pub fn file_name(&self, prefix: &str) -> String {
        self.name.file_name(prefix)
    }
}

/// Reject duplicate names and names that would share an output file.
pub fn validate_specs(specs: &[DomainSpec]) -> AgentRulesResult<()> {
    let mut names: HashSet<&str> = HashSet::new();
    let mut stems: HashMap<String, &str> = HashMap::new();

    for spec in specs {
        let name = spec.name().as_str();
        if !names.insert(name) {
            return Err(AgentRulesError::DuplicateDomain {
                name: name.to_string(),
            });
        }

        let stem = spec.name().file_stem();
        if let Some(first) = stems.get(&stem) {
            return Err(AgentRulesError::OutputCollision {
                first: first.to_string(),
                second: name.to_string(),
                file_name: format!("{}.md", stem),
            });
        }
        stems.insert(stem, name);
    }

    Ok(())
}
