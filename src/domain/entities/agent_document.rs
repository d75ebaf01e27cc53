//! AgentDocument entity - a rendered agent boundary file
//!
//! Documents are composed in memory for every domain before anything is
//! written, so a configuration error never leaves partial output behind.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Markdown document ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDocument {
    /// Domain the document describes
    domain: String,
    /// File name (no directory component)
    file_name: String,
    /// Markdown body
    content: String,
}

impl AgentDocument {
    pub fn new(
        domain: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Destination path inside `output_dir`.
    pub fn path_in(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.file_name)
    }

    /// SHA-256 of the content, used to skip unchanged writes.
    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_in_joins_file_name() {
        let doc = AgentDocument::new("api", "agent_api.md", "# Domain: api\n");
        assert_eq!(
            doc.path_in(Path::new("/project")),
            PathBuf::from("/project/agent_api.md")
        );
    }

    #[test]
    fn hash_tracks_content() {
        let a = AgentDocument::new("api", "agent_api.md", "one");
        let b = AgentDocument::new("api", "agent_api.md", "one");
        let c = AgentDocument::new("api", "agent_api.md", "two");
        assert_eq!(a.hash(), b.hash());
        assert_ne!(a.hash(), c.hash());
    }
}
