//! Agent document composer
//!
//! Wraps a [`DomainResult`] in the fixed boundary instructions.

use crate::domain::entities::{AgentDocument, DomainResult};

/// Default output file prefix
pub const DEFAULT_PREFIX: &str = "agent_";

/// Compose the markdown document for one domain.
pub fn compose(result: &DomainResult, project_title: &str, prefix: &str) -> AgentDocument {
    let name = result.name();
    let content = format!(
        "# Domain: {name}\n\
         \n\
         You are an agent that specializes in the `{name}` domain of {title}. \
         Your expertise and responses should focus specifically on the code and files \
         within this directory structure:\n\
         \n\
         ```\n\
         {tree}\n\
         ```\n\
         \n\
         When providing assistance, only reference and modify files within this \
         directory structure. If you need to work with files outside this structure, \
         list the required files and ask the user for permission first.\n",
        name = name,
        title = project_title,
        tree = result.tree(),
    );
    AgentDocument::new(name.as_str(), name.file_name(prefix), content)
}

/// Compose documents for every result, in order.
pub fn compose_all(results: &[DomainResult], project_title: &str, prefix: &str) -> Vec<AgentDocument> {
    results
        .iter()
        .map(|r| compose(r, project_title, prefix))
        .collect()
}
