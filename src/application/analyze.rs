//! Project analysis for `init` and `auto-config`
//!
//! Scans the project with the configured ignore rules and returns the
//! analyzer's proposals without running the rest of the pipeline.

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::domain::entities::DomainSpec;
use crate::domain::services::{analyze, Proposal};
use crate::error::{AgentRulesError, AgentRulesResult};
use crate::infrastructure::{load_ignore, scan_project, IgnoreSources};

/// Domain proposals for the project at `project_root`.
///
/// `config` supplies the ignore sources, the role vocabulary and the
/// analyzer limits; its `tree_focus` is not consulted.
pub fn analyze_project(project_root: &Path, config: &Config) -> AgentRulesResult<Vec<Proposal>> {
    if !project_root.is_dir() {
        return Err(AgentRulesError::ProjectNotFound {
            path: project_root.to_path_buf(),
        });
    }
    let root = std::fs::canonicalize(project_root)?;

    let (ignore, _) = load_ignore(&root, &IgnoreSources::from_config(config));
    let tree = scan_project(&root, &ignore)?;
    let proposals = analyze(&tree, &ignore, &config.vocabulary(), &config.analyzer_options());

    info!(proposals = proposals.len(), "analyzed project layout");
    Ok(proposals)
}

/// A config holding the given proposals, with `defaults` for every other
/// section.
pub fn config_from_proposals(title: &str, proposals: &[Proposal], defaults: &Config) -> Config {
    let specs: Vec<DomainSpec> = proposals.iter().map(|p| p.spec.clone()).collect();
    let generated = Config::from_specs(title.trim(), &specs);
    Config {
        project_title: if title.trim().is_empty() {
            defaults.project_title.clone()
        } else {
            generated.project_title
        },
        tree_focus: generated.tree_focus,
        ..defaults.clone()
    }
}
