//! Domain aggregator
//!
//! Runs the resolver once, then renders a tree per domain.

use crate::domain::entities::{DomainResult, DomainSpec, ProjectTree};
use crate::domain::value_objects::{IgnoreMatcher, RunWarning};
use crate::error::AgentRulesResult;

use super::resolver::Resolver;
use super::tree_renderer::render;

/// Knobs for one aggregation
#[derive(Debug, Clone, Default)]
pub struct AggregateOptions {
    /// Extension filter passed to the resolver (empty = all files)
    pub include_extensions: Vec<String>,
    /// Add an `UncoveredPaths` warning when files belong to no domain
    pub report_uncovered: bool,
}

/// Everything one run produces before documents are composed
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// One result per spec, in configuration order
    pub results: Vec<DomainResult>,
    pub warnings: Vec<RunWarning>,
    /// Visible files outside every domain; filled only when reporting
    pub uncovered: Vec<String>,
}

/// Resolve and render every domain.
pub fn aggregate(
    specs: &[DomainSpec],
    tree: &ProjectTree,
    ignore: &IgnoreMatcher,
    options: &AggregateOptions,
) -> AgentRulesResult<Aggregation> {
    let resolution = Resolver::new(tree, ignore)
        .with_extensions(&options.include_extensions)
        .resolve(specs)?;

    let results = resolution
        .domains
        .into_iter()
        .map(|(name, paths)| {
            let diagram = render(&paths);
            DomainResult::new(name, paths, diagram)
        })
        .collect();

    let mut warnings = resolution.warnings;
    let mut uncovered = Vec::new();
    if options.report_uncovered && !resolution.uncovered.is_empty() {
        warnings.push(RunWarning::uncovered(&resolution.uncovered));
        uncovered = resolution.uncovered;
    }

    Ok(Aggregation {
        results,
        warnings,
        uncovered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::tree_renderer::EMPTY_MARKER;
    use std::path::Path;

    fn tree() -> ProjectTree {
        ProjectTree::from_files(
            "/p",
            [
                "backend/api/main.py",
                "backend/api/utils.py",
                "frontend/dashboard/app.ts",
                "docs/guide.md",
            ],
        )
    }

    #[test]
    fn empty_domain_renders_marker() {
        let (rules, _) =
            IgnoreMatcher::from_content(Path::new("/p"), Path::new("/p/.gitignore"), "*.ts");
        let specs = vec![
            DomainSpec::parse("api", &["backend/api"]).unwrap(),
            DomainSpec::parse("dash", &["frontend/dashboard"]).unwrap(),
        ];
        let agg = aggregate(&specs, &tree(), &rules, &AggregateOptions::default()).unwrap();

        assert_eq!(agg.results.len(), 2);
        assert_eq!(agg.results[0].name().as_str(), "api");
        assert!(agg.results[0].tree().contains("main.py"));
        assert_eq!(agg.results[1].tree(), EMPTY_MARKER);
        assert!(agg.results[1].is_empty());
    }

    #[test]
    fn uncovered_paths_reported_on_request() {
        let specs = vec![DomainSpec::parse("api", &["backend/api"]).unwrap()];
        let rules = IgnoreMatcher::empty();

        let silent = aggregate(&specs, &tree(), &rules, &AggregateOptions::default()).unwrap();
        assert!(silent.warnings.is_empty());
        assert!(silent.uncovered.is_empty());

        let options = AggregateOptions {
            report_uncovered: true,
            ..Default::default()
        };
        let loud = aggregate(&specs, &tree(), &rules, &options).unwrap();
        assert_eq!(
            loud.uncovered,
            vec![
                "docs/guide.md".to_string(),
                "frontend/dashboard/app.ts".to_string()
            ]
        );
        assert!(matches!(
            loud.warnings[0],
            RunWarning::UncoveredPaths { count: 2, .. }
        ));
    }

    #[test]
    fn results_are_deterministic() {
        let specs = vec![
            DomainSpec::parse("all", &["."]).unwrap(),
            DomainSpec::parse("docs", &["docs/"]).unwrap(),
        ];
        let rules = IgnoreMatcher::empty();
        let a = aggregate(&specs, &tree(), &rules, &AggregateOptions::default()).unwrap();
        let b = aggregate(&specs, &tree(), &rules, &AggregateOptions::default()).unwrap();
        assert_eq!(a.results, b.results);
    }
}
