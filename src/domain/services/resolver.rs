//! Domain pattern resolver
//!
//! Assigns the visible files of a [`ProjectTree`] to named domains.
//! Visibility is decided once, before any pattern is looked at: an ignored
//! file is invisible to every domain.

use crate::domain::entities::{validate_specs, DomainSpec, ProjectTree};
use crate::domain::value_objects::{DomainName, IgnoreMatcher, RunWarning};
use crate::error::AgentRulesResult;

/// Matched files for every domain, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// `(name, sorted file paths)` per domain
    pub domains: Vec<(DomainName, Vec<String>)>,
    /// Visible files that no domain claimed, sorted
    pub uncovered: Vec<String>,
    pub warnings: Vec<RunWarning>,
}

impl Resolution {
    /// Paths for a domain, by name.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.domains
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, paths)| paths.as_slice())
    }
}

/// Resolves domain specs against one tree and one ignore rule set.
pub struct Resolver<'a> {
    tree: &'a ProjectTree,
    ignore: &'a IgnoreMatcher,
    extensions: Vec<String>,
}

impl<'a> Resolver<'a> {
    pub fn new(tree: &'a ProjectTree, ignore: &'a IgnoreMatcher) -> Self {
        Self {
            tree,
            ignore,
            extensions: Vec::new(),
        }
    }

    /// Only consider files ending in one of `extensions` (`py` or `.py`).
    ///
    /// An empty list keeps every file.
    pub fn with_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.extensions = extensions
            .iter()
            .map(|e| e.as_ref().trim())
            .filter(|e| !e.is_empty())
            .map(|e| {
                if e.starts_with('.') {
                    e.to_string()
                } else {
                    format!(".{}", e)
                }
            })
            .collect();
        self
    }

    /// Whether a file survives the ignore rules and the extension filter.
    pub fn is_visible(&self, file: &str) -> bool {
        if self.ignore.is_ignored(file, false) {
            return false;
        }
        self.extensions.is_empty() || self.extensions.iter().any(|ext| file.ends_with(ext))
    }

    /// Every visible file, sorted.
    pub fn visible_files(&self) -> Vec<&'a str> {
        self.tree.files().filter(|f| self.is_visible(f)).collect()
    }

    /// Resolve all specs.
    ///
    /// Fails only on configuration errors (duplicate names, colliding
    /// output files), and then before any matching happens.
    pub fn resolve(&self, specs: &[DomainSpec]) -> AgentRulesResult<Resolution> {
        validate_specs(specs)?;

        let visible = self.visible_files();
        let mut claimed = vec![false; visible.len()];
        let mut resolution = Resolution::default();

        for spec in specs {
            let mut selected = vec![false; visible.len()];
            let mut pattern_hits = vec![0usize; spec.patterns().len()];

            for (i, file) in visible.iter().enumerate() {
                for (p, pattern) in spec.patterns().iter().enumerate() {
                    if pattern.matches_file(file, |d| self.tree.is_dir(d)) {
                        pattern_hits[p] += 1;
                        selected[i] = true;
                    }
                }
            }

            let paths: Vec<String> = visible
                .iter()
                .zip(&selected)
                .filter(|(_, hit)| **hit)
                .map(|(f, _)| f.to_string())
                .collect();

            if paths.is_empty() {
                resolution.warnings.push(RunWarning::EmptyDomain {
                    domain: spec.name().to_string(),
                });
            } else {
                for (pattern, hits) in spec.patterns().iter().zip(&pattern_hits) {
                    if *hits == 0 {
                        resolution.warnings.push(RunWarning::PatternMatchedNothing {
                            domain: spec.name().to_string(),
                            pattern: pattern.source(),
                        });
                    }
                }
            }

            for (slot, hit) in claimed.iter_mut().zip(&selected) {
                *slot |= *hit;
            }
            resolution.domains.push((spec.name().clone(), paths));
        }

        resolution.uncovered = visible
            .iter()
            .zip(&claimed)
            .filter(|(_, c)| !**c)
            .map(|(f, _)| f.to_string())
            .collect();

        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgentRulesError;
    use std::path::Path;

    fn ignore(content: &str) -> IgnoreMatcher {
        IgnoreMatcher::from_content(Path::new("/p"), Path::new("/p/.gitignore"), content).0
    }

    fn sample_tree() -> ProjectTree {
        ProjectTree::from_files(
            "/p",
            [
                "backend/api/main.py",
                "backend/api/utils.py",
                "frontend/dashboard/app.ts",
            ],
        )
    }

    #[test]
    fn ignored_files_are_invisible_to_every_domain() {
        let tree = sample_tree();
        let rules = ignore("*.ts");
        let specs = vec![
            DomainSpec::parse("api", &["backend/api"]).unwrap(),
            DomainSpec::parse("dash", &["frontend/dashboard"]).unwrap(),
        ];

        let res = Resolver::new(&tree, &rules).resolve(&specs).unwrap();

        assert_eq!(
            res.get("api").unwrap(),
            &["backend/api/main.py".to_string(), "backend/api/utils.py".to_string()]
        );
        assert!(res.get("dash").unwrap().is_empty());
        assert_eq!(
            res.warnings,
            vec![RunWarning::EmptyDomain {
                domain: "dash".to_string()
            }]
        );
    }

    #[test]
    fn duplicate_domain_fails_before_matching() {
        let tree = sample_tree();
        let rules = IgnoreMatcher::empty();
        let specs = vec![
            DomainSpec::parse("api", &["backend/api"]).unwrap(),
            DomainSpec::parse("api", &["frontend"]).unwrap(),
        ];
        let err = Resolver::new(&tree, &rules).resolve(&specs).unwrap_err();
        assert!(matches!(err, AgentRulesError::DuplicateDomain { .. }));
    }

    #[test]
    fn overlapping_domains_share_paths() {
        let tree = sample_tree();
        let rules = IgnoreMatcher::empty();
        let specs = vec![
            DomainSpec::parse("backend", &["backend"]).unwrap(),
            DomainSpec::parse("api", &["backend/api/"]).unwrap(),
        ];
        let res = Resolver::new(&tree, &rules).resolve(&specs).unwrap();
        assert_eq!(res.get("backend"), res.get("api"));
        assert_eq!(res.uncovered, vec!["frontend/dashboard/app.ts".to_string()]);
    }

    #[test]
    fn patterns_within_a_domain_are_unioned() {
        let tree = sample_tree();
        let rules = IgnoreMatcher::empty();
        let specs =
            vec![DomainSpec::parse("all", &["backend/api/main.py", "frontend/**/*.ts"]).unwrap()];
        let res = Resolver::new(&tree, &rules).resolve(&specs).unwrap();
        assert_eq!(
            res.get("all").unwrap(),
            &[
                "backend/api/main.py".to_string(),
                "frontend/dashboard/app.ts".to_string()
            ]
        );
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn unmatched_pattern_in_nonempty_domain_warns() {
        let tree = sample_tree();
        let rules = IgnoreMatcher::empty();
        let specs = vec![DomainSpec::parse("api", &["backend/api", "missing/"]).unwrap()];
        let res = Resolver::new(&tree, &rules).resolve(&specs).unwrap();
        assert_eq!(
            res.warnings,
            vec![RunWarning::PatternMatchedNothing {
                domain: "api".to_string(),
                pattern: "missing/".to_string()
            }]
        );
    }

    #[test]
    fn prefix_on_a_file_matches_nothing() {
        let tree = ProjectTree::from_files("/p", ["notes.md"]);
        let rules = IgnoreMatcher::empty();
        let specs = vec![DomainSpec::parse("notes", &["notes.md/"]).unwrap()];
        let res = Resolver::new(&tree, &rules).resolve(&specs).unwrap();
        assert!(res.get("notes").unwrap().is_empty());
    }

    #[test]
    fn extension_filter_limits_candidates() {
        let tree = sample_tree();
        let rules = IgnoreMatcher::empty();
        let specs = vec![DomainSpec::parse("all", &["."]).unwrap()];
        let res = Resolver::new(&tree, &rules)
            .with_extensions(&["ts"])
            .resolve(&specs)
            .unwrap();
        assert_eq!(
            res.get("all").unwrap(),
            &["frontend/dashboard/app.ts".to_string()]
        );
    }

    #[test]
    fn ignored_directory_hides_its_subtree() {
        let tree = sample_tree();
        let rules = ignore("backend/");
        let specs = vec![DomainSpec::parse("all", &["."]).unwrap()];
        let res = Resolver::new(&tree, &rules).resolve(&specs).unwrap();
        assert_eq!(
            res.get("all").unwrap(),
            &["frontend/dashboard/app.ts".to_string()]
        );
    }
}
