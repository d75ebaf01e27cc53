//! Auto-analyzer
//!
//! Proposes domain boundaries for a project that has no configuration,
//! from directory names, depths and file counts alone.

use std::collections::HashSet;

use crate::domain::entities::{depth, DomainSpec, ProjectTree};
use crate::domain::value_objects::{is_within, DomainName, DomainPattern, IgnoreMatcher, RelPath};

/// Directory names that usually mark a meaningful code area.
pub const STANDARD_ROLES: &[&str] = &[
    "components",
    "pages",
    "app",
    "src",
    "lib",
    "utils",
    "hooks",
    "styles",
    "public",
    "assets",
    "layouts",
    "services",
    "context",
    "types",
];

/// Thresholds for candidate selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Deepest directory level considered (1 = top level only)
    pub max_depth: usize,
    /// Files a directory needs to qualify without a role name
    pub min_files: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            max_depth: 2,
            min_files: 3,
        }
    }
}

/// Lookup table of role directory names, matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleVocabulary {
    names: HashSet<String>,
}

impl RoleVocabulary {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    /// The built-in vocabulary.
    pub fn standard() -> Self {
        Self::new(STANDARD_ROLES)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A directory the analyzer settled on, with its visible file count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub dir: String,
    pub file_count: usize,
    pub spec: DomainSpec,
}

/// Propose domain specs for `tree`.
///
/// Never fails: with no qualifying directory the result is one domain for
/// the whole project, named after the project directory.
pub fn propose_domains(
    tree: &ProjectTree,
    ignore: &IgnoreMatcher,
    vocabulary: &RoleVocabulary,
    options: &AnalyzerOptions,
) -> Vec<DomainSpec> {
    analyze(tree, ignore, vocabulary, options)
        .into_iter()
        .map(|p| p.spec)
        .collect()
}

/// Like [`propose_domains`], keeping the directory and file count.
pub fn analyze(
    tree: &ProjectTree,
    ignore: &IgnoreMatcher,
    vocabulary: &RoleVocabulary,
    options: &AnalyzerOptions,
) -> Vec<Proposal> {
    let visible: Vec<&str> = tree
        .files()
        .filter(|f| !ignore.is_ignored(f, false))
        .collect();

    let mut candidates: Vec<(&str, usize)> = tree
        .dirs()
        .filter(|d| (1..=options.max_depth).contains(&depth(d)))
        .filter(|d| !ignore.is_ignored(d, true))
        .filter_map(|dir| {
            let count = visible.iter().filter(|f| is_within(dir, f)).count();
            // role names count for top-level directories only
            let is_role = depth(dir) == 1 && vocabulary.contains(dir);
            let qualifies = count >= options.min_files.max(1) || (count > 0 && is_role);
            qualifies.then_some((dir, count))
        })
        .collect();

    // A candidate whose files all sit inside deeper candidates adds nothing.
    let snapshot = candidates.clone();
    candidates.retain(|(dir, _)| {
        let deeper: Vec<&str> = snapshot
            .iter()
            .map(|(d, _)| *d)
            .filter(|d| d != dir && is_within(dir, d))
            .collect();
        if deeper.is_empty() {
            return true;
        }
        visible
            .iter()
            .filter(|f| is_within(dir, f))
            .any(|f| !deeper.iter().any(|d| is_within(d, f)))
    });

    candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut used_stems = HashSet::new();
    let mut proposals = Vec::new();
    for (dir, count) in candidates {
        let Ok(path) = RelPath::parse(dir) else {
            continue;
        };
        let name = unique_name(DomainName::from_path(&path), &mut used_stems);
        let pattern = DomainPattern::Prefix(path);
        if let Ok(spec) = DomainSpec::new(name, vec![pattern]) {
            proposals.push(Proposal {
                dir: dir.to_string(),
                file_count: count,
                spec,
            });
        }
    }

    if proposals.is_empty() {
        proposals.push(whole_project(tree, visible.len()));
    }
    proposals
}

fn whole_project(tree: &ProjectTree, file_count: usize) -> Proposal {
    let name = tree
        .root_name()
        .and_then(|n| DomainName::new(&n).ok())
        .unwrap_or_else(|| DomainName::derive("project"));
    Proposal {
        dir: String::new(),
        file_count,
        spec: DomainSpec::whole_project(name),
    }
}

fn unique_name(name: DomainName, used: &mut HashSet<String>) -> DomainName {
    if used.insert(name.file_stem()) {
        return name;
    }
    (2..)
        .map(|n| DomainName::derive(&format!("{}_{}", name, n)))
        .find(|candidate| used.insert(candidate.file_stem()))
        .unwrap_or(name)
}
