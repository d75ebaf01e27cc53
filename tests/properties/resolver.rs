//! Properties of domain resolution.

use std::collections::BTreeSet;
use std::path::Path;

use proptest::prelude::*;

use agentrules::domain::services::{AggregateOptions, Resolver};
use agentrules::{aggregate, DomainName, DomainSpec, IgnoreMatcher, ProjectTree};

use crate::strategies::{file_set, file_set_shuffled, focus_entries};

const IGNORE_RULES: &str = "b/\n*.log\n";

fn ignore() -> IgnoreMatcher {
    IgnoreMatcher::from_content(Path::new("/p"), Path::new(".agentrulesignore"), IGNORE_RULES).0
}

fn specs(entries: &[&str]) -> Vec<DomainSpec> {
    entries
        .iter()
        .map(|e| DomainSpec::from_bare(e).unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the same tree and config always give the same results,
    /// whatever order the files were discovered in.
    #[test]
    fn property_resolution_is_deterministic(
        (files, shuffled) in file_set_shuffled(),
        entries in focus_entries(),
    ) {
        let ignore = ignore();
        let specs = specs(&entries);
        let options = AggregateOptions::default();

        let a = aggregate(&specs, &ProjectTree::from_files("/p", &files), &ignore, &options).unwrap();
        let b = aggregate(&specs, &ProjectTree::from_files("/p", &shuffled), &ignore, &options).unwrap();
        prop_assert_eq!(a.results, b.results);
        prop_assert_eq!(a.warnings, b.warnings);
    }

    /// PROPERTY: an ignored file never appears in any domain.
    #[test]
    fn property_ignored_paths_never_appear(
        files in file_set(),
        entries in focus_entries(),
    ) {
        let ignore = ignore();
        let tree = ProjectTree::from_files("/p", &files);
        let aggregation = aggregate(&specs(&entries), &tree, &ignore, &AggregateOptions::default()).unwrap();

        for result in &aggregation.results {
            for path in result.paths() {
                prop_assert!(!ignore.is_ignored(path, false), "{} is ignored", path);
                prop_assert!(!path.ends_with(".log"));
                prop_assert!(!path.split('/').any(|s| s == "b"), "{} is under b/", path);
            }
        }
    }

    /// PROPERTY: every domain path is a visible file of the tree.
    #[test]
    fn property_union_is_subset_of_visible_files(
        files in file_set(),
        entries in focus_entries(),
    ) {
        let ignore = ignore();
        let tree = ProjectTree::from_files("/p", &files);
        let visible: BTreeSet<&str> = Resolver::new(&tree, &ignore).visible_files().into_iter().collect();
        let aggregation = aggregate(&specs(&entries), &tree, &ignore, &AggregateOptions::default()).unwrap();

        for result in &aggregation.results {
            for path in result.paths() {
                prop_assert!(visible.contains(path.as_str()), "{} is not visible", path);
            }
            let mut sorted = result.paths().to_vec();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(&sorted, &result.paths().to_vec());
        }
    }

    /// PROPERTY: a whole-project domain holds exactly the visible files.
    #[test]
    fn property_whole_project_covers_visible_files(files in file_set()) {
        let ignore = ignore();
        let tree = ProjectTree::from_files("/p", &files);
        let visible: Vec<String> = Resolver::new(&tree, &ignore)
            .visible_files()
            .into_iter()
            .map(String::from)
            .collect();

        let spec = DomainSpec::whole_project(DomainName::new("all").unwrap());
        let aggregation = aggregate(&[spec], &tree, &ignore, &AggregateOptions::default()).unwrap();

        let mut expected = visible;
        expected.sort();
        prop_assert_eq!(aggregation.results[0].paths().to_vec(), expected);
    }
}
