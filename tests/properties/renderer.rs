//! Properties of the tree renderer.

use std::collections::BTreeSet;

use proptest::prelude::*;

use agentrules::render;

use crate::strategies::{file_set, file_set_shuffled};

/// (depth, name) of every rendered entry below the root line
fn entries(rendered: &str) -> Vec<(usize, String)> {
    rendered
        .lines()
        .skip(1)
        .map(|line| {
            let prefix = line
                .chars()
                .take_while(|c| matches!(c, '│' | '├' | '└' | '─' | ' '))
                .count();
            let name: String = line.chars().skip(prefix).collect();
            (prefix / 4 - 1, name)
        })
        .collect()
}

/// Every project-relative node a set of files implies: directories with a
/// trailing `/`, files as-is.
fn implied_nodes(files: &[String]) -> BTreeSet<String> {
    let mut nodes = BTreeSet::new();
    for file in files {
        let segments: Vec<&str> = file.split('/').collect();
        for i in 1..segments.len() {
            nodes.insert(format!("{}/", segments[..i].join("/")));
        }
        nodes.insert(file.clone());
    }
    nodes
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: output depends on the set of paths, not their order.
    #[test]
    fn property_render_ignores_input_order((files, shuffled) in file_set_shuffled()) {
        prop_assert_eq!(render(&files), render(&shuffled));
    }

    /// PROPERTY: within one directory, no subdirectory is listed after a file.
    #[test]
    fn property_directories_precede_files(files in file_set()) {
        let rendered = render(&files);
        let mut seen_file: Vec<bool> = Vec::new();

        for (depth, name) in entries(&rendered) {
            seen_file.truncate(depth + 1);
            seen_file.resize(depth + 1, false);
            if name.ends_with('/') {
                prop_assert!(!seen_file[depth], "{} listed after a file\n{}", name, rendered);
            } else {
                seen_file[depth] = true;
            }
        }
    }

    /// PROPERTY: every implied file and directory is rendered exactly once.
    #[test]
    fn property_every_node_rendered_once(files in file_set()) {
        prop_assume!(!files.is_empty());
        let rendered = render(&files);
        let count = rendered.lines().count() - 1;
        prop_assert_eq!(count, implied_nodes(&files).len());
    }
}
