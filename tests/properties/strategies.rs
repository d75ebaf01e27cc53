//! Shared generators for project layouts.

use proptest::prelude::*;

/// One file path: 0-2 directory segments, one file name with extension.
pub fn file_path() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[a-d]{1,2}", 0..=2),
        "[a-dA-D]{1,2}",
        prop_oneof![Just(".py"), Just(".md"), Just(".log")],
    )
        .prop_map(|(dirs, name, ext)| {
            let mut segments = dirs;
            segments.push(format!("{}{}", name, ext));
            segments.join("/")
        })
}

/// A set of distinct file paths.
pub fn file_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(file_path(), 0..=24).prop_map(|s| s.into_iter().collect())
}

/// The same files in two different orders.
pub fn file_set_shuffled() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    file_set().prop_flat_map(|files| (Just(files.clone()), Just(files).prop_shuffle()))
}

/// Bare `tree_focus` entries with distinct derived names.
pub fn focus_entries() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(vec!["a", "b", "c", "d", "a/b", "c/d", "**/*.md"], 1..=4)
}
