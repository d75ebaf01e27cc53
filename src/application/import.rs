//! Tree-text import
//!
//! Builds a configuration from a pasted `tree`-style diagram instead of a
//! scan of the real filesystem.

use std::collections::BTreeSet;

use crate::config::{Config, FocusEntry, TreeFocus, DEFAULT_EXCLUDE_DIRS, DEFAULT_INCLUDE_EXTENSIONS};
use crate::domain::value_objects::{has_glob_meta, DomainName, DomainPattern, RelPath};

/// Top-level names that mark a code area even outside the role vocabulary
pub const COMMON_TOP_DIRS: &[&str] = &["api", "app", "src", "backend", "frontend", "server", "client"];

/// Asset directories that never become domains
pub const MEDIA_DIRS: &[&str] = &["fonts", "images", "img", "media", "static"];

/// Columns per nesting level in `tree` output (`├── `, `│   `, `|-- `)
const INDENT_WIDTH: usize = 4;

#[derive(Debug)]
struct Entry {
    level: usize,
    name: String,
    marked_dir: bool,
}

fn is_connector(c: char) -> bool {
    matches!(c, '│' | '├' | '└' | '─' | '|' | '`' | '+' | '-' | '\u{a0}') || c.is_whitespace()
}

fn parse_line(line: &str) -> Option<Entry> {
    let line = line.trim_end();
    let name_start = line.find(|c: char| !is_connector(c))?;
    let prefix_width = line[..name_start].chars().count();
    let raw = &line[name_start..];

    // `tree -l` prints symlink targets after an arrow
    let raw = raw.split(" -> ").next().unwrap_or(raw).trim();
    let marked_dir = raw.ends_with('/');
    let name = raw.trim_end_matches('/').trim();
    if name.is_empty() || name == "." {
        return None;
    }
    // summary line: "3 directories, 12 files"
    if name.ends_with(" files") || name.ends_with(" file") {
        return None;
    }

    Some(Entry {
        level: prefix_width.div_ceil(INDENT_WIDTH),
        name: name.to_string(),
        marked_dir,
    })
}

/// Extract directory paths from a tree diagram.
///
/// An entry is a directory when it ends in `/` or when the next entry is
/// nested below it. Nesting is read from the connector indent, so paths
/// come back relative to the diagram root (`src/components`). Anything
/// under a dot-directory is skipped. The result is sorted and
/// de-duplicated.
pub fn parse_tree_directories(text: &str) -> Vec<String> {
    let mut entries: Vec<Entry> = text.lines().filter_map(parse_line).collect();

    // With the `.` root line dropped, entries start one level in.
    let base = entries.iter().map(|e| e.level).min().unwrap_or(0);
    for entry in &mut entries {
        entry.level -= base;
    }

    // A single level-0 line heading an indented diagram names the root.
    let heads_diagram = entries.len() > 1
        && entries[0].level == 0
        && entries[1..].iter().all(|e| e.level > 0);
    if heads_diagram {
        entries.remove(0);
        for entry in &mut entries {
            entry.level -= 1;
        }
    }

    let mut dirs = BTreeSet::new();
    let mut stack: Vec<Option<String>> = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        let has_children = entries
            .get(i + 1)
            .map(|next| next.level > entry.level)
            .unwrap_or(false);
        if !(entry.marked_dir || has_children) {
            continue;
        }

        stack.truncate(entry.level);
        let visible = !entry.name.starts_with('.');
        stack.push(visible.then(|| entry.name.clone()));

        let segments: Option<Vec<&str>> = stack.iter().map(|s| s.as_deref()).collect();
        if let Some(segments) = segments {
            let path = segments.join("/");
            if RelPath::parse(&path).is_ok() {
                dirs.insert(path);
            }
        }
    }

    dirs.into_iter().collect()
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn contains_folded(list: &[String], name: &str) -> bool {
    list.iter().any(|e| e.eq_ignore_ascii_case(name))
}

fn focus_entry(dir: &str) -> FocusEntry {
    if !has_glob_meta(dir) {
        return FocusEntry::Bare(dir.to_string());
    }
    // `app/[id]` would parse as a glob; write it escaped under its own name
    let text = RelPath::parse(dir)
        .map(|p| DomainPattern::Exact(p).to_config_text())
        .unwrap_or_else(|_| dir.to_string());
    let name = DomainName::derive(&dir.replace('/', "_"));
    FocusEntry::named(name.as_str(), vec![text])
}

/// Build a configuration from imported directory paths.
///
/// `defaults` supplies every section the import does not decide, including
/// the role vocabulary and the exclude list it extends.
pub fn config_from_directories(dirs: &[String], title: &str, defaults: &Config) -> Config {
    let vocabulary = defaults.vocabulary();

    let mut excluded: Vec<String> = DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect();
    excluded.extend(defaults.exclude_dirs.iter().cloned());
    let media: Vec<String> = MEDIA_DIRS.iter().map(|s| s.to_string()).collect();

    let is_excluded = |dir: &str| {
        dir.split('/')
            .any(|seg| contains_folded(&excluded, seg) || contains_folded(&media, seg))
    };

    let mut focus: BTreeSet<&str> = dirs
        .iter()
        .map(String::as_str)
        .filter(|d| !is_excluded(d))
        .filter(|d| {
            let base = basename(d);
            vocabulary.contains(base) || (!d.contains('/') && COMMON_TOP_DIRS.contains(&base))
        })
        .collect();

    if focus.is_empty() {
        focus = dirs
            .iter()
            .map(String::as_str)
            .filter(|d| !d.contains('/') && !is_excluded(d))
            .collect();
    }

    let mut exclude_dirs: BTreeSet<String> = defaults.exclude_dirs.iter().cloned().collect();
    for dir in dirs {
        for seg in dir.split('/') {
            if contains_folded(&excluded, seg) || contains_folded(&media, seg) {
                exclude_dirs.insert(seg.to_string());
            }
        }
    }

    let title = title.trim();
    Config {
        project_title: if title.is_empty() {
            defaults.project_title.clone()
        } else {
            title.to_string()
        },
        tree_focus: Some(TreeFocus(focus.into_iter().map(focus_entry).collect())),
        exclude_dirs: exclude_dirs.into_iter().collect(),
        include_extensions: DEFAULT_INCLUDE_EXTENSIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        ..defaults.clone()
    }
}
