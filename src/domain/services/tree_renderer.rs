//! Tree renderer
//!
//! Turns a flat list of relative paths into an indented diagram:
//!
//! ```text
//! .
//! ├── backend/
//! │   └── api/
//! │       ├── main.py
//! │       └── utils.py
//! └── README.md
//! ```
//!
//! Output depends only on the set of input paths, never on their order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Rendered in place of a tree when no path matched.
pub const EMPTY_MARKER: &str = "(no files matched)";

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Sort key for a child: directories first, then case-folded name, then
/// exact bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChildKey {
    is_file: bool,
    folded: String,
    name: String,
}

impl ChildKey {
    fn new(name: &str, is_file: bool) -> Self {
        Self {
            is_file,
            folded: name.to_lowercase(),
            name: name.to_string(),
        }
    }
}

impl Ord for ChildKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.is_file
            .cmp(&other.is_file)
            .then_with(|| self.folded.cmp(&other.folded))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for ChildKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One node of the rendered tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    name: String,
    is_leaf: bool,
    children: BTreeMap<ChildKey, TreeNode>,
}

impl TreeNode {
    /// Build the tree for a set of paths. A trailing `/` marks a directory.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = TreeNode {
            name: ".".to_string(),
            ..Default::default()
        };
        for path in paths {
            root.insert(path.as_ref());
        }
        root
    }

    fn insert(&mut self, path: &str) {
        let unified = path.replace('\\', "/");
        let dir_ref = unified.ends_with('/');
        let segments: Vec<&str> = unified
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .collect();

        let mut node = self;
        for (i, segment) in segments.iter().enumerate() {
            let is_file = i + 1 == segments.len() && !dir_ref;
            node = node
                .children
                .entry(ChildKey::new(segment, is_file))
                .or_insert_with(|| TreeNode {
                    name: segment.to_string(),
                    is_leaf: is_file,
                    children: BTreeMap::new(),
                });
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Children in display order.
    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.children.values()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Render this node and its descendants.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return EMPTY_MARKER.to_string();
        }
        let mut lines = vec![self.name.clone()];
        self.render_children("", &mut lines);
        lines.join("\n")
    }

    fn render_children(&self, indent: &str, lines: &mut Vec<String>) {
        let count = self.children.len();
        for (i, child) in self.children.values().enumerate() {
            let last = i + 1 == count;
            let connector = if last { LAST_BRANCH } else { BRANCH };
            let suffix = if child.is_leaf { "" } else { "/" };
            lines.push(format!("{}{}{}{}", indent, connector, child.name, suffix));

            if !child.children.is_empty() {
                let next = format!("{}{}", indent, if last { SPACE } else { PIPE });
                child.render_children(&next, lines);
            }
        }
    }
}

/// Render a set of relative paths as a tree diagram.
pub fn render<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TreeNode::from_paths(paths).render()
}
