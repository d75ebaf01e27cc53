//! Configuration type definitions

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::entities::{validate_specs, DomainSpec};
use crate::domain::services::{
    AggregateOptions, AnalyzerOptions, RoleVocabulary, DEFAULT_PREFIX, STANDARD_ROLES,
};
use crate::error::{AgentRulesError, AgentRulesResult};

use super::loader::{self, ConfigWarning};

/// Directories excluded from every scan unless the config says otherwise
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    ".next",
    "out",
    "__pycache__",
    "venv",
    "env",
    ".git",
    "coverage",
    "tmp",
    "temp",
];

/// Extensions written into configs generated from a pasted tree
pub const DEFAULT_INCLUDE_EXTENSIONS: &[&str] = &[
    ".py", ".ts", ".tsx", ".js", ".jsx", ".json", ".css", ".scss", ".html", ".md", ".vue",
    ".svelte",
];

/// One `tree_focus` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusEntry {
    /// A bare path or glob; the domain name is derived from it
    Bare(String),
    /// An explicitly named domain
    Named { name: String, patterns: Vec<String> },
}

impl FocusEntry {
    pub fn named(name: impl Into<String>, patterns: Vec<String>) -> Self {
        Self::Named {
            name: name.into(),
            patterns,
        }
    }

    fn to_spec(&self) -> AgentRulesResult<DomainSpec> {
        match self {
            Self::Bare(pattern) => DomainSpec::from_bare(pattern),
            Self::Named { name, patterns } => DomainSpec::parse(name, patterns),
        }
    }
}

/// Ordered list of domain declarations
///
/// Accepts a list of bare strings and `{name: pattern(s)}` mappings, or a
/// single mapping. Mapping order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeFocus(pub Vec<FocusEntry>);

impl TreeFocus {
    pub fn entries(&self) -> &[FocusEntry] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(p) => vec![p],
            OneOrMany::Many(ps) => ps,
        }
    }
}

/// A list item: a bare string, or a mapping of one or more named domains.
struct FocusItem(Vec<FocusEntry>);

impl<'de> Deserialize<'de> for FocusItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ItemVisitor;

        impl<'de> Visitor<'de> for ItemVisitor {
            type Value = FocusItem;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a path pattern or a mapping of domain name to pattern(s)")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(FocusItem(vec![FocusEntry::Bare(v.to_string())]))
            }

            // `- 2024` is a directory name, not a number
            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(FocusItem(vec![FocusEntry::Bare(v.to_string())]))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                named_entries(map).map(FocusItem)
            }
        }

        deserializer.deserialize_any(ItemVisitor)
    }
}

fn named_entries<'de, A: MapAccess<'de>>(mut map: A) -> Result<Vec<FocusEntry>, A::Error> {
    let mut entries = Vec::new();
    while let Some(name) = map.next_key::<String>()? {
        let patterns: OneOrMany = map.next_value()?;
        entries.push(FocusEntry::Named {
            name,
            patterns: patterns.into(),
        });
    }
    Ok(entries)
}

impl<'de> Deserialize<'de> for TreeFocus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FocusVisitor;

        impl<'de> Visitor<'de> for FocusVisitor {
            type Value = TreeFocus;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a list of domain patterns or a mapping of domain names")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some(FocusItem(items)) = seq.next_element()? {
                    entries.extend(items);
                }
                Ok(TreeFocus(entries))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                named_entries(map).map(TreeFocus)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(TreeFocus(vec![FocusEntry::Bare(v.to_string())]))
            }
        }

        deserializer.deserialize_any(FocusVisitor)
    }
}

impl Serialize for FocusEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bare(pattern) => serializer.serialize_str(pattern),
            Self::Named { name, patterns } => {
                let value = match patterns.as_slice() {
                    [single] => OneOrMany::One(single.clone()),
                    _ => OneOrMany::Many(patterns.clone()),
                };
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, &value)?;
                map.end()
            }
        }
    }
}

impl Serialize for TreeFocus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for entry in &self.0 {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

/// Auto-analyzer thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default = "default_min_files")]
    pub min_files: usize,
}

impl Default for AutoConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            min_files: default_min_files(),
        }
    }
}

fn default_max_depth() -> usize {
    2
}

fn default_min_files() -> usize {
    3
}

/// Where agent documents go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Relative to the project root; `None` = the project root itself
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            dir: None,
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// Watch-mode schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for RecurringConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    60
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project_title: String,

    /// Required; `None` only while a config is being assembled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_focus: Option<TreeFocus>,

    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    #[serde(default)]
    pub include_extensions: Vec<String>,

    #[serde(default = "default_important_dirs")]
    pub important_dirs: Vec<String>,

    #[serde(default)]
    pub auto: AutoConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub recurring: RecurringConfig,

    #[serde(default)]
    pub report_uncovered: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_title: String::new(),
            tree_focus: None,
            exclude_dirs: default_exclude_dirs(),
            include_extensions: Vec::new(),
            important_dirs: default_important_dirs(),
            auto: AutoConfig::default(),
            output: OutputConfig::default(),
            recurring: RecurringConfig::default(),
            report_uncovered: false,
        }
    }
}

fn default_exclude_dirs() -> Vec<String> {
    DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_important_dirs() -> Vec<String> {
    STANDARD_ROLES.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> AgentRulesResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AgentRulesResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (AGENTRULES_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Write this configuration as YAML.
    pub fn save(&self, path: &Path) -> AgentRulesResult<()> {
        loader::save(path, self)
    }

    /// A config whose domains are the given specs, everything else default.
    pub fn from_specs(project_title: impl Into<String>, specs: &[DomainSpec]) -> Self {
        let entries = specs
            .iter()
            .map(|spec| {
                FocusEntry::named(
                    spec.name().as_str(),
                    spec.patterns().iter().map(|p| p.to_config_text()).collect(),
                )
            })
            .collect();
        Self {
            project_title: project_title.into(),
            tree_focus: Some(TreeFocus(entries)),
            ..Self::default()
        }
    }

    /// Validated domain specs, in declaration order.
    ///
    /// This is the only place names and patterns are checked, duplicates
    /// included.
    pub fn domain_specs(&self) -> AgentRulesResult<Vec<DomainSpec>> {
        let focus = self
            .tree_focus
            .as_ref()
            .ok_or_else(|| AgentRulesError::MissingField {
                field: "tree_focus".to_string(),
            })?;

        let specs = focus
            .entries()
            .iter()
            .map(FocusEntry::to_spec)
            .collect::<AgentRulesResult<Vec<_>>>()?;
        validate_specs(&specs)?;
        Ok(specs)
    }

    /// Title for documents; falls back to the project directory name.
    pub fn title_for(&self, project_root: &Path) -> String {
        if !self.project_title.trim().is_empty() {
            return self.project_title.trim().to_string();
        }
        std::fs::canonicalize(project_root)
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "this project".to_string())
    }

    /// Directory agent documents are written to.
    pub fn output_dir(&self, project_root: &Path) -> PathBuf {
        match self.output.dir.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() && dir != "." => project_root.join(dir),
            _ => project_root.to_path_buf(),
        }
    }

    pub fn vocabulary(&self) -> RoleVocabulary {
        RoleVocabulary::new(&self.important_dirs)
    }

    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            max_depth: self.auto.max_depth,
            min_files: self.auto.min_files,
        }
    }

    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            include_extensions: self.include_extensions.clone(),
            report_uncovered: self.report_uncovered,
        }
    }
}
