//! Configuration loading and persistence

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::RelPath;
use crate::error::{AgentRulesError, AgentRulesResult};

use super::types::Config;

pub use crate::domain::value_objects::ConfigWarning;

/// Tool directory at the project root
pub const CONFIG_DIR: &str = ".agentrules";
/// Config written by `init` and `import-tree`
pub const CONFIG_FILE: &str = "config.yaml";
/// Hand-maintained config; preferred over `config.yaml`
pub const MANUAL_CONFIG_FILE: &str = "config_manual.yaml";
/// Analyzer output, used only when asked for
pub const DETECTED_CONFIG_FILE: &str = "detected_config.yaml";
/// Analyzer output kept for review
pub const AUTO_CONFIG_FILE: &str = "config_auto.yaml";

/// `<root>/.agentrules`
pub fn config_dir(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR)
}

/// Find the config file a run should use.
///
/// Order: `detected_config.yaml` (only when `use_detected`),
/// `config_manual.yaml`, `config.yaml`.
pub fn discover(project_root: &Path, use_detected: bool) -> Option<PathBuf> {
    let dir = config_dir(project_root);
    let mut candidates = Vec::with_capacity(3);
    if use_detected {
        candidates.push(DETECTED_CONFIG_FILE);
    }
    candidates.push(MANUAL_CONFIG_FILE);
    candidates.push(CONFIG_FILE);

    candidates
        .into_iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AgentRulesResult<(Config, Vec<ConfigWarning>)> {
    if !path.exists() {
        return Err(AgentRulesError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AgentRulesError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate(&config, path)?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    debug!(
        path = %path.display(),
        unknown_keys = warnings.len(),
        "loaded configuration"
    );
    Ok((config, warnings))
}

fn validate(config: &Config, path: &Path) -> AgentRulesResult<()> {
    let invalid = |message: String| AgentRulesError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    };

    match &config.tree_focus {
        None => return Err(invalid("missing required field 'tree_focus'".to_string())),
        Some(focus) if focus.is_empty() => {
            return Err(invalid("'tree_focus' must declare at least one domain".to_string()))
        }
        Some(_) => {}
    }

    if let Some(dir) = &config.output.dir {
        RelPath::parse(dir).map_err(|e| invalid(format!("output.dir '{}': {}", dir, e)))?;
    }

    if config.output.prefix.is_empty() {
        return Err(invalid("output.prefix must not be empty".to_string()));
    }

    if config.output.prefix.contains(['/', '\\']) {
        return Err(invalid(format!(
            "output.prefix '{}' must not contain path separators",
            config.output.prefix
        )));
    }

    if config.recurring.interval_secs == 0 {
        return Err(invalid("recurring.interval_secs must be at least 1".to_string()));
    }

    Ok(())
}

/// Write a configuration as YAML, creating parent directories.
pub fn save(path: &Path, config: &Config) -> AgentRulesResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let yaml = serde_yaml_ng::to_string(config)?;
    fs::write(path, yaml)?;
    debug!(path = %path.display(), "saved configuration");
    Ok(())
}

/// Apply environment variable overrides (AGENTRULES_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // AGENTRULES_PROJECT_TITLE
    if let Some(title) = get_env("AGENTRULES_PROJECT_TITLE") {
        if !title.trim().is_empty() {
            config.project_title = title.trim().to_string();
        }
    }

    // AGENTRULES_OUTPUT_PREFIX
    if let Some(prefix) = get_env("AGENTRULES_OUTPUT_PREFIX") {
        if prefix.is_empty() || prefix.contains(['/', '\\']) {
            warn!(prefix = %prefix, "ignoring empty AGENTRULES_OUTPUT_PREFIX or one with path separators");
        } else {
            config.output.prefix = prefix;
        }
    }

    // AGENTRULES_INTERVAL_SECS
    if let Some(secs) = get_env("AGENTRULES_INTERVAL_SECS") {
        match secs.trim().parse::<u64>() {
            Ok(n) if n > 0 => config.recurring.interval_secs = n,
            _ => warn!(value = %secs, "ignoring invalid AGENTRULES_INTERVAL_SECS"),
        }
    }

    // AGENTRULES_REPORT_UNCOVERED
    if let Some(val) = get_env("AGENTRULES_REPORT_UNCOVERED") {
        config.report_uncovered = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "project_title",
        "tree_focus",
        "exclude_dirs",
        "include_extensions",
        "important_dirs",
        "auto",
        "max_depth",
        "min_files",
        "output",
        "prefix",
        "dir",
        "recurring",
        "interval_secs",
        "report_uncovered",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
