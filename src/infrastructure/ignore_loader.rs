//! Ignore rule loading
//!
//! Sources, in evaluation order (later rules win):
//! 1. configured `exclude_dirs`, each as `name/`
//! 2. `.gitignore` at the project root
//! 3. `.agentrulesignore` at the project root
//! 4. built-in exclusions: `.git/`, the tool directory, generated documents

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{Config, CONFIG_DIR};
use crate::domain::value_objects::{IgnoreMatcher, RunWarning, MAX_FILE_SIZE};

/// Tool-specific ignore file at the project root
pub const IGNORE_FILE_NAME: &str = ".agentrulesignore";

/// Everything besides ignore files that contributes rules.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSources {
    pub exclude_dirs: Vec<String>,
    pub output_prefix: String,
    /// Output directory relative to the project root (`None` = root)
    pub output_dir: Option<String>,
}

impl IgnoreSources {
    pub fn from_config(config: &Config) -> Self {
        Self {
            exclude_dirs: config.exclude_dirs.clone(),
            output_prefix: config.output.prefix.clone(),
            output_dir: config.output.dir.clone(),
        }
    }

    /// Rules that keep the tool's own files out of every domain.
    pub fn builtin_rules(&self) -> Vec<String> {
        let mut rules = vec![".git/".to_string(), format!("/{}/", CONFIG_DIR)];
        let dir = self
            .output_dir
            .as_deref()
            .map(|d| d.trim().trim_matches('/'))
            .filter(|d| !d.is_empty() && *d != ".");
        let generated = match dir {
            Some(dir) => format!("/{}/{}*.md", dir, self.output_prefix),
            None => format!("/{}*.md", self.output_prefix),
        };
        rules.push(generated);
        rules
    }
}

/// Build the ignore matcher for a project.
///
/// Never fails: unreadable or oversized ignore files and malformed lines
/// come back as warnings.
pub fn load_ignore(project_root: &Path, sources: &IgnoreSources) -> (IgnoreMatcher, Vec<RunWarning>) {
    let mut builder = IgnoreMatcher::builder(project_root);

    let exclude_source = PathBuf::from("<exclude_dirs>");
    for dir in &sources.exclude_dirs {
        let name = dir.trim().trim_end_matches('/');
        if name.is_empty() {
            continue;
        }
        builder.add_line(&exclude_source, &format!("{}/", name));
    }

    for name in [".gitignore", IGNORE_FILE_NAME] {
        let path = project_root.join(name);
        match read_ignore_file(&path) {
            Ok(Some(content)) => {
                builder.add_content(&path, &content);
            }
            Ok(None) => {}
            Err(reason) => {
                warn!(file = %path.display(), %reason, "skipping ignore file");
                builder.skip_file(&path, reason);
            }
        }
    }

    let builtin_source = PathBuf::from("<builtin>");
    for rule in sources.builtin_rules() {
        builder.add_line(&builtin_source, &rule);
    }

    let (matcher, warnings) = builder.build();
    debug!(
        rules = matcher.rule_count(),
        warnings = warnings.len(),
        "loaded ignore rules"
    );
    (matcher, warnings)
}

/// `Ok(None)` when the file does not exist.
fn read_ignore_file(path: &Path) -> Result<Option<String>, String> {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.to_string()),
    };
    if !metadata.is_file() {
        return Err("not a regular file".to_string());
    }
    if metadata.len() > MAX_FILE_SIZE {
        return Err(format!(
            "file is {} bytes, limit is {} bytes",
            metadata.len(),
            MAX_FILE_SIZE
        ));
    }
    fs::read_to_string(path).map(Some).map_err(|e| e.to_string())
}
