//! Watch event types and options

use std::collections::HashSet;
use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::application::generate::GenerateOptions;
use crate::config::CONFIG_DIR;
use crate::domain::value_objects::IgnoreMatcher;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 300;

/// Interval used when neither the CLI nor a loaded config sets one
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Options for every pipeline run
    pub generate: GenerateOptions,
    /// Overrides `recurring.interval_secs`
    pub interval_secs: Option<u64>,
    /// Output as NDJSON
    pub json: bool,
}

impl WatchOptions {
    pub fn new(generate: GenerateOptions) -> Self {
        Self {
            generate,
            interval_secs: None,
            json: false,
        }
    }

    /// Set the interval between scheduled runs
    pub fn with_interval(mut self, secs: Option<u64>) -> Self {
        self.interval_secs = secs.filter(|s| *s > 0);
        self
    }

    /// Set JSON output mode
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// What triggered a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunReason {
    Initial,
    Change,
    Schedule,
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    Started { project_root: String },
    /// A pipeline run began
    RunStarted {
        reason: RunReason,
        /// Changed paths that triggered the run (relative to the root)
        changes: Vec<String>,
    },
    /// A pipeline run finished
    RunComplete {
        written: usize,
        unchanged: usize,
        errors: usize,
        warnings: usize,
        next_run_secs: u64,
    },
    /// A run failed; the loop keeps going
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Watcher state for debouncing
#[derive(Debug)]
pub struct WatcherState {
    pending_changes: HashSet<String>,
    last_change: Option<Instant>,
    debounce: Duration,
}

impl Default for WatcherState {
    fn default() -> Self {
        Self::new()
    }
}

impl WatcherState {
    pub fn new() -> Self {
        Self::with_debounce(Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            pending_changes: HashSet::new(),
            last_change: None,
            debounce,
        }
    }

    /// Record a change at `now`
    pub fn add_change_at(&mut self, path: String, now: Instant) {
        self.pending_changes.insert(path);
        self.last_change = Some(now);
    }

    pub fn add_change(&mut self, path: String) {
        self.add_change_at(path, Instant::now());
    }

    /// True once changes are pending and none arrived for the debounce period
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_change {
            Some(last) => {
                !self.pending_changes.is_empty() && now.saturating_duration_since(last) >= self.debounce
            }
            None => false,
        }
    }

    pub fn should_run(&self) -> bool {
        self.is_due(Instant::now())
    }

    /// Take all pending changes, sorted, resetting state
    pub fn take_changes(&mut self) -> Vec<String> {
        let mut changes: Vec<_> = self.pending_changes.drain().collect();
        changes.sort();
        self.last_change = None;
        changes
    }

    pub fn has_pending(&self) -> bool {
        !self.pending_changes.is_empty()
    }
}

/// Fixed-interval schedule for recurring runs
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    interval: Duration,
    next: Instant,
}

impl Schedule {
    pub fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.next = now + interval;
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Push the next run one interval past `now`
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.interval;
    }
}

/// Path of a change event relative to the project root, `/`-separated.
pub fn relative_to(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// Whether a changed path should trigger a run.
///
/// Inside the tool directory only config YAML files count. Elsewhere any
/// path the ignore rules let through counts; generated documents are
/// covered by the built-in rules.
pub fn is_relevant(rel: &str, is_dir: bool, ignore: &IgnoreMatcher) -> bool {
    if let Some(inner) = rel.strip_prefix(CONFIG_DIR).and_then(|r| r.strip_prefix('/')) {
        return !is_dir && (inner.ends_with(".yaml") || inner.ends_with(".yml"));
    }
    !ignore.is_ignored(rel, is_dir)
}

pub(crate) fn changed_path(root: &Path, canonical_root: &Path, path: &Path) -> Option<String> {
    relative_to(canonical_root, path).or_else(|| relative_to(root, path))
}
