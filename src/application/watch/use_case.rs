//! Watch Use Case
//!
//! Runs the generate pipeline once, then again whenever the interval
//! elapses or a relevant file changes, until the running flag drops.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config as NotifyConfig, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::debug;

use crate::application::generate::GenerateUseCase;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::IgnoreMatcher;
use crate::error::{AgentRulesError, AgentRulesResult};

use super::event::{
    changed_path, is_relevant, RunReason, Schedule, WatchEvent, WatchOptions, WatcherState,
    DEFAULT_INTERVAL_SECS,
};

const POLL_MS: u64 = 50;

/// What the loop keeps from the last successful run
struct RunState {
    ignore: IgnoreMatcher,
    interval_secs: u64,
}

/// Watch Use Case
///
/// Orchestrates recurring generation. This is the main entry point for the
/// `agentrules watch` command.
pub struct WatchUseCase<FS: FileSystem> {
    generate: GenerateUseCase<FS>,
    options: WatchOptions,
}

impl<FS: FileSystem> WatchUseCase<FS> {
    pub fn new(generate: GenerateUseCase<FS>, options: WatchOptions) -> Self {
        Self { generate, options }
    }

    /// Start watching (blocking)
    ///
    /// Blocks until `running` is set to false. A failed run is reported as
    /// [`WatchEvent::Error`] and the loop continues; only a watcher that
    /// cannot be started is an error.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> AgentRulesResult<()>
    where
        F: Fn(WatchEvent),
    {
        let root = self.options.generate.project_root.clone();
        if !root.is_dir() {
            return Err(AgentRulesError::ProjectNotFound { path: root });
        }
        let canonical_root = std::fs::canonicalize(&root)?;

        on_event(WatchEvent::Started {
            project_root: root.display().to_string(),
        });

        let mut last = self.run_once(RunReason::Initial, Vec::new(), &on_event);
        let mut ignore = last
            .as_ref()
            .map(|s| s.ignore.clone())
            .unwrap_or_else(IgnoreMatcher::empty);

        let (tx, rx) = channel::<PathBuf>();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            NotifyConfig::default(),
        )
        .map_err(|e| AgentRulesError::Watch(e.to_string()))?;

        watcher
            .watch(&canonical_root, RecursiveMode::Recursive)
            .map_err(|e| AgentRulesError::Watch(e.to_string()))?;

        let mut state = WatcherState::new();
        let mut schedule = Schedule::starting_at(self.interval(last.as_ref()), Instant::now());

        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(POLL_MS)) {
                if let Some(rel) = changed_path(&root, &canonical_root, &path) {
                    if is_relevant(&rel, path.is_dir(), &ignore) {
                        state.add_change(rel);
                    } else {
                        debug!(path = %rel, "ignoring change");
                    }
                }
            }

            let now = Instant::now();
            let reason = if state.is_due(now) {
                RunReason::Change
            } else if schedule.is_due(now) {
                RunReason::Schedule
            } else {
                continue;
            };

            let changes = state.take_changes();
            if let Some(run) = self.run_once(reason, changes, &on_event) {
                ignore = run.ignore.clone();
                last = Some(run);
            }
            schedule.set_interval(self.interval(last.as_ref()), Instant::now());
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    fn interval(&self, last: Option<&RunState>) -> Duration {
        let secs = self
            .options
            .interval_secs
            .or(last.map(|s| s.interval_secs))
            .unwrap_or(DEFAULT_INTERVAL_SECS);
        Duration::from_secs(secs.max(1))
    }

    fn run_once<F>(&self, reason: RunReason, changes: Vec<String>, on_event: &F) -> Option<RunState>
    where
        F: Fn(WatchEvent),
    {
        on_event(WatchEvent::RunStarted { reason, changes });

        let plan = match self.generate.plan(&self.options.generate) {
            Ok(plan) => plan,
            Err(e) => {
                on_event(WatchEvent::Error {
                    message: e.to_string(),
                });
                return None;
            }
        };

        let result = self.generate.execute(&plan, self.options.generate.dry_run);
        for error in &result.errors {
            on_event(WatchEvent::Error {
                message: error.clone(),
            });
        }

        let interval_secs = self.options.interval_secs.unwrap_or(plan.interval_secs);
        on_event(WatchEvent::RunComplete {
            written: result.written.len(),
            unchanged: result.unchanged.len(),
            errors: result.errors.len(),
            warnings: result.warnings.len(),
            next_run_secs: interval_secs,
        });

        Some(RunState {
            ignore: plan.ignore,
            interval_secs,
        })
    }
}
