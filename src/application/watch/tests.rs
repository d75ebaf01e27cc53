//! Tests for the watch module

use super::event::{
    is_relevant, relative_to, RunReason, Schedule, WatchEvent, WatchOptions, WatcherState,
};
use super::use_case::WatchUseCase;
use crate::application::generate::{GenerateOptions, GenerateUseCase};
use crate::domain::value_objects::IgnoreMatcher;
use crate::infrastructure::MemoryFs;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::tempdir;

// === WatchEvent tests ===

#[test]
fn test_watch_event_to_json_started() {
    let event = WatchEvent::Started {
        project_root: "/work/shop".to_string(),
    };
    let json = event.to_json();
    assert!(json.contains("\"event\":\"started\""));
    assert!(json.contains("\"command\":\"watch\""));
    assert!(json.contains("\"project_root\":\"/work/shop\""));
}

#[test]
fn test_watch_event_to_json_run_started() {
    let event = WatchEvent::RunStarted {
        reason: RunReason::Change,
        changes: vec!["src/main.rs".to_string()],
    };
    let json = event.to_json();
    assert!(json.contains("\"event\":\"run_started\""));
    assert!(json.contains("\"reason\":\"change\""));
    assert!(json.contains("\"changes\":[\"src/main.rs\"]"));
}

#[test]
fn test_watch_event_to_json_run_complete() {
    let event = WatchEvent::RunComplete {
        written: 3,
        unchanged: 1,
        errors: 0,
        warnings: 2,
        next_run_secs: 60,
    };
    let json = event.to_json();
    assert!(json.contains("\"event\":\"run_complete\""));
    assert!(json.contains("\"written\":3"));
    assert!(json.contains("\"unchanged\":1"));
    assert!(json.contains("\"next_run_secs\":60"));
}

#[test]
fn test_watch_event_to_json_error_escapes() {
    let event = WatchEvent::Error {
        message: "bad \"config\"".to_string(),
    };
    let json = event.to_json();
    assert!(json.contains("\"event\":\"error\""));
    assert!(json.contains("bad \\\"config\\\""));
}

// === Debounce and schedule ===

#[test]
fn test_debounce_waits_for_quiet_period() {
    let start = Instant::now();
    let mut state = WatcherState::with_debounce(Duration::from_millis(300));
    assert!(!state.is_due(start));

    state.add_change_at("src/a.rs".to_string(), start);
    assert!(state.has_pending());
    assert!(!state.is_due(start + Duration::from_millis(100)));

    state.add_change_at("src/b.rs".to_string(), start + Duration::from_millis(200));
    assert!(!state.is_due(start + Duration::from_millis(400)));
    assert!(state.is_due(start + Duration::from_millis(500)));

    assert_eq!(state.take_changes(), vec!["src/a.rs", "src/b.rs"]);
    assert!(!state.has_pending());
    assert!(!state.is_due(start + Duration::from_secs(5)));
}

#[test]
fn test_debounce_deduplicates_paths() {
    let now = Instant::now();
    let mut state = WatcherState::new();
    state.add_change_at("a".to_string(), now);
    state.add_change_at("a".to_string(), now);
    assert_eq!(state.take_changes().len(), 1);
}

#[test]
fn test_schedule_fires_after_interval() {
    let start = Instant::now();
    let mut schedule = Schedule::starting_at(Duration::from_secs(60), start);
    assert!(!schedule.is_due(start + Duration::from_secs(59)));
    assert!(schedule.is_due(start + Duration::from_secs(60)));

    schedule.reset(start + Duration::from_secs(60));
    assert!(!schedule.is_due(start + Duration::from_secs(100)));
    assert!(schedule.is_due(start + Duration::from_secs(120)));
}

// === Relevance ===

#[test]
fn test_relative_to_root() {
    let root = Path::new("/work/shop");
    assert_eq!(
        relative_to(root, Path::new("/work/shop/src/lib.rs")),
        Some("src/lib.rs".to_string())
    );
    assert_eq!(relative_to(root, root), None);
    assert_eq!(relative_to(root, Path::new("/elsewhere/x")), None);
}

#[test]
fn test_config_yaml_changes_are_relevant() {
    let ignore = IgnoreMatcher::empty();
    assert!(is_relevant(".agentrules/config.yaml", false, &ignore));
    assert!(is_relevant(".agentrules/config_manual.yml", false, &ignore));
    assert!(!is_relevant(".agentrules/notes.txt", false, &ignore));
}

#[test]
fn test_ignored_paths_are_not_relevant() {
    let (ignore, _) = IgnoreMatcher::from_content(
        Path::new("/work/shop"),
        Path::new("/work/shop/.gitignore"),
        "node_modules/\n/agent_*.md\n",
    );
    assert!(!is_relevant("node_modules/react/index.js", false, &ignore));
    assert!(!is_relevant("agent_api.md", false, &ignore));
    assert!(is_relevant("src/api.rs", false, &ignore));
}

// === Use case ===

#[test]
fn test_stopped_watch_runs_once_and_shuts_down() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.py"), "print()").unwrap();

    let generate = GenerateUseCase::new(MemoryFs::new()).with_env(|_| None);
    let options = WatchOptions::new(GenerateOptions::new(dir.path())).with_interval(Some(5));
    let use_case = WatchUseCase::new(generate, options);

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let running = Arc::new(AtomicBool::new(false));
    use_case
        .start(running, move |e| sink.lock().unwrap().push(e))
        .unwrap();

    let events = events.lock().unwrap();
    assert!(matches!(events[0], WatchEvent::Started { .. }));
    assert_eq!(
        events[1],
        WatchEvent::RunStarted {
            reason: RunReason::Initial,
            changes: Vec::new(),
        }
    );
    assert!(matches!(
        events[2],
        WatchEvent::RunComplete {
            written: 1,
            next_run_secs: 5,
            ..
        }
    ));
    assert_eq!(events.last(), Some(&WatchEvent::Shutdown));
}

#[test]
fn test_failed_run_reports_error_and_continues() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".agentrules")).unwrap();
    fs::write(
        dir.path().join(".agentrules/config.yaml"),
        "tree_focus:\n  - api: a\n  - api: b\n",
    )
    .unwrap();

    let generate = GenerateUseCase::new(MemoryFs::new()).with_env(|_| None);
    let use_case = WatchUseCase::new(generate, WatchOptions::new(GenerateOptions::new(dir.path())));

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let result = use_case.start(Arc::new(AtomicBool::new(false)), move |e| {
        sink.lock().unwrap().push(e)
    });

    assert!(result.is_ok());
    let events = events.lock().unwrap();
    assert!(events.iter().any(
        |e| matches!(e, WatchEvent::Error { message } if message.contains("duplicate domain"))
    ));
    assert_eq!(events.last(), Some(&WatchEvent::Shutdown));
}
