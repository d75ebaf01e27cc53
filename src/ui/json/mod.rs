//! NDJSON output for `--json`.
//!
//! Every command writes one JSON object per line to stdout. Objects carry
//! an `event` field and the `command` that produced them.

use std::io::{self, Write};
use std::path::Path;

use agentrules::application::GenerateResult;
use agentrules::RunWarning;
use serde_json::{json, Value};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &Value) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write a raw JSON value to stdout.
pub fn emit(event: Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

pub fn warning_json(warning: &RunWarning) -> Value {
    json!({
        "kind": warning.kind(),
        "message": warning.to_string(),
    })
}

fn paths_json(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

pub fn generate_result_json(result: &GenerateResult, dry_run: bool) -> Value {
    json!({
        "event": "complete",
        "command": "generate",
        "success": result.is_success(),
        "dry_run": dry_run,
        "config": result.origin,
        "project_title": result.project_title,
        "output_dir": result.output_dir.display().to_string(),
        "domains": result.domains,
        "written": paths_json(&result.written),
        "unchanged": paths_json(&result.unchanged),
        "planned": paths_json(&result.planned),
        "errors": result.errors,
        "warnings": result.warnings.iter().map(warning_json).collect::<Vec<_>>(),
        "uncovered": result.uncovered,
    })
}

pub fn config_written_json(command: &str, files: &[&Path], domains: Vec<String>) -> Value {
    json!({
        "event": "complete",
        "command": command,
        "success": true,
        "files": files.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        "domains": domains,
    })
}

pub fn error_json(message: &str) -> Value {
    json!({
        "event": "error",
        "message": message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn write_event_writes_one_line() {
        let mut buffer = Vec::new();
        write_event(&mut buffer, &error_json("boom")).unwrap();
        write_event(&mut buffer, &error_json("again")).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["event"], "error");
        assert_eq!(parsed["message"], "boom");
    }

    #[test]
    fn warning_has_kind_and_message() {
        let value = warning_json(&RunWarning::EmptyDomain {
            domain: "docs".to_string(),
        });
        assert_eq!(value["kind"], RunWarning::EmptyDomain { domain: String::new() }.kind());
        assert!(value["message"].as_str().unwrap().contains("docs"));
    }

    #[test]
    fn generate_result_lists_written_paths() {
        let result = GenerateResult {
            written: vec![PathBuf::from("/p/agent_api.md")],
            ..Default::default()
        };
        let value = generate_result_json(&result, false);
        assert_eq!(value["command"], "generate");
        assert_eq!(value["success"], true);
        assert_eq!(value["written"][0], "/p/agent_api.md");
        assert_eq!(value["config"], Value::Null);
    }
}
