use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::json;

use agentrules::{GenerateOptions, GenerateUseCase, LocalFs};

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::verify::render_verify;

/// Resolve the config and every domain, write nothing.
pub fn cmd_verify_config(path: &Path, config: Option<PathBuf>, ui: &UiContext) -> Result<()> {
    let options = GenerateOptions::new(path).with_config_path(config);
    let plan = GenerateUseCase::new(LocalFs::new()).plan(&options)?;

    if ui.json {
        json::emit(json!({
            "event": "complete",
            "command": "verify-config",
            "success": true,
            "config": plan.origin,
            "project_title": plan.project_title,
            "output_dir": plan.output_dir.display().to_string(),
            "domains": plan.summaries(),
            "warnings": plan.warnings.iter().map(json::warning_json).collect::<Vec<_>>(),
        }))?;
    } else {
        print!("{}", render_verify(&plan, ui.color, ui.unicode));
    }
    Ok(())
}
