use std::path::Path;

use anyhow::Result;

use agentrules::application::{analyze_project, config_from_proposals};
use agentrules::config::{config_dir, AUTO_CONFIG_FILE, DETECTED_CONFIG_FILE};

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::config::{focus_label, render_config_written};

/// Write the analyzer's proposals to `config_auto.yaml` for review and to
/// `detected_config.yaml` for `generate --use-detected`.
pub fn cmd_auto_config(path: &Path, title: Option<String>, ui: &UiContext) -> Result<()> {
    let defaults = super::existing_config(path)?;
    let proposals = analyze_project(path, &defaults)?;
    let config = config_from_proposals(title.as_deref().unwrap_or(""), &proposals, &defaults);

    let dir = config_dir(path);
    let auto_path = dir.join(AUTO_CONFIG_FILE);
    let detected_path = dir.join(DETECTED_CONFIG_FILE);
    config.save(&auto_path)?;
    config.save(&detected_path)?;

    let written = [auto_path.as_path(), detected_path.as_path()];
    if ui.json {
        let labels = config
            .tree_focus
            .as_ref()
            .map(|f| f.entries().iter().map(focus_label).collect::<Vec<_>>())
            .unwrap_or_default();
        json::emit(json::config_written_json("auto-config", &written, labels))?;
    } else {
        print!(
            "{}",
            render_config_written(
                "Domains Detected",
                &config,
                &written,
                path,
                Some("agentrules generate --use-detected"),
                ui.color,
                ui.unicode,
            )
        );
    }
    Ok(())
}
