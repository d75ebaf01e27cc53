use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

use agentrules::config::{config_dir, CONFIG_FILE};
use agentrules::{config_from_directories, parse_tree_directories};

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::config::{focus_label, render_config_written};

/// Build `.agentrules/config.yaml` from a `tree` diagram read on stdin.
pub fn cmd_import_tree(path: &Path, title: Option<String>, ui: &UiContext) -> Result<()> {
    if !path.is_dir() {
        bail!(agentrules::AgentRulesError::ProjectNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read tree diagram from stdin")?;

    let dirs = parse_tree_directories(&text);
    if dirs.is_empty() {
        bail!("no directories found in the tree diagram on stdin");
    }

    let defaults = super::existing_config(path)?;
    let config = config_from_directories(&dirs, title.as_deref().unwrap_or(""), &defaults);
    if config.tree_focus.as_ref().map_or(true, |f| f.is_empty()) {
        bail!("every directory in the diagram is excluded; nothing to focus on");
    }
    config.domain_specs()?;

    let config_path = config_dir(path).join(CONFIG_FILE);
    config.save(&config_path)?;

    if ui.json {
        let labels = config
            .tree_focus
            .as_ref()
            .map(|f| f.entries().iter().map(focus_label).collect::<Vec<_>>())
            .unwrap_or_default();
        json::emit(json::config_written_json("import-tree", &[config_path.as_path()], labels))?;
    } else {
        print!(
            "{}",
            render_config_written(
                "Tree Imported",
                &config,
                &[config_path.as_path()],
                path,
                Some("agentrules generate"),
                ui.color,
                ui.unicode,
            )
        );
    }
    Ok(())
}
