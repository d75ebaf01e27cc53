//! Init command - interactive setup of `.agentrules/config.yaml`
//!
//! Steps: project title, then a multi-select over the analyzer's proposed
//! domains, then an offer to generate right away. `-y` (or a
//! non-interactive terminal) accepts every default.

use std::io::IsTerminal;
use std::path::Path;

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, MultiSelect};

use agentrules::application::{analyze_project, config_from_proposals};
use agentrules::config::{config_dir, CONFIG_FILE};
use agentrules::domain::services::Proposal;

use crate::commands::generate::{cmd_generate, GenerateArgs};
use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::theme::PromptTheme;
use crate::ui::views::config::{focus_label, render_config_written};

pub fn cmd_init(path: &Path, title: Option<String>, yes: bool, ui: &UiContext) -> Result<()> {
    let prompt = !yes && ui.interactive() && std::io::stdin().is_terminal();
    let theme = PromptTheme::new(ui.unicode);
    let config_path = config_dir(path).join(CONFIG_FILE);

    if config_path.exists() && !yes {
        if !prompt {
            bail!(
                "{} already exists. Pass -y to overwrite it.",
                config_path.display()
            );
        }
        let overwrite = Confirm::with_theme(&theme)
            .with_prompt(format!("{} exists. Overwrite it?", config_path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let defaults = super::existing_config(path)?;
    let default_title = title.unwrap_or_else(|| defaults.title_for(path));
    let title = if prompt {
        Input::<String>::with_theme(&theme)
            .with_prompt("Project title")
            .default(default_title)
            .interact_text()?
    } else {
        default_title
    };

    let proposals = analyze_project(path, &defaults)?;
    let selected = if prompt {
        select_domains(&theme, &proposals)?
    } else {
        proposals
    };
    if selected.is_empty() {
        bail!("no domains selected");
    }

    let config = config_from_proposals(&title, &selected, &defaults);
    config.save(&config_path)?;

    let labels: Vec<String> = config
        .tree_focus
        .as_ref()
        .map(|f| f.entries().iter().map(focus_label).collect::<Vec<_>>())
        .unwrap_or_default();
    if ui.json {
        json::emit(json::config_written_json("init", &[config_path.as_path()], labels))?;
    } else {
        print!(
            "{}",
            render_config_written(
                "Config Saved",
                &config,
                &[config_path.as_path()],
                path,
                Some("agentrules generate"),
                ui.color,
                ui.unicode,
            )
        );
    }

    let generate_now = if prompt {
        Confirm::with_theme(&theme)
            .with_prompt("Generate agent documents now?")
            .default(true)
            .interact()?
    } else {
        yes
    };
    if generate_now {
        cmd_generate(
            GenerateArgs {
                path: path.to_path_buf(),
                config: Some(config_path),
                use_detected: false,
                output_dir: None,
                dry_run: false,
                report_uncovered: false,
            },
            ui,
        )?;
    }
    Ok(())
}

fn select_domains(theme: &PromptTheme, proposals: &[Proposal]) -> Result<Vec<Proposal>> {
    let items: Vec<String> = proposals
        .iter()
        .map(|p| format!("{}  ({} files)", p.dir, p.file_count))
        .collect();
    let defaults = vec![true; items.len()];

    let picked = MultiSelect::with_theme(theme)
        .with_prompt("Domains (space to toggle, enter to confirm)")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    Ok(picked.into_iter().map(|i| proposals[i].clone()).collect())
}
