use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use agentrules::application::WatchEvent;
use agentrules::{GenerateOptions, GenerateUseCase, LocalFs, WatchOptions, WatchUseCase};

use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(
    path: &Path,
    config: Option<PathBuf>,
    interval: Option<u64>,
    ui: &UiContext,
) -> Result<()> {
    let options = WatchOptions::new(GenerateOptions::new(path).with_config_path(config))
        .with_interval(interval)
        .with_json(ui.json);
    let use_case = WatchUseCase::new(GenerateUseCase::new(LocalFs::new()), options);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !ui.json {
        let root = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        print!(
            "{}",
            render_watch_header(&root.display().to_string(), interval, ui.color, ui.unicode)
        );
    }

    let json = ui.json;
    let (color, unicode) = (ui.color, ui.unicode);
    use_case.start(running, |event| {
        if json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_watch_event(&timestamp, &event, color, unicode);
        match event {
            WatchEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(())
}
