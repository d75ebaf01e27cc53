use agentrules::application::{RunReason, WatchEvent};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_watch_header(
    project_root: &str,
    interval: Option<u64>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "agentrules Watch");
    header.add("Project", project_root);
    match interval {
        Some(secs) => header.add("Interval", format!("{}s", secs)),
        None => header.add("Interval", "from config"),
    }
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

fn reason_label(reason: RunReason) -> &'static str {
    match reason {
        RunReason::Initial => "initial run",
        RunReason::Change => "change detected",
        RunReason::Schedule => "scheduled run",
    }
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);

    match event {
        WatchEvent::Started { project_root } => format!(
            "{} {} Watching: {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            project_root
        ),
        WatchEvent::RunStarted { reason, changes } => {
            let mut out = format!(
                "{} {} Generating ({})...\n",
                prefix,
                Icon::Progress.colored(supports_color, supports_unicode),
                reason_label(*reason)
            );
            for change in changes {
                out.push_str(&format!(
                    "{} {} Changed: {}\n",
                    prefix,
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    change
                ));
            }
            out
        }
        WatchEvent::RunComplete {
            written,
            unchanged,
            errors,
            warnings,
            next_run_secs,
        } => {
            let icon = if *errors > 0 {
                Icon::Warning
            } else {
                Icon::Success
            }
            .colored(supports_color, supports_unicode);

            let mut counts = format!("{} written, {} unchanged", written, unchanged);
            if *warnings > 0 {
                counts.push_str(&format!(", {} warnings", warnings));
            }
            if *errors > 0 {
                counts.push_str(&format!(", {} errors", errors));
            }
            format!(
                "{} {} Done: {} {}\n",
                prefix,
                icon,
                counts,
                ColoredText::dim(format!("(next run in {}s)", next_run_secs))
                    .render(supports_color)
            )
        }
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}
