use std::path::Path;

use agentrules::config::FocusEntry;
use agentrules::Config;

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::views::generate::display_relative;

/// Summary shown after a command saved one or more config files.
pub fn render_config_written(
    title: &str,
    config: &Config,
    written: &[&Path],
    project_root: &Path,
    next_step: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::success(title);

    let entries = config
        .tree_focus
        .as_ref()
        .map(|f| f.entries())
        .unwrap_or_default();
    summary.add_stat("domains", entries.len());
    for entry in entries {
        summary.add_info(focus_label(entry));
    }
    for path in written {
        summary.add_info(format!("wrote {}", display_relative(path, project_root)));
    }
    if let Some(hint) = next_step {
        summary.with_next_step(hint);
    }

    summary.render(supports_color, supports_unicode)
}

pub fn focus_label(entry: &FocusEntry) -> String {
    match entry {
        FocusEntry::Bare(path) => path.clone(),
        FocusEntry::Named { name, patterns } => format!("{}: {}", name, patterns.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentrules::TreeFocus;

    #[test]
    fn lists_focus_entries_and_written_files() {
        let config = Config {
            tree_focus: Some(TreeFocus(vec![
                FocusEntry::Bare("api".to_string()),
                FocusEntry::named("web", vec!["frontend/".to_string()]),
            ])),
            ..Config::default()
        };
        let file = Path::new("/p/.agentrules/config.yaml");

        let rendered = render_config_written(
            "Config Saved",
            &config,
            &[file],
            Path::new("/p"),
            Some("agentrules generate"),
            false,
            false,
        );
        assert!(rendered.contains("2 domains"));
        assert!(rendered.contains("[OK] api"));
        assert!(rendered.contains("[OK] web: frontend/"));
        assert!(rendered.contains("wrote .agentrules/config.yaml"));
        assert!(rendered.contains("Next: agentrules generate"));
    }
}
