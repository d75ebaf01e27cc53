use std::path::Path;

use agentrules::application::GeneratePlan;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::generate::{display_relative, origin_label};

pub fn render_verify(plan: &GeneratePlan, supports_color: bool, supports_unicode: bool) -> String {
    let root = plan.project_root.as_path();

    let mut header = CommandHeader::new(Icon::Config, "agentrules Verify Config");
    header.add("Project", root.display().to_string());
    header.add("Config", origin_label(Some(&plan.origin), root));
    header.add("Title", plan.project_title.as_str());
    header.add("Output", display_output(&plan.output_dir, root));

    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');

    for (result, document) in plan.results.iter().zip(&plan.documents) {
        let icon = if result.is_empty() {
            Icon::Warning
        } else {
            Icon::Success
        };
        out.push_str(&format!(
            "{} {} {}\n",
            icon.colored(supports_color, supports_unicode),
            ColoredText::plain(result.name().as_str()).bold().render(supports_color),
            ColoredText::dim(format!(
                "({} files -> {})",
                result.paths().len(),
                document.file_name()
            ))
            .render(supports_color)
        ));
        for line in result.tree().lines() {
            out.push_str(&format!("    {}\n", line));
        }
        out.push('\n');
    }

    let mut block = WarningBlock::new(format!("{} warning(s)", plan.warnings.len()));
    for warning in &plan.warnings {
        block.add_line(warning.to_string());
    }
    if !block.is_empty() {
        out.push_str(&block.render(supports_color, supports_unicode));
    } else {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success("Configuration is valid").render(supports_color)
        ));
    }

    out
}

fn display_output(output_dir: &Path, root: &Path) -> String {
    let rel = display_relative(output_dir, root);
    if rel.is_empty() {
        ".".to_string()
    } else {
        rel
    }
}
