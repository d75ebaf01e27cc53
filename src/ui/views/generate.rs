use std::path::Path;

use agentrules::application::{ConfigOrigin, GenerateResult};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn origin_label(origin: Option<&ConfigOrigin>, project_root: &Path) -> String {
    match origin {
        Some(ConfigOrigin::File { path }) => display_relative(path, project_root),
        Some(ConfigOrigin::Auto) => "none (auto-analysis)".to_string(),
        None => "-".to_string(),
    }
}

pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}

pub fn render_generate_header(
    project_root: &Path,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "agentrules Generate (dry run)"
    } else {
        "agentrules Generate"
    };
    let mut header = CommandHeader::new(Icon::Generate, title);
    header.add("Project", project_root.display().to_string());
    header.render(supports_color, supports_unicode)
}

/// Domain table, warnings, then the summary box.
pub fn render_generate_result(
    result: &GenerateResult,
    project_root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n\n",
        ColoredText::dim("Config:").render(supports_color),
        origin_label(result.origin.as_ref(), project_root)
    ));

    let width = result
        .domains
        .iter()
        .map(|d| d.name.len())
        .max()
        .unwrap_or(0);
    for domain in &result.domains {
        let icon = if domain.file_count == 0 {
            Icon::Warning
        } else {
            Icon::Success
        };
        out.push_str(&format!(
            "  {} {:<width$}  {:>4} files  {}\n",
            icon.colored(supports_color, supports_unicode),
            domain.name,
            domain.file_count,
            ColoredText::dim(domain.file_name.as_str()).render(supports_color),
            width = width
        ));
    }
    if !result.domains.is_empty() {
        out.push('\n');
    }

    let mut block = WarningBlock::new(format!("{} warning(s)", result.warnings.len()));
    for warning in &result.warnings {
        block.add_line(warning.to_string());
    }
    if !block.is_empty() {
        out.push_str(&block.render(supports_color, supports_unicode));
    }

    let mut summary = if !result.is_success() {
        ResultSummary::partial("Generation Finished With Errors")
    } else if !result.planned.is_empty() {
        ResultSummary::success("Dry Run Complete")
    } else {
        ResultSummary::success("Generation Complete")
    };

    if !result.planned.is_empty() {
        summary.add_stat("documents would be written", result.planned.len());
        for path in &result.planned {
            summary.add_info(display_relative(path, project_root));
        }
    } else {
        summary.add_stat("documents written", result.written.len());
        summary.add_stat("documents unchanged", result.unchanged.len());
    }
    if !result.errors.is_empty() {
        summary.add_stat("write errors", result.errors.len());
        for error in &result.errors {
            summary.add_warning(error.as_str());
        }
        summary.with_next_step("check permissions on the output directory and rerun");
    } else if result.origin == Some(ConfigOrigin::Auto) {
        summary.with_next_step("run `agentrules init` to pick the domains yourself");
    }

    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}
