use std::path::PathBuf;

use anyhow::{bail, Result};

use agentrules::{GenerateOptions, GenerateUseCase, LocalFs};

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::views::generate::{render_generate_header, render_generate_result};

#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub path: PathBuf,
    pub config: Option<PathBuf>,
    pub use_detected: bool,
    pub output_dir: Option<String>,
    pub dry_run: bool,
    pub report_uncovered: bool,
}

impl GenerateArgs {
    fn options(&self) -> GenerateOptions {
        GenerateOptions::new(&self.path)
            .with_config_path(self.config.clone())
            .with_use_detected(self.use_detected)
            .with_output_dir(self.output_dir.clone())
            .with_dry_run(self.dry_run)
            .with_report_uncovered(self.report_uncovered)
    }
}

pub fn cmd_generate(args: GenerateArgs, ui: &UiContext) -> Result<()> {
    let options = args.options();
    let use_case = GenerateUseCase::new(LocalFs::new());

    let result = use_case.run(&options)?;
    let project_root = std::fs::canonicalize(&args.path).unwrap_or_else(|_| args.path.clone());

    if ui.json {
        json::emit(json::generate_result_json(&result, args.dry_run))?;
    } else {
        print!(
            "{}",
            render_generate_header(&project_root, args.dry_run, ui.color, ui.unicode)
        );
        println!();
        print!(
            "{}",
            render_generate_result(&result, &project_root, ui.color, ui.unicode)
        );
    }

    if !result.is_success() {
        bail!(
            "{} of {} document(s) could not be written",
            result.errors.len(),
            result.domains.len()
        );
    }
    Ok(())
}
