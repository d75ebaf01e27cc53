use std::path::PathBuf;

use agentrules::config::ColorMode;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// agentrules - domain boundary files for AI coding assistants
#[derive(Parser, Debug)]
#[command(name = "agentrules")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write one agent document per domain
    Generate {
        /// Project root
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Config file (default: discovered under .agentrules/)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also consider .agentrules/detected_config.yaml
        #[arg(long)]
        use_detected: bool,

        /// Output directory, relative to the project root
        #[arg(long)]
        output_dir: Option<String>,

        /// Dry run - show what would be written
        #[arg(long)]
        dry_run: bool,

        /// Warn about files that belong to no domain
        #[arg(long)]
        report_uncovered: bool,
    },

    /// Interactive setup of .agentrules/config.yaml
    Init {
        /// Project root
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Project title used in generated documents
        #[arg(long)]
        title: Option<String>,

        /// Accept every default without prompting
        #[arg(short, long)]
        yes: bool,
    },

    /// Propose domains from the directory layout
    AutoConfig {
        /// Project root
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Project title used in generated documents
        #[arg(long)]
        title: Option<String>,
    },

    /// Build .agentrules/config.yaml from a tree diagram read on stdin
    ImportTree {
        /// Project root
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Project title used in generated documents
        #[arg(long)]
        title: Option<String>,
    },

    /// Show the config a run would use and the domains it resolves to
    VerifyConfig {
        /// Project root
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Config file (default: discovered under .agentrules/)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Regenerate on an interval and whenever project files change
    Watch {
        /// Project root
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Config file (default: discovered under .agentrules/)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seconds between scheduled runs (default: recurring.interval_secs)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
    },
}
