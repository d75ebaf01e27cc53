//! agentrules CLI - domain boundary files for AI coding assistants
//!
//! Usage: agentrules <COMMAND>
//!
//! Commands:
//!   generate       Write one agent document per domain
//!   init           Interactive setup of `.agentrules/config.yaml`
//!   auto-config    Propose domains from the directory layout
//!   import-tree    Build a config from a tree diagram on stdin
//!   verify-config  Show the config a run would use and its domains
//!   watch          Regenerate on an interval and on file changes

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let ui = ui::context::UiContext::new(cli.json, cli.verbose, cli.color.into());

    let result = match cli.command {
        Commands::Generate {
            path,
            config,
            use_detected,
            output_dir,
            dry_run,
            report_uncovered,
        } => commands::generate::cmd_generate(
            commands::generate::GenerateArgs {
                path,
                config,
                use_detected,
                output_dir,
                dry_run,
                report_uncovered,
            },
            &ui,
        ),
        Commands::Init { path, title, yes } => commands::init::cmd_init(&path, title, yes, &ui),
        Commands::AutoConfig { path, title } => {
            commands::auto_config::cmd_auto_config(&path, title, &ui)
        }
        Commands::ImportTree { path, title } => {
            commands::import_tree::cmd_import_tree(&path, title, &ui)
        }
        Commands::VerifyConfig { path, config } => {
            commands::verify::cmd_verify_config(&path, config, &ui)
        }
        Commands::Watch {
            path,
            config,
            interval,
        } => commands::watch::cmd_watch(&path, config, interval, &ui),
    };

    if let Err(e) = result {
        ui::render_error(&e, &ui);
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over -v
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();

    tracing::debug!(verbosity, "logging initialized");
}
