pub mod auto_config;
pub mod generate;
pub mod import_tree;
pub mod init;
pub mod verify;
pub mod watch;

use std::path::Path;

use anyhow::Result;

use agentrules::config::{self, Config};

/// The project's discovered config, used as defaults for files a command
/// writes. Falls back to built-in defaults when none exists.
pub(crate) fn existing_config(project_root: &Path) -> Result<Config> {
    match config::discover(project_root, false) {
        Some(path) => Ok(Config::load(&path)?),
        None => Ok(Config::default()),
    }
}
