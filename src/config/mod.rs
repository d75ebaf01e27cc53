//! Configuration module for agentrules
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (AGENTRULES_*)
//! 3. Project config (`.agentrules/config_manual.yaml`, then `.agentrules/config.yaml`)
//! 4. Built-in defaults; with no config file the auto-analyzer supplies the domains

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    config_dir, discover, load_with_warnings, save, with_env_overrides, AUTO_CONFIG_FILE,
    CONFIG_DIR, CONFIG_FILE, DETECTED_CONFIG_FILE, MANUAL_CONFIG_FILE,
};
pub(crate) use loader::apply_env_overrides;
pub use types::{
    AutoConfig, ColorMode, Config, FocusEntry, OutputConfig, RecurringConfig, TreeFocus,
    DEFAULT_EXCLUDE_DIRS, DEFAULT_INCLUDE_EXTENSIONS,
};
