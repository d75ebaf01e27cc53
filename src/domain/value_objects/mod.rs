//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod domain_name;
mod hash;
mod ignore_patterns;
mod path;
mod pattern;
mod warning;

pub use config_warning::ConfigWarning;
pub use domain_name::{has_glob_meta, DomainName};
pub use hash::ContentHash;
pub use ignore_patterns::{
    IgnoreMatcher, IgnoreMatcherBuilder, IgnoreRule, MAX_FILE_SIZE, MAX_PATTERNS,
};
pub use path::{ancestors, is_within, PathError, RelPath};
pub use pattern::DomainPattern;
pub use warning::RunWarning;
