//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, in-memory)
//! - `scanner` - Builds the project tree from disk
//! - `ignore_loader` - Assembles ignore rules from config and ignore files

pub mod fs;
pub mod ignore_loader;
pub mod scanner;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};
pub use ignore_loader::{load_ignore, IgnoreSources, IGNORE_FILE_NAME};
pub use scanner::scan_project;
