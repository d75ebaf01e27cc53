//! Watch Use Case
//!
//! Recurring generation:
//! - an initial run, then one every `recurring.interval_secs`
//! - file system monitoring (via `notify` crate) wakes the loop early
//! - debouncing (300ms)
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(GenerateOptions::new("."));
//! let use_case = WatchUseCase::new(GenerateUseCase::new(LocalFs::new()), options);
//! use_case.start(running, |event| { ... });
//! ```

mod event;
mod use_case;

#[cfg(test)]
mod tests;

pub use event::{
    is_relevant, relative_to, RunReason, Schedule, WatchEvent, WatchOptions, WatcherState,
    DEBOUNCE_MS, DEFAULT_INTERVAL_SECS,
};
pub use use_case::WatchUseCase;
