//! Common test utilities for agentrules CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus helpers to run the binary
//! - Fixtures: small project layouts and configs

pub mod env;
pub mod fixtures;

pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
