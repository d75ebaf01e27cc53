//! Generate Application Layer
//!
//! One run of the pipeline, from configuration to written documents.
//!
//! ## Structure
//!
//! - `options` - Generate configuration options
//! - `result` - Plan and result types
//! - `use_case` - Main GenerateUseCase implementation
//! - `tests` - Unit tests

mod options;
mod result;
mod use_case;


pub use options::GenerateOptions;
pub use result::{ConfigOrigin, DomainSummary, GeneratePlan, GenerateResult};
pub use use_case::GenerateUseCase;
