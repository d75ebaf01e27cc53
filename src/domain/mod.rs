//! Domain Layer
//!
//! Pure logic for partitioning a project into agent domains.
//!
//! ## Structure
//!
//! - `entities/` - ProjectTree, DomainSpec, DomainResult, AgentDocument
//! - `value_objects/` - RelPath, DomainPattern, DomainName, IgnoreMatcher, warnings
//! - `services/` - Resolver, tree renderer, aggregator, auto-analyzer, document composer
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
