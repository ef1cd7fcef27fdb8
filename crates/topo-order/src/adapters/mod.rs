//! # Adapters Layer (Hexagonal Architecture)
//!
//! Ready-made implementations of the outbound `DependencyProvider` port.

mod static_dependencies;

pub use static_dependencies::{NoDependencies, StaticDependencies};
