//! Algorithms module for dependency-ordered traversal
//!
//! Contains:
//! - Adjacency closure builder
//! - Kahn-style repeated-scan resolution

pub mod dependency_builder;
pub mod kahns;

pub use dependency_builder::build_adjacency;
pub use kahns::kahns_resolve_order;
