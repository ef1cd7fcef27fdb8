//! # topo-order: Dependency-Ordered Traversal
//!
//! Walks a borrowed, fixed-length sequence so that every item comes after all
//! items it depends on. Dependencies are declared between positions and
//! resolved once, at construction, with a Kahn-style repeated scan over a
//! dense adjacency closure.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (AdjacencyMatrix, IndexMapping), errors, invariants
//! - **Algorithms**: Adjacency building, repeated-scan resolution
//! - **Ports**: Inbound (DependencyOrderingApi) and Outbound (DependencyProvider, ItemSequence)
//! - **Adapters**: Ready-made providers (StaticDependencies, NoDependencies)
//! - **Application**: Service orchestration
//! - **Cursor**: The bidirectional traversal handed back to callers
//!
//! ## Example
//!
//! ```
//! use topo_order::{StaticDependencies, TopologicalCursor};
//!
//! let modules = vec!["logging", "storage", "http"];
//! // http needs storage, storage needs logging
//! let deps = StaticDependencies::new()
//!     .with_dependencies(2, [1])
//!     .with_dependencies(1, [0]);
//!
//! let order: Vec<_> = TopologicalCursor::new(&modules, &deps)
//!     .unwrap()
//!     .copied()
//!     .collect();
//! assert_eq!(order, vec!["logging", "storage", "http"]);
//! ```

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod cursor;
pub mod domain;
pub mod ports;

pub use adapters::{NoDependencies, StaticDependencies};
pub use application::service::OrderingService;
pub use config::OrderingConfig;
pub use cursor::TopologicalCursor;
pub use domain::entities::*;
pub use domain::errors::{CursorError, CursorResult, OrderingError, OrderingResult};
pub use domain::value_objects::*;
pub use ports::inbound::DependencyOrderingApi;
pub use ports::outbound::{DependencyProvider, ItemSequence};
