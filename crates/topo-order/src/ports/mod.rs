//! Ports module for dependency-ordered traversal
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::DependencyOrderingApi;
pub use outbound::{DependencyProvider, ItemSequence};
