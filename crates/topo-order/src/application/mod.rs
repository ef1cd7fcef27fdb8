//! Application layer: orchestration of the construction pipeline.

pub mod service;

pub use service::OrderingService;
