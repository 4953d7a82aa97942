//! Columnar storage for the signal dependency graph.
pub mod registry;
pub mod types;

// Re-export key types for convenient access
pub use registry::Registry;
pub use types::{BinaryFn, NodeId, NodeKind, UnaryFn};
