//! signalgrid: shape-controlled propagation benchmarks for a push-based
//! signal engine.
//!
//! The crate builds a synthetic diamond/grid DAG out of unary and binary
//! combinators (`grid::GridBuilder`), then times repeated commits to its
//! single root source (`grid::GridBenchmark`). The engine that stores the
//! graph and drives glitch-free propagation lives in `store`, `analysis`
//! and `engine`.

pub mod analysis;
pub mod display;
pub mod engine;
pub mod grid;
pub mod store;

// Re-export the public surface at the crate root.
pub use analysis::ShapeReport;
pub use engine::{PropagationError, SignalEngine};
pub use grid::{
    run_benchmark, run_reference_benchmark, BenchmarkConfig, BenchmarkReport, GridBenchmark,
    GridBuilder, GridError, StimulusFn,
};
pub use store::{BinaryFn, NodeId, UnaryFn};
