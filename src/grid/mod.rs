//! Grid topology construction and the benchmark driver built on top of it.
pub mod bench;
pub mod builder;
pub mod error;

pub use bench::{
    run_benchmark, run_reference_benchmark, BenchmarkConfig, BenchmarkReport, GridBenchmark,
    StimulusFn,
};
pub use builder::GridBuilder;
pub use error::GridError;
