//! bench.rs
//! Drives timed root updates through a freshly built grid.

use crate::analysis::ShapeReport;
use crate::engine::SignalEngine;
use crate::grid::{GridBuilder, GridError};
use crate::store::{BinaryFn, UnaryFn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

/// Benchmark parameters: grow the grid to `peak_width`, collapse back to a
/// single node, then time `commit_count` sequential root updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// N: peak layer width.
    pub peak_width: usize,
    /// K: number of timed commits.
    pub commit_count: usize,
}

/// Produces the value committed on the i-th timed update. Values should be
/// distinct so every commit really replaces the source.
pub type StimulusFn<T> = Arc<dyn Fn(usize) -> T>;

pub struct GridBenchmark<T> {
    pub config: BenchmarkConfig,
    /// Initial value of the root source.
    pub seed: T,
    pub f1: UnaryFn<T>,
    pub f2: BinaryFn<T>,
    pub stimulus: StimulusFn<T>,
}

impl<T: Clone> GridBenchmark<T> {
    pub fn run(&self, engine: &mut SignalEngine<T>) -> Result<Duration, GridError> {
        self.run_with_clock(engine, Instant::now)
    }

    /// Runs against an injected monotonic clock, for deterministic tests.
    ///
    /// Construction is excluded from the measurement: the grid is built, the
    /// commit schedule compiled, and only then is the clock read around the
    /// commit loop. With `commit_count == 0` the clock is never read at all
    /// and the elapsed time is exactly zero.
    pub fn run_with_clock(
        &self,
        engine: &mut SignalEngine<T>,
        mut now: impl FnMut() -> Instant,
    ) -> Result<Duration, GridError> {
        let root = engine.create_source(self.seed.clone());

        let builder = GridBuilder {
            inputs: vec![root],
            widths: vec![self.config.peak_width, 1],
            f1: self.f1.clone(),
            f2: self.f2.clone(),
        };
        // The output layer is dropped: only the propagation cost of the
        // shape matters, never the values it carries.
        builder.generate(engine)?;
        engine.prepare(root)?;

        if self.config.commit_count == 0 {
            return Ok(Duration::ZERO);
        }

        let t0 = now();
        for i in 0..self.config.commit_count {
            engine.commit(root, (self.stimulus)(i))?;
        }
        let t1 = now();
        Ok(t1 - t0)
    }
}

/// Outcome of one run: what was measured, over which topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub config: BenchmarkConfig,
    pub shape: ShapeReport,
    pub elapsed_secs: f64,
}

/// Builds a fresh engine, runs the grid benchmark once, reports timing and
/// the shape it was measured against.
pub fn run_benchmark<T: Clone>(
    config: BenchmarkConfig,
    seed: T,
    f1: UnaryFn<T>,
    f2: BinaryFn<T>,
    stimulus: StimulusFn<T>,
) -> Result<BenchmarkReport, GridError> {
    let mut engine = SignalEngine::new();
    let bench = GridBenchmark { config, seed, f1, f2, stimulus };
    let elapsed = bench.run(&mut engine)?;
    let shape = ShapeReport::analyze(engine.registry());

    info!(
        peak_width = config.peak_width,
        commits = config.commit_count,
        nodes = shape.total_nodes,
        elapsed_secs = elapsed.as_secs_f64(),
        "grid benchmark complete"
    );

    Ok(BenchmarkReport { config, shape, elapsed_secs: elapsed.as_secs_f64() })
}

/// The reference configuration: integer signals seeded with 1, identity and
/// addition combinators, stimulus `10 + i`.
pub fn run_reference_benchmark(config: BenchmarkConfig) -> Result<BenchmarkReport, GridError> {
    run_benchmark(
        config,
        1i64,
        Arc::new(|a: &i64| *a),
        Arc::new(|a: &i64, b: &i64| a + b),
        Arc::new(|i| 10 + i as i64),
    )
}
