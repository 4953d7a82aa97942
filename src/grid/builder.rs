//! builder.rs
//! Grows and shrinks a layer of derived nodes, one node per step, into a
//! diamond/grid-shaped DAG.

use crate::engine::SignalEngine;
use crate::grid::GridError;
use crate::store::{BinaryFn, NodeId, UnaryFn};
use tracing::debug;

/// Deterministic grid topology generator.
///
/// Starting from `inputs`, each target width in `widths` is reached by
/// repeated single-node steps. A growing step extends both boundaries with
/// `f1` and joins every adjacent pair with `f2` (width +1); a shrinking step
/// joins adjacent pairs only (width -1). The node count and fan pattern of
/// the resulting DAG are therefore fully determined by the width sequence.
pub struct GridBuilder<T> {
    /// Starting layer, length >= 1. Order determines which nodes are adjacent.
    pub inputs: Vec<NodeId>,
    /// Target widths, consumed in order. Every entry must be >= 1.
    pub widths: Vec<usize>,
    pub f1: UnaryFn<T>,
    pub f2: BinaryFn<T>,
}

impl<T: Clone> GridBuilder<T> {
    /// Runs the construction and returns the final layer. Nodes of interior
    /// layers are owned by the engine; the returned handles are the only
    /// ones still referencing the last layer.
    pub fn generate(&self, engine: &mut SignalEngine<T>) -> Result<Vec<NodeId>, GridError> {
        self.validate()?;

        let before = engine.node_count();
        let mut cur = self.inputs.clone();

        for &target in &self.widths {
            while cur.len() != target {
                let grow = target > cur.len();
                let next_len = if grow { cur.len() + 1 } else { cur.len() - 1 };
                let mut next = Vec::with_capacity(next_len);

                if grow {
                    next.push(engine.derive_unary(cur[0], self.f1.clone()));
                }
                for pair in cur.windows(2) {
                    next.push(engine.derive_binary(pair[0], pair[1], self.f2.clone()));
                }
                if grow {
                    next.push(engine.derive_unary(cur[cur.len() - 1], self.f1.clone()));
                }

                cur = next;
            }
        }

        debug!(
            added = engine.node_count() - before,
            final_width = cur.len(),
            "grid generated"
        );
        Ok(cur)
    }

    /// Configuration-time guard. A zero width is rejected here so that a
    /// shrink below width 1 can never be requested mid-construction.
    fn validate(&self) -> Result<(), GridError> {
        if self.inputs.is_empty() {
            return Err(GridError::EmptyInitialLayer);
        }
        if self.widths.is_empty() {
            return Err(GridError::EmptyWidthSequence);
        }
        if let Some(position) = self.widths.iter().position(|&w| w == 0) {
            return Err(GridError::InvalidWidth { position });
        }
        Ok(())
    }
}
