use crate::store::{NodeKind, Registry};
use serde::{Deserialize, Serialize};

/// Structural statistics of a constructed graph.
///
/// The benchmark exists to parameterize topology, so a measurement is only
/// reproducible together with the shape it ran against; this report is what
/// gets recorded next to the timing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeReport {
    pub total_nodes: usize,
    pub sources: usize,
    pub unary: usize,
    pub binary: usize,
    /// Longest input chain from a source, in edges.
    pub depth: usize,
    /// Widest fan-out of any single node.
    pub max_fan_out: usize,
}

impl ShapeReport {
    pub fn analyze<T>(registry: &Registry<T>) -> Self {
        let count = registry.count();
        let mut report = ShapeReport { total_nodes: count, ..Default::default() };

        // Ids are append-ordered with parents first, so index order is a
        // valid topological order and one forward pass suffices.
        let mut depth = vec![0usize; count];

        for (i, kind) in registry.kinds.iter().enumerate() {
            match kind {
                NodeKind::Source => report.sources += 1,
                NodeKind::Unary(_) => report.unary += 1,
                NodeKind::Binary(_) => report.binary += 1,
            }

            let node = crate::store::NodeId::new(i);
            for &parent in registry.get_parents(node) {
                depth[i] = depth[i].max(depth[parent.index()] + 1);
            }
            report.depth = report.depth.max(depth[i]);
            report.max_fan_out = report.max_fan_out.max(registry.fan_out(node));
        }

        report
    }
}
