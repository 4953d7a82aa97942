use crate::analysis::topology;
use crate::engine::ledger::PropagationError;
use crate::store::{NodeId, Registry};

/// Recompute plan for commits against one source.
///
/// A commit must touch exactly the downstream nodes of its source, parents
/// before children. Both facts are fixed while the topology is frozen, so
/// the plan is compiled once and replayed for every subsequent commit.
#[derive(Debug, Clone)]
pub struct CommitSchedule {
    pub source: NodeId,
    /// Topology revision the plan was compiled against.
    pub revision: u64,
    /// Downstream nodes in topological order; the source itself is excluded.
    pub order: Vec<NodeId>,
}

impl CommitSchedule {
    pub fn matches(&self, source: NodeId, revision: u64) -> bool {
        self.source == source && self.revision == revision
    }
}

/// Compiles the schedule: intersect the global topological order with the
/// downstream set of `source`.
pub fn compile<T>(
    registry: &Registry<T>,
    source: NodeId,
    revision: u64,
) -> Result<CommitSchedule, PropagationError> {
    let affected = topology::downstream_from(registry, &[source]);
    let order = topology::sort(registry)?
        .into_iter()
        .filter(|id| *id != source && affected.contains(id))
        .collect();

    Ok(CommitSchedule { source, revision, order })
}
