use crate::engine::PropagationError;
use crate::store::{NodeId, Registry};
use std::collections::HashSet;

/// Performs a Topological Sort using Depth-First Search (DFS).
///
/// Returns a list of NodeIds where every input appears before its consumer.
///
/// The registry's append-only discipline cannot produce a cycle, but the
/// sort still guards against one so that a corrupted topology fails loudly
/// instead of recursing forever.
pub fn sort<T>(registry: &Registry<T>) -> Result<Vec<NodeId>, PropagationError> {
    let count = registry.count();
    let mut order = Vec::with_capacity(count);
    let mut state = vec![VisitState::None; count];

    // Iterate 0..count so disconnected nodes are visited too.
    // Edges point Child -> Parent; post-order DFS yields [Parent, ..., Child].
    for i in 0..count {
        if state[i] == VisitState::None {
            visit(NodeId::new(i), registry, &mut state, &mut order)?;
        }
    }

    Ok(order)
}

#[derive(Clone, PartialEq, Eq)]
enum VisitState {
    None,
    Visiting, // Used for cycle detection
    Visited,
}

fn visit<T>(
    node: NodeId,
    registry: &Registry<T>,
    state: &mut Vec<VisitState>,
    order: &mut Vec<NodeId>,
) -> Result<(), PropagationError> {
    let idx = node.index();

    match state[idx] {
        VisitState::Visited => return Ok(()),
        VisitState::Visiting => return Err(PropagationError::CycleDetected),
        VisitState::None => state[idx] = VisitState::Visiting,
    }

    // Recurse on inputs (parents)
    for &parent in registry.get_parents(node) {
        visit(parent, registry, state, order)?;
    }

    state[idx] = VisitState::Visited;
    order.push(node);
    Ok(())
}

/// Identifies all nodes downstream from the given start nodes, start nodes
/// included. This is the set a commit must recompute.
pub fn downstream_from<T>(registry: &Registry<T>, start_nodes: &[NodeId]) -> HashSet<NodeId> {
    use std::collections::VecDeque;
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from(start_nodes.to_vec());

    while let Some(node) = queue.pop_front() {
        if visited.insert(node) {
            let mut edge_idx = registry.first_child[node.index()];
            while edge_idx != u32::MAX {
                let child = registry.child_targets[edge_idx as usize];
                queue.push_back(child);
                edge_idx = registry.next_child[edge_idx as usize];
            }
        }
    }
    visited
}
