//! registry.rs
//! Dense Columnar Layout: CSR parents + linked-list children.

use super::types::{NodeId, NodeKind};

#[derive(Debug, Clone)]
pub struct Registry<T> {
    // Columnar Arrays
    pub kinds: Vec<NodeKind<T>>,

    // Topology (CSR-ish + Adjacency)
    pub parents_flat: Vec<NodeId>,
    pub parents_ranges: Vec<(u32, u32)>, // (start, count)

    // Downstream traversal helpers
    pub first_child: Vec<u32>,
    pub child_targets: Vec<NodeId>,
    pub next_child: Vec<u32>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            kinds: Vec::new(),
            parents_flat: Vec::new(),
            parents_ranges: Vec::new(),
            first_child: Vec::new(),
            child_targets: Vec::new(),
            next_child: Vec::new(),
        }
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self { Self::default() }
    pub fn count(&self) -> usize { self.kinds.len() }

    /// Appends a node. Parents must already be registered, so every edge
    /// points backwards and the id order is a valid topological order.
    pub fn add_node(&mut self, kind: NodeKind<T>, parents: &[NodeId]) -> NodeId {
        let id = NodeId(self.kinds.len() as u32);

        // 1. Parents (CSR append)
        let start = self.parents_flat.len() as u32;
        let count = parents.len() as u32;
        self.parents_flat.extend_from_slice(parents);
        self.parents_ranges.push((start, count));

        // 2. Children (Adjacency list for downstream lookups)
        for &parent in parents {
            let p_idx = parent.index();
            let head = self.first_child[p_idx];
            let new_edge = self.child_targets.len() as u32;
            self.child_targets.push(id);
            self.next_child.push(head);
            self.first_child[p_idx] = new_edge;
        }

        // 3. Kind column
        self.kinds.push(kind);
        self.first_child.push(u32::MAX);

        id
    }

    #[inline(always)]
    pub fn get_parents(&self, id: NodeId) -> &[NodeId] {
        let (start, count) = self.parents_ranges[id.index()];
        &self.parents_flat[start as usize..(start + count) as usize]
    }

    /// Number of consumers reading this node.
    pub fn fan_out(&self, id: NodeId) -> usize {
        let mut n = 0;
        let mut edge_idx = self.first_child[id.index()];
        while edge_idx != u32::MAX {
            n += 1;
            edge_idx = self.next_child[edge_idx as usize];
        }
        n
    }
}
