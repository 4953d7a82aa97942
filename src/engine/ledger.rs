//! ledger.rs
//! Dense per-node value storage, separate from the topology columns.

use crate::store::NodeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropagationError {
    #[error("node {0:?} does not exist")]
    UnknownNode(NodeId),
    #[error("node {0:?} is not a source")]
    NotASource(NodeId),
    #[error("cycle detected")]
    CycleDetected,
}

#[derive(Debug, Clone)]
pub struct Ledger<T> {
    values: Vec<Option<T>>,
}

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T> Ledger<T> {
    pub fn new() -> Self { Self::default() }

    #[inline(always)]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.values.get(id.index())?.as_ref()
    }

    #[inline(always)]
    pub fn insert(&mut self, id: NodeId, value: T) {
        let idx = id.index();
        if idx >= self.values.len() {
            self.values.resize_with(idx + 1, || None);
        }
        self.values[idx] = Some(value);
    }
}
