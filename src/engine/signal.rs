//! A synchronous, single-threaded push-based signal engine.
//!
//! A commit replaces one source value and drives propagation to completion
//! before returning: every downstream node is recomputed exactly once, all
//! inputs before their consumers, so no node ever observes a half-updated
//! graph.

use crate::engine::ledger::{Ledger, PropagationError};
use crate::engine::schedule::{self, CommitSchedule};
use crate::store::{BinaryFn, NodeId, NodeKind, Registry, UnaryFn};
use tracing::debug;

pub struct SignalEngine<T> {
    registry: Registry<T>,
    ledger: Ledger<T>,
    /// Cached commit plan, valid while (source, revision) match.
    schedule: Option<CommitSchedule>,
    /// Bumped on every node addition.
    revision: u64,
}

impl<T> SignalEngine<T> {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            ledger: Ledger::new(),
            schedule: None,
            revision: 0,
        }
    }

    pub fn node_count(&self) -> usize { self.registry.count() }

    pub fn registry(&self) -> &Registry<T> { &self.registry }

    /// Current value of a node, if the id is valid.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.ledger.get(id)
    }

    fn expect_source(&self, id: NodeId) -> Result<(), PropagationError> {
        match self.registry.kinds.get(id.index()) {
            None => Err(PropagationError::UnknownNode(id)),
            Some(NodeKind::Source) => Ok(()),
            Some(_) => Err(PropagationError::NotASource(id)),
        }
    }
}

impl<T> Default for SignalEngine<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Clone> SignalEngine<T> {
    pub fn create_source(&mut self, initial: T) -> NodeId {
        let id = self.registry.add_node(NodeKind::Source, &[]);
        self.ledger.insert(id, initial);
        self.revision += 1;
        id
    }

    /// Derives a node recomputed as `f(input)`. Evaluated eagerly, so the
    /// graph is consistent the moment the handle is returned.
    ///
    /// Panics if `input` is not a registered node; handle misuse is a caller
    /// bug, not a runtime condition.
    pub fn derive_unary(&mut self, input: NodeId, f: UnaryFn<T>) -> NodeId {
        let initial = f(self.value_of(input));
        let id = self.registry.add_node(NodeKind::Unary(f), &[input]);
        self.ledger.insert(id, initial);
        self.revision += 1;
        id
    }

    /// Derives a node recomputed as `f(left, right)`, order preserved.
    pub fn derive_binary(&mut self, left: NodeId, right: NodeId, f: BinaryFn<T>) -> NodeId {
        let initial = f(self.value_of(left), self.value_of(right));
        let id = self.registry.add_node(NodeKind::Binary(f), &[left, right]);
        self.ledger.insert(id, initial);
        self.revision += 1;
        id
    }

    /// Compiles the commit schedule for `source` ahead of time, so the first
    /// `commit` after a construction phase pays propagation cost only.
    pub fn prepare(&mut self, source: NodeId) -> Result<(), PropagationError> {
        self.expect_source(source)?;
        self.ensure_schedule(source)
    }

    /// Atomically replaces a source value and propagates to completion.
    pub fn commit(&mut self, source: NodeId, value: T) -> Result<(), PropagationError> {
        self.expect_source(source)?;
        self.ledger.insert(source, value);
        self.ensure_schedule(source)?;

        let plan = self.schedule.take().expect("BUG: schedule compiled above");
        for &node in &plan.order {
            let next = self.eval(node);
            self.ledger.insert(node, next);
        }
        self.schedule = Some(plan);

        Ok(())
    }

    fn ensure_schedule(&mut self, source: NodeId) -> Result<(), PropagationError> {
        let valid = self
            .schedule
            .as_ref()
            .is_some_and(|s| s.matches(source, self.revision));
        if !valid {
            let plan = schedule::compile(&self.registry, source, self.revision)?;
            debug!(
                source = source.index(),
                nodes = plan.order.len(),
                "commit schedule compiled"
            );
            self.schedule = Some(plan);
        }
        Ok(())
    }

    fn eval(&self, id: NodeId) -> T {
        match &self.registry.kinds[id.index()] {
            NodeKind::Source => self.value_of(id).clone(),
            NodeKind::Unary(f) => {
                let p = self.registry.get_parents(id);
                f(self.value_of(p[0]))
            }
            NodeKind::Binary(f) => {
                let p = self.registry.get_parents(id);
                f(self.value_of(p[0]), self.value_of(p[1]))
            }
        }
    }

    fn value_of(&self, id: NodeId) -> &T {
        self.ledger
            .get(id)
            .expect("BUG: every registered node holds a value")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::Arc;

    fn identity() -> UnaryFn<i64> {
        Arc::new(|a: &i64| *a)
    }

    fn add() -> BinaryFn<i64> {
        Arc::new(|a: &i64, b: &i64| a + b)
    }

    #[test]
    fn test_derived_values_available_at_creation() {
        let mut engine: SignalEngine<i64> = SignalEngine::new();
        let s = engine.create_source(3);
        let u = engine.derive_unary(s, Arc::new(|a: &i64| a * 2));
        let b = engine.derive_binary(s, u, add());

        assert_eq!(engine.value(s), Some(&3));
        assert_eq!(engine.value(u), Some(&6));
        assert_eq!(engine.value(b), Some(&9));
    }

    #[test]
    fn test_commit_propagates_through_diamond() {
        let mut engine: SignalEngine<i64> = SignalEngine::new();
        let s = engine.create_source(1);
        let u1 = engine.derive_unary(s, identity());
        let u2 = engine.derive_unary(s, identity());
        let b = engine.derive_binary(u1, u2, add());
        assert_eq!(engine.value(b), Some(&2));

        engine.commit(s, 10).unwrap();
        assert_eq!(engine.value(b), Some(&20));

        engine.commit(s, -4).unwrap();
        assert_eq!(engine.value(b), Some(&-8));
    }

    #[test]
    fn test_commit_recomputes_each_node_exactly_once() {
        // In a diamond, a naive push would evaluate the join twice per
        // commit (once per input edge). Count invocations to prove the
        // glitch-free contract.
        let calls = Rc::new(Cell::new(0usize));
        let counted = {
            let calls = Rc::clone(&calls);
            let f: BinaryFn<i64> = Arc::new(move |a: &i64, b: &i64| {
                calls.set(calls.get() + 1);
                a + b
            });
            f
        };

        let mut engine: SignalEngine<i64> = SignalEngine::new();
        let s = engine.create_source(1);
        let u1 = engine.derive_unary(s, identity());
        let u2 = engine.derive_unary(s, identity());
        let _b = engine.derive_binary(u1, u2, counted);

        calls.set(0); // ignore the eager evaluation at creation
        engine.commit(s, 5).unwrap();
        assert_eq!(calls.get(), 1);

        engine.commit(s, 6).unwrap();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_commit_rejects_non_source_targets() {
        let mut engine: SignalEngine<i64> = SignalEngine::new();
        let s = engine.create_source(1);
        let u = engine.derive_unary(s, identity());

        assert_eq!(engine.commit(u, 2), Err(PropagationError::NotASource(u)));
        let bogus = NodeId::new(99);
        assert_eq!(engine.commit(bogus, 2), Err(PropagationError::UnknownNode(bogus)));
        // The graph is untouched by the failed commits.
        assert_eq!(engine.value(u), Some(&1));
    }

    #[test]
    fn test_schedule_invalidated_by_new_nodes() {
        let mut engine: SignalEngine<i64> = SignalEngine::new();
        let s = engine.create_source(1);
        let u = engine.derive_unary(s, identity());
        engine.prepare(s).unwrap();
        engine.commit(s, 2).unwrap();
        assert_eq!(engine.value(u), Some(&2));

        // Extend the graph after the plan was compiled; the next commit
        // must reach the new node too.
        let tail = engine.derive_unary(u, Arc::new(|a: &i64| a + 100));
        engine.commit(s, 7).unwrap();
        assert_eq!(engine.value(tail), Some(&107));
    }

    #[test]
    fn test_commit_untouched_branch_keeps_value() {
        let mut engine: SignalEngine<i64> = SignalEngine::new();
        let s1 = engine.create_source(1);
        let s2 = engine.create_source(100);
        let both = engine.derive_binary(s1, s2, add());
        let only_s2 = engine.derive_unary(s2, identity());

        engine.commit(s1, 5).unwrap();
        assert_eq!(engine.value(both), Some(&105));
        assert_eq!(engine.value(only_s2), Some(&100));
    }
}
