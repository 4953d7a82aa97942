use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
}

/// Unary combinator: recomputes a derived value from one input.
pub type UnaryFn<T> = Arc<dyn Fn(&T) -> T>;

/// Binary combinator: recomputes a derived value from two inputs.
/// Left/right order is preserved; the function need not be commutative.
pub type BinaryFn<T> = Arc<dyn Fn(&T, &T) -> T>;

pub enum NodeKind<T> {
    /// Holds a mutable value, replaced by `commit`. No inputs.
    Source,
    /// `f(input)`, recomputed whenever the input changes.
    Unary(UnaryFn<T>),
    /// `f(left, right)`, recomputed whenever either input changes.
    Binary(BinaryFn<T>),
}

impl<T> Clone for NodeKind<T> {
    fn clone(&self) -> Self {
        match self {
            NodeKind::Source => NodeKind::Source,
            NodeKind::Unary(f) => NodeKind::Unary(Arc::clone(f)),
            NodeKind::Binary(f) => NodeKind::Binary(Arc::clone(f)),
        }
    }
}

// Combinators are opaque callables, so only the variant name is printable.
impl<T> fmt::Debug for NodeKind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Source => f.write_str("Source"),
            NodeKind::Unary(_) => f.write_str("Unary"),
            NodeKind::Binary(_) => f.write_str("Binary"),
        }
    }
}
