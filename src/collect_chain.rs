use alloc::vec::Vec;

use crate::accumulator::Accumulator;

/// The chain behind [`collect_chain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectChain<T> {
    items: Vec<T>,
}

impl<T> Accumulator for CollectChain<T> {
    type Input = T;
    type Output = Vec<T>;

    fn push(&mut self, value: T) -> &mut Self {
        self.items.push(value);
        self
    }

    fn finish(&mut self) -> Vec<T> {
        core::mem::take(&mut self.items)
    }
}

/// Creates a chain that builds an ordered sequence of everything pushed
/// into it.
///
/// Unlike the scalar chains, a collecting chain that never saw a push
/// finishes to the empty vector, not to an "unset" marker. An empty
/// collection is a perfectly good collection.
///
/// # Examples
///
/// ```rust
/// use pullchain::{collect_chain, Accumulator};
///
/// assert_eq!(collect_chain(Some(3)).push(4).push(5).finish(), [3, 4, 5]);
///
/// let empty: Vec<i32> = collect_chain(None).finish();
/// assert!(empty.is_empty());
/// ```
pub fn collect_chain<T>(first: Option<T>) -> CollectChain<T> {
    let mut items = Vec::new();
    if let Some(v) = first {
        items.push(v);
    }
    CollectChain { items }
}
