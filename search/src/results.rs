//! Search results types.

use std::collections::HashSet;
use std::sync::Arc;

/// Lazily merged, deduplicated and capped search results.
///
/// Borrows from the [`Filter`](crate::Filter). Hits are pulled from the
/// strategies in order only as the caller iterates, and pulling stops once
/// the cap is reached. The first strategy to surface an entity decides its
/// position.
pub struct SearchResults<'a, T> {
    hits: Box<dyn Iterator<Item = &'a Arc<T>> + 'a>,
    seen: HashSet<*const T>,
    remaining: usize,
}

impl<'a, T> SearchResults<'a, T> {
    pub(crate) fn new(hits: impl Iterator<Item = &'a Arc<T>> + 'a, cap: usize) -> Self {
        Self {
            hits: Box::new(hits),
            seen: HashSet::new(),
            remaining: cap,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(std::iter::empty(), 0)
    }

    /// Collects owned handles to the remaining results.
    pub fn to_vec(self) -> Vec<Arc<T>> {
        self.cloned().collect()
    }
}

impl<'a, T> Iterator for SearchResults<'a, T> {
    type Item = &'a Arc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            let hit = self.hits.next()?;
            if self.seen.insert(Arc::as_ptr(hit)) {
                self.remaining -= 1;
                return Some(hit);
            }
        }
        None
    }
}
