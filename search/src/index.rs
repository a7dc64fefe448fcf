//! Inverted index for one strategy.

use crate::query::Query;
use crate::strategy::Strategy;
use std::collections::HashMap;
use std::sync::Arc;
use unicodex_core::{SplitName, TagGroups};

/// Inverted index ("cache") mapping strategy keys to the entities that
/// produced them.
///
/// Buckets are append-only and keep insertion order. An entity producing the
/// same key twice is stored once in that bucket.
pub struct Cache<T> {
    strategy: Strategy,
    entries: HashMap<String, Vec<Arc<T>>>,
}

impl<T: SplitName> Cache<T> {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            entries: HashMap::new(),
        }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn add(&mut self, entity: &Arc<T>) {
        if !self.strategy.indexes::<T>(entity) {
            return;
        }
        for key in self.strategy.keys_for::<T>(entity) {
            self.entries.entry(key).or_default().push(Arc::clone(entity));
        }
    }

    /// Entries stored under an already-normalized key.
    pub fn bucket(&self, key: &str) -> &[Arc<T>] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Lazily yields bucket entries for the query's probe keys that pass the
    /// strategy's match check. Only the probe key list is computed up front.
    pub fn search<'a>(
        &'a self,
        query: &'a Query,
        tags: Option<&'a TagGroups>,
    ) -> impl Iterator<Item = &'a Arc<T>> + 'a {
        self.strategy
            .query_keys_for(query)
            .into_iter()
            .filter_map(move |key| self.entries.get(&key))
            .flatten()
            .filter(move |hit| self.strategy.matches::<T>(query, hit, tags))
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }
}
