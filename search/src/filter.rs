//! Filter: the strategy set for one searchable collection.

use crate::config::FilterConfig;
use crate::index::Cache;
use crate::query::Query;
use crate::results::SearchResults;
use crate::strategy::{Strategy, StrategyKind};
use log::{debug, warn};
use std::sync::Arc;
use unicodex_core::{CodepointHex, SplitName, TagGroups};

/// Owns the strategies for one logical collection, fans queries out to them
/// and merges their hits.
///
/// Strategy order is result order: earlier strategies claim entities first.
pub struct Filter<T> {
    items: Vec<Arc<T>>,
    caches: Vec<Cache<T>>,
    tag_groups: Option<Arc<TagGroups>>,
    config: FilterConfig,
}

/// Create operations.
impl<T: SplitName> Filter<T> {
    pub fn new(strategies: impl IntoIterator<Item = Strategy>, config: FilterConfig) -> Self {
        Self {
            items: Vec::new(),
            caches: strategies.into_iter().map(Cache::new).collect(),
            tag_groups: None,
            config,
        }
    }

    /// Makes tags visible to the generic match predicate.
    pub fn with_tag_groups(mut self, tag_groups: Arc<TagGroups>) -> Self {
        self.tag_groups = Some(tag_groups);
        for missing in self.missing_dependencies() {
            warn!("filter has tag groups but no {missing} strategy; tag-only matches will be missed");
        }
        self
    }

    /// Builds a filter and indexes every entity, in order.
    pub fn build(
        strategies: impl IntoIterator<Item = Strategy>,
        config: FilterConfig,
        tag_groups: Option<Arc<TagGroups>>,
        entities: impl IntoIterator<Item = Arc<T>>,
    ) -> Self {
        let mut filter = Self::new(strategies, config);
        if let Some(tag_groups) = tag_groups {
            filter = filter.with_tag_groups(tag_groups);
        }
        for entity in entities {
            filter.add(entity);
        }
        debug!(
            "built filter over {} entities with strategies {:?}",
            filter.items.len(),
            filter.strategies().collect::<Vec<_>>()
        );
        filter
    }
}

/// Mutation operations.
impl<T: SplitName> Filter<T> {
    pub fn add(&mut self, entity: Arc<T>) {
        for cache in &mut self.caches {
            cache.add(&entity);
        }
        self.items.push(entity);
    }

    pub fn set_max_results(&mut self, max_results: usize) {
        self.config.max_results = max_results;
    }
}

/// Search operations.
impl<T: SplitName> Filter<T> {
    /// Searches every strategy in order.
    ///
    /// An empty query yields either every entity or nothing, per
    /// [`FilterConfig::return_all_on_empty_query`]. Otherwise results are
    /// deduplicated and capped at [`FilterConfig::max_results`].
    pub fn search<'a>(&'a self, query: &'a Query) -> SearchResults<'a, T> {
        if query.is_empty() {
            if self.config.return_all_on_empty_query {
                return SearchResults::new(self.items.iter(), usize::MAX);
            }
            return SearchResults::empty();
        }

        debug!("searching {:?} across {} strategies", query.fragments(), self.caches.len());
        let tags = self.tag_groups.as_deref();
        let hits = self
            .caches
            .iter()
            .flat_map(move |cache| cache.search(query, tags));
        SearchResults::new(hits, self.config.max_results)
    }

    /// Direct lookup through the codepoint index, bypassing query matching.
    /// `None` when the filter has no codepoint strategy or no such entity.
    pub fn get_by_codepoint(&self, codepoint: &CodepointHex) -> Option<&Arc<T>> {
        self.caches
            .iter()
            .find(|cache| cache.strategy().kind() == StrategyKind::Codepoint)?
            .bucket(codepoint.as_str())
            .first()
    }
}

/// Read operations.
impl<T: SplitName> Filter<T> {
    /// Every indexed entity, in insertion order.
    pub fn items(&self) -> &[Arc<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn config(&self) -> FilterConfig {
        self.config
    }

    pub fn strategies(&self) -> impl Iterator<Item = StrategyKind> + '_ {
        self.caches.iter().map(|cache| cache.strategy().kind())
    }

    /// Strategies that some member relies on to confirm its under-validated
    /// matches but that are absent. Only tag-aware filters have such
    /// dependencies; a filter without tag groups has nothing to miss.
    pub fn missing_dependencies(&self) -> Vec<StrategyKind> {
        if self.tag_groups.is_none() {
            return Vec::new();
        }
        let mut missing = Vec::new();
        for cache in &self.caches {
            if let Some(needed) = cache.strategy().relies_on() {
                if !self.strategies().any(|kind| kind == needed) && !missing.contains(&needed) {
                    missing.push(needed);
                }
            }
        }
        missing
    }
}
