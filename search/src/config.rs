/// Default cap on the number of results per search.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Per-filter search behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Cap on results for a non-empty query.
    pub max_results: usize,
    /// Whether an empty query lists every entity (uncapped, in insertion
    /// order) instead of nothing.
    pub return_all_on_empty_query: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            return_all_on_empty_query: false,
        }
    }
}

impl FilterConfig {
    /// Main search: blank until the user types.
    pub fn characters(max_results: usize) -> Self {
        Self {
            max_results,
            return_all_on_empty_query: false,
        }
    }

    /// Favorites list: shows everything by default.
    pub fn favorites(max_results: usize) -> Self {
        Self {
            max_results,
            return_all_on_empty_query: true,
        }
    }

    /// Tag browser: shows everything by default.
    pub fn tags(max_results: usize) -> Self {
        Self {
            max_results,
            return_all_on_empty_query: true,
        }
    }
}
