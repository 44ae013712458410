//! Evaluation counters.
//!
//! Owned by a `SelectorEngine` and reset by the host, typically once per
//! match. Nothing here feeds back into evaluation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Counters collected by `SelectorEngine`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Total `evaluate` calls, including ones that failed.
    pub calls: u64,
    pub fast_path_hits: u64,
    /// Calls that went through the general path.
    pub slow_path: u64,
    /// General-path calls served by a cached compilation.
    pub cache_hits: u64,
    /// General-path call count per selector text.
    pub slow_selectors: FxHashMap<String, u64>,
}

impl Diagnostics {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn record_fast_path(&mut self) {
        self.fast_path_hits += 1;
    }

    pub(crate) fn record_slow_path(&mut self, text: &str) {
        self.slow_path += 1;
        *self.slow_selectors.entry(text.to_string()).or_insert(0) += 1;
    }

    /// Selectors sorted by general-path call count, most frequent first.
    /// Candidates for the fast-path table.
    #[must_use]
    pub fn hottest_slow_selectors(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut hot: Vec<_> = self
            .slow_selectors
            .iter()
            .map(|(text, count)| (text.as_str(), *count))
            .collect();
        hot.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        hot.truncate(limit);
        hot
    }
}
