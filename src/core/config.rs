//! Selector engine configuration.
//!
//! Hosts build a `SelectorConfig` once per match (or take the default) and
//! hand it to `SelectorEngine::new`. None of the settings change which
//! entities a well-formed selector returns except `empty_type_clause`, which
//! decides what a selector without any type token means.

use serde::{Deserialize, Serialize};

/// Meaning of a selector that names no type token (`card`, `minion`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmptyTypeClause {
    /// No restriction on type, same as writing `card`.
    #[default]
    MatchAny,
    /// Empty union of types: nothing matches. Legacy card data relied on this.
    MatchNone,
    /// Refuse the selector with a semantic error.
    Reject,
}

/// Configuration for `SelectorEngine`.
///
/// ```
/// use ccg_select::core::{EmptyTypeClause, SelectorConfig};
///
/// let config = SelectorConfig::default()
///     .with_empty_type_clause(EmptyTypeClause::Reject)
///     .without_cache();
///
/// assert!(!config.cache_compiled);
/// assert!(config.collect_diagnostics);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// How to treat a selector without type tokens.
    pub empty_type_clause: EmptyTypeClause,

    /// Keep compiled general-path selectors keyed by their text.
    pub cache_compiled: bool,

    /// Count calls and slow-path selectors.
    pub collect_diagnostics: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            empty_type_clause: EmptyTypeClause::MatchAny,
            cache_compiled: true,
            collect_diagnostics: true,
        }
    }
}

impl SelectorConfig {
    /// Configuration reproducing legacy card data behaviour.
    #[must_use]
    pub fn legacy() -> Self {
        Self::default().with_empty_type_clause(EmptyTypeClause::MatchNone)
    }

    /// Set the empty type clause policy.
    #[must_use]
    pub fn with_empty_type_clause(mut self, policy: EmptyTypeClause) -> Self {
        self.empty_type_clause = policy;
        self
    }

    /// Disable the compiled-selector cache.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.cache_compiled = false;
        self
    }

    /// Disable diagnostics counters.
    #[must_use]
    pub fn without_diagnostics(mut self) -> Self {
        self.collect_diagnostics = false;
        self
    }
}
