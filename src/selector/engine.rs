//! Selector evaluation.
//!
//! `SelectorEngine` is the context object hosts keep for a match: it owns the
//! configuration, the compiled-selector cache and the diagnostics counters.
//! Evaluation itself is a pure function of (board, perspective, text); the
//! engine's state only saves work and counts it.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::cards::CardInstance;
use crate::core::{Board, PlayerId, Result, SelectorConfig, SelectorError};
use crate::effects::ResultSet;

use super::clause::Perspective;
use super::compiler::{compile, CompiledSelector};
use super::diagnostics::Diagnostics;
use super::fast_path;

/// Evaluates selectors against a board.
///
/// ```
/// use ccg_select::cards::{CardDefinition, CardId, CardType};
/// use ccg_select::core::{Board, PlayerId, SelectorConfig};
/// use ccg_select::selector::SelectorEngine;
/// use ccg_select::zones::Zone;
///
/// let yeti = CardDefinition::new(CardId::new(1), "Chillwind Yeti", CardType::Minion).with_stats(4, 5);
/// let mut board = Board::new();
/// let mine = board.spawn(PlayerId::FIRST, &yeti, PlayerId::FIRST, Zone::Play);
/// board.spawn(PlayerId::SECOND, &yeti, PlayerId::SECOND, Zone::Play);
///
/// let mut engine = SelectorEngine::new(SelectorConfig::default());
/// let targets = engine.evaluate(&board, PlayerId::FIRST, "own minion").unwrap();
///
/// assert_eq!(targets.to_vec(), vec![mine]);
/// assert_eq!(engine.diagnostics().fast_path_hits, 1);
/// ```
#[derive(Debug, Default)]
pub struct SelectorEngine {
    config: SelectorConfig,
    cache: FxHashMap<String, Arc<CompiledSelector>>,
    diagnostics: Diagnostics,
}

impl SelectorEngine {
    #[must_use]
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            config,
            cache: FxHashMap::default(),
            diagnostics: Diagnostics::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Every card matching `text` from `perspective`'s point of view, in
    /// universe order.
    pub fn evaluate(&mut self, board: &Board, perspective: PlayerId, text: &str) -> Result<ResultSet> {
        if self.config.collect_diagnostics {
            self.diagnostics.calls += 1;
        }
        let perspective = check_inputs(board, perspective, text)?;

        if let Some(predicate) = fast_path::lookup(text) {
            trace!(selector = text, "fast path");
            if self.config.collect_diagnostics {
                self.diagnostics.record_fast_path();
            }
            return collect(board, |card| Ok(predicate(card, &perspective)));
        }

        if self.config.collect_diagnostics {
            self.diagnostics.record_slow_path(text);
        }
        let compiled = self.prepare(text)?;
        collect(board, |card| compiled.matches(card, &perspective))
    }

    /// Compile `text`, reusing an earlier compilation when caching is on.
    pub fn prepare(&mut self, text: &str) -> Result<Arc<CompiledSelector>> {
        if !self.config.cache_compiled {
            return compile(text, &self.config).map(Arc::new);
        }
        if let Some(compiled) = self.cache.get(text) {
            debug!(selector = text, "compiled selector cache hit");
            if self.config.collect_diagnostics {
                self.diagnostics.cache_hits += 1;
            }
            return Ok(Arc::clone(compiled));
        }
        let compiled = Arc::new(compile(text, &self.config)?);
        self.cache.insert(text.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn reset_diagnostics(&mut self) {
        self.diagnostics.reset();
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of cached compilations.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

/// Evaluate once with the default configuration, without caching or counters.
pub fn select(board: &Board, perspective: PlayerId, text: &str) -> Result<ResultSet> {
    SelectorEngine::new(SelectorConfig::default().without_cache().without_diagnostics())
        .evaluate(board, perspective, text)
}

fn check_inputs(board: &Board, perspective: PlayerId, text: &str) -> Result<Perspective> {
    if text.trim().is_empty() {
        return Err(SelectorError::input(text, "selector text must not be empty"));
    }
    if !board.is_known_player(perspective) {
        return Err(SelectorError::input(
            perspective.to_string(),
            format!("perspective for selector {text:?} is not a seated player"),
        ));
    }
    Ok(Perspective::of(perspective))
}

fn collect(board: &Board, mut keep: impl FnMut(&CardInstance) -> Result<bool>) -> Result<ResultSet> {
    let mut matched = ResultSet::new();
    for card in board.universe() {
        if keep(card)? {
            matched.push(card.entity_id);
        }
    }
    Ok(matched)
}
