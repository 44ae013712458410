//! # ccg-select
//!
//! Entity selector engine for a two-player collectible card game.
//!
//! Card text refers to its targets with short selector strings such as
//! `"enemy minion"` or `"own character #taunt .health<3"`. This crate
//! compiles those strings, evaluates them against a board snapshot and
//! returns the matching entities as a `ResultSet` that bulk actions
//! (damage, healing, buffs, zone moves) can be applied to.
//!
//! ## Design Principles
//!
//! 1. **Pure evaluation**: a selector's result depends only on the board,
//!    the perspective player and the text. Caching and counters never change it.
//!
//! 2. **Whole universe**: both players' pools in every zone are scanned, so
//!    stolen cards and cards outside play are reachable.
//!
//! 3. **Authoring errors are loud**: malformed selectors fail with a typed
//!    `SelectorError`; unknown tags and zones degrade to matching nothing.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, board, RNG, configuration, errors
//! - `zones`: The six card zones
//! - `cards`: Card definitions, instances, tags and properties
//! - `selector`: Tokenizer, compiler, fast path and evaluation engine
//! - `effects`: Result container and bulk actions

pub mod core;
pub mod zones;
pub mod cards;
pub mod selector;
pub mod effects;

// Re-export commonly used types
pub use crate::core::{
    Board, EmptyTypeClause, EntityId, GameRng, PlayerId, PlayerMap, Result,
    SelectorConfig, SelectorError,
};

pub use crate::zones::Zone;

pub use crate::cards::{
    Capabilities, CardDefinition, CardId, CardInstance, CardRegistry, CardType, Enchantment,
    Properties, PropertyKey, PropertyValue, Tag, TagSet,
};

pub use crate::selector::{compile, select, CompiledSelector, Diagnostics, Perspective, SelectorEngine};

pub use crate::effects::{BulkAction, ResultSet};
