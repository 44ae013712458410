//! Core types: entity ids, players, the board, RNG, configuration, errors.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use entity::EntityId;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{EmptyTypeClause, SelectorConfig};
pub use error::{Result, SelectorError};
pub use state::Board;
