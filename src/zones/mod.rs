//! Zone system for card locations.
//!
//! The zone set is fixed by the game: deck, hand, play, graveyard, aside and
//! secret. A card's zone is a plain field on `CardInstance`; the board keeps
//! no per-zone index because selectors scan the whole universe anyway.

pub mod zone;

pub use zone::Zone;
