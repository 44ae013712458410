//! Selector language: a compact query syntax for picking cards off the board.
//!
//! ```text
//! enemy minion #taunt          enemy taunt minions in play
//! own card @hand .cost<=2      cheap cards in own hand
//! character .race=murloc       every murloc character in play
//! ```
//!
//! ## Pipeline
//!
//! - `token`: whitespace split and lexical classification
//! - `compiler`: tokens to a `CompiledSelector` (one filter per clause)
//! - `fast_path`: hand-written predicates for the commonest literals
//! - `engine`: `SelectorEngine` ties the above together and scans the board
//!
//! Owner, type and zone clauses are each a single filter; type and zone
//! tokens broaden (union) while tag and property tokens narrow (intersection).

pub mod clause;
pub mod compiler;
pub mod diagnostics;
pub mod engine;
pub mod fast_path;
pub mod token;

pub use clause::{OwnerFilter, Perspective, PropertyFilter, PropertyTest, TagFilter, TypeFilter, ZoneFilter};
pub use compiler::{compile, CompiledSelector};
pub use diagnostics::Diagnostics;
pub use engine::{select, SelectorEngine};
pub use fast_path::FastPredicate;
pub use token::{tokenize, Operator, Token};
