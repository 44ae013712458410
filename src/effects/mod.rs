//! Results of a selector and what can be done with them.
//!
//! - `ResultSet`: ordered list of matched entity ids
//! - `BulkAction`: uniform action applied to every member via `ResultSet::apply`

mod action;
mod result;

pub use action::{spell_damage_bonus, BulkAction};
pub use result::ResultSet;
