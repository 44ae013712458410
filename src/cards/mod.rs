//! Card system: definitions, instances, tags, properties and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardType`: minion, hero, weapon, spell or hero power
//! - `CardDefinition`: Static card data with capabilities fixed at load time
//! - `CardInstance`: Runtime card state (zone, owner, stats, tags)
//! - `Properties`: Typed property bag read by `.name` selector clauses
//! - `Tag`/`TagSet`: Keyword markers read by `#name` selector clauses
//! - `CardRegistry`: Card definition lookup

pub mod attributes;
pub mod definition;
pub mod instance;
pub mod registry;
pub mod tags;

pub use attributes::{Properties, PropertyKey, PropertyKind, PropertyRef, PropertyValue};
pub use definition::{Capabilities, CardDefinition, CardId, CardType};
pub use instance::{CardInstance, Enchantment};
pub use registry::CardRegistry;
pub use tags::{Tag, TagSet};
