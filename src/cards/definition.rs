//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a catalog card: its
//! type, base stats, keyword tags and which behaviours it carries. For
//! example "Abomination" is a 4/4 minion with taunt and a deathrattle.
//!
//! Instance-specific data (damage taken, buffs, zone, owner) lives in
//! `CardInstance`.

use serde::{Deserialize, Serialize};

use super::attributes::{Properties, PropertyKey, PropertyValue};
use super::tags::{Tag, TagSet};

/// Unique identifier for a card definition.
///
/// This identifies the catalog card (e.g., "Fireball"), not a specific
/// instance in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card type. Heroes and minions together are "characters".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Minion,
    Hero,
    Weapon,
    Spell,
    /// Hero power.
    Power,
}

impl CardType {
    /// Every type, in bit order.
    pub const ALL: [CardType; 5] = [
        CardType::Minion,
        CardType::Hero,
        CardType::Weapon,
        CardType::Spell,
        CardType::Power,
    ];

    /// Bit used in type sets.
    #[must_use]
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Minion or hero.
    #[must_use]
    pub const fn is_character(self) -> bool {
        matches!(self, CardType::Minion | CardType::Hero)
    }
}

/// Behaviours a card exposes, fixed when its definition is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    /// Has a play-time behaviour.
    pub battlecry: bool,
    /// Has a death-time behaviour.
    pub deathrattle: bool,
    /// Has an aura descriptor.
    pub aura: bool,
    /// Has a triggered behaviour.
    pub trigger: bool,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use ccg_select::cards::{CardDefinition, CardId, CardType, Tag};
///
/// let abomination = CardDefinition::new(CardId::new(1), "Abomination", CardType::Minion)
///     .with_cost(5)
///     .with_stats(4, 4)
///     .with_tag(Tag::Taunt)
///     .with_deathrattle();
///
/// assert!(abomination.capabilities.deathrattle);
/// assert_eq!(abomination.properties.health, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card type.
    pub card_type: CardType,

    /// Base properties; `properties.name` is the card name.
    pub properties: Properties,

    /// Printed keyword tags.
    pub tags: TagSet,

    /// Behaviours the card carries.
    pub capabilities: Capabilities,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id,
            card_type,
            properties: Properties {
                name: name.into(),
                ..Properties::default()
            },
            tags: TagSet::new(),
            capabilities: Capabilities::default(),
        }
    }

    /// Card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.properties.name
    }

    /// Set mana cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.properties.cost = cost;
        self
    }

    /// Set attack and health; health also becomes the heal cap.
    #[must_use]
    pub fn with_stats(mut self, attack: i64, health: i64) -> Self {
        self.properties.attack = attack;
        self.properties.health = health;
        self.properties.max_health = Some(health);
        self
    }

    /// Set the minion race.
    #[must_use]
    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.properties.race = Some(race.into());
        self
    }

    /// Set overload.
    #[must_use]
    pub fn with_overload(mut self, overload: i64) -> Self {
        self.properties.overload = overload;
        self
    }

    /// Set any property.
    ///
    /// # Panics
    ///
    /// Panics if `value` has the wrong type for a known key.
    #[must_use]
    pub fn with_property(mut self, key: &str, value: impl Into<PropertyValue>) -> Self {
        if let Err(err) = self.properties.set(PropertyKey::parse(key), value) {
            panic!("card {} ({}): {err}", self.id, self.name());
        }
        self
    }

    /// Add a keyword tag.
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    #[must_use]
    pub fn with_battlecry(mut self) -> Self {
        self.capabilities.battlecry = true;
        self
    }

    #[must_use]
    pub fn with_deathrattle(mut self) -> Self {
        self.capabilities.deathrattle = true;
        self
    }

    #[must_use]
    pub fn with_aura(mut self) -> Self {
        self.capabilities.aura = true;
        self
    }

    #[must_use]
    pub fn with_trigger(mut self) -> Self {
        self.capabilities.trigger = true;
        self
    }
}
