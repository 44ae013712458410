//! Card instances - runtime card state.
//!
//! `CardInstance` is a specific card in a match at a specific moment: who
//! owns it, which zone it is in, its current stats and tags. The selector
//! engine only reads instances; game rules mutate them through `Board`.
//!
//! Owner and zone are always singular. Mind control changes `owner`, death
//! changes `zone`, but a card is never in two places or owned by two players.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::{Properties, PropertyKey, PropertyRef, PropertyValue};
use super::definition::{Capabilities, CardDefinition, CardId, CardType};
use super::tags::{Tag, TagSet};
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;
use crate::core::Result;
use crate::zones::Zone;

/// An attached tag entry (enchantment, buff) that may grant behaviour.
///
/// "Give a minion: Deathrattle: summon a 2/2" attaches one of these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enchantment {
    pub name: String,
    pub grants_deathrattle: bool,
}

impl Enchantment {
    /// An enchantment with no granted behaviour.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grants_deathrattle: false,
        }
    }

    /// An enchantment granting a deathrattle.
    #[must_use]
    pub fn deathrattle(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grants_deathrattle: true,
        }
    }
}

/// A card instance in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    /// Reference to the card definition.
    pub card_id: CardId,

    /// Current owner.
    pub owner: PlayerId,

    /// Current zone.
    pub zone: Zone,

    /// Card type.
    pub card_type: CardType,

    /// Current keyword tags.
    pub tags: TagSet,

    /// Attached tag entries.
    #[serde(default)]
    pub enchantments: SmallVec<[Enchantment; 2]>,

    /// Behaviours copied from the definition.
    pub capabilities: Capabilities,

    /// Current properties.
    pub properties: Properties,
}

impl CardInstance {
    /// Create a bare instance with default properties.
    #[must_use]
    pub fn new(
        entity_id: EntityId,
        card_id: CardId,
        card_type: CardType,
        owner: PlayerId,
        zone: Zone,
    ) -> Self {
        Self {
            entity_id,
            card_id,
            owner,
            zone,
            card_type,
            tags: TagSet::new(),
            enchantments: SmallVec::new(),
            capabilities: Capabilities::default(),
            properties: Properties::default(),
        }
    }

    /// Create an instance from a catalog definition.
    #[must_use]
    pub fn from_definition(
        entity_id: EntityId,
        definition: &CardDefinition,
        owner: PlayerId,
        zone: Zone,
    ) -> Self {
        Self {
            entity_id,
            card_id: definition.id,
            owner,
            zone,
            card_type: definition.card_type,
            tags: definition.tags.clone(),
            enchantments: SmallVec::new(),
            capabilities: definition.capabilities,
            properties: definition.properties.clone(),
        }
    }

    /// Set a property (builder pattern).
    ///
    /// # Panics
    ///
    /// Panics if `value` has the wrong type for a known key.
    #[must_use]
    pub fn with_property(mut self, key: &str, value: impl Into<PropertyValue>) -> Self {
        if let Err(err) = self.set_property(PropertyKey::parse(key), value) {
            panic!("{err}");
        }
        self
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Attach an enchantment (builder pattern).
    #[must_use]
    pub fn with_enchantment(mut self, enchantment: Enchantment) -> Self {
        self.enchantments.push(enchantment);
        self
    }

    /// Read a property.
    #[must_use]
    pub fn property(&self, key: &PropertyKey) -> Option<PropertyRef<'_>> {
        self.properties.get(key)
    }

    /// Write a property. Fails if `value` has the wrong type for a known key.
    pub fn set_property(&mut self, key: PropertyKey, value: impl Into<PropertyValue>) -> Result<()> {
        self.properties.set(key, value)
    }

    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub fn has_battlecry(&self) -> bool {
        self.capabilities.battlecry
    }

    /// Own deathrattle or one granted by an enchantment.
    #[must_use]
    pub fn has_deathrattle(&self) -> bool {
        self.capabilities.deathrattle || self.enchantments.iter().any(|e| e.grants_deathrattle)
    }

    #[must_use]
    pub fn has_aura(&self) -> bool {
        self.capabilities.aura
    }

    #[must_use]
    pub fn has_trigger(&self) -> bool {
        self.capabilities.trigger
    }

    #[must_use]
    pub fn has_overload(&self) -> bool {
        self.properties.overload != 0
    }

    /// Minion or hero.
    #[must_use]
    pub fn is_character(&self) -> bool {
        self.card_type.is_character()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raptor() -> CardDefinition {
        CardDefinition::new(CardId::new(3), "Bloodfen Raptor", CardType::Minion)
            .with_cost(2)
            .with_stats(3, 2)
            .with_race("beast")
    }

    #[test]
    fn test_from_definition() {
        let instance = CardInstance::from_definition(EntityId(10), &raptor(), PlayerId::FIRST, Zone::Hand);

        assert_eq!(instance.entity_id, EntityId(10));
        assert_eq!(instance.card_id, CardId::new(3));
        assert_eq!(instance.owner, PlayerId::FIRST);
        assert_eq!(instance.zone, Zone::Hand);
        assert_eq!(instance.card_type, CardType::Minion);
        assert_eq!(instance.property(&PropertyKey::Attack), Some(PropertyRef::Int(3)));
        assert!(instance.is_character());
    }

    #[test]
    fn test_deathrattle_from_enchantment() {
        let mut instance = CardInstance::from_definition(EntityId(1), &raptor(), PlayerId::FIRST, Zone::Play);
        assert!(!instance.has_deathrattle());

        instance.enchantments.push(Enchantment::new("Blessing of Might"));
        assert!(!instance.has_deathrattle());

        instance.enchantments.push(Enchantment::deathrattle("Ancestral Spirit"));
        assert!(instance.has_deathrattle());
    }

    #[test]
    fn test_capabilities_copied() {
        let definition = raptor().with_battlecry();
        let instance = CardInstance::from_definition(EntityId(1), &definition, PlayerId::SECOND, Zone::Play);

        assert!(instance.has_battlecry());
        assert!(!instance.has_aura());
        assert!(!instance.has_trigger());
    }

    #[test]
    fn test_overload() {
        let bolt = CardInstance::new(EntityId(2), CardId::new(9), CardType::Spell, PlayerId::FIRST, Zone::Hand)
            .with_property("overload", 1i64);
        assert!(bolt.has_overload());
    }

    #[test]
    fn test_builder_tags_and_extra() {
        let instance = CardInstance::new(EntityId(4), CardId::new(1), CardType::Minion, PlayerId::FIRST, Zone::Play)
            .with_tag(Tag::Taunt)
            .with_property("isReady", true);

        assert!(instance.has_tag(Tag::Taunt));
        assert_eq!(instance.property(&PropertyKey::parse("isReady")), Some(PropertyRef::Bool(true)));
    }

    #[test]
    fn test_set_property_type_checked() {
        let mut instance = CardInstance::new(EntityId(5), CardId::new(1), CardType::Minion, PlayerId::FIRST, Zone::Play);

        assert!(instance.set_property(PropertyKey::Attack, "lots").unwrap_err().is_input());
        assert_eq!(instance.property(&PropertyKey::Attack), Some(PropertyRef::Int(0)));

        instance.set_property(PropertyKey::Attack, 3i64).unwrap();
        assert_eq!(instance.property(&PropertyKey::Attack), Some(PropertyRef::Int(3)));
    }

    #[test]
    #[should_panic(expected = "property attack expects an integer")]
    fn test_with_property_wrong_type() {
        let _ = CardInstance::new(EntityId(6), CardId::new(1), CardType::Minion, PlayerId::FIRST, Zone::Play)
            .with_property("attack", "lots");
    }

    #[test]
    fn test_card_instance_serialization() {
        let instance = CardInstance::from_definition(EntityId(10), &raptor(), PlayerId::FIRST, Zone::Play)
            .with_enchantment(Enchantment::deathrattle("Soul of the Forest"));

        let json = serde_json::to_string(&instance).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(instance, deserialized);
    }
}
