//! Compiled clause filters.
//!
//! One filter per selector axis. Owner, type and zone are single filters
//! (a type or zone clause is a union of its tokens); tags and properties
//! produce one filter per token and are intersected.

use regex::Regex;

use crate::cards::{CardInstance, CardType, PropertyKey, PropertyRef, Tag};
use crate::core::{PlayerId, Result, SelectorError};
use crate::zones::Zone;

use super::token::Operator;

/// Who "own" and "enemy" refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Perspective {
    pub own: PlayerId,
    pub enemy: PlayerId,
}

impl Perspective {
    /// Perspective of `player` against the other seated player.
    #[must_use]
    pub const fn of(player: PlayerId) -> Self {
        Self {
            own: player,
            enemy: player.opponent(),
        }
    }
}

/// Owner restriction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OwnerFilter {
    #[default]
    Any,
    Own,
    Enemy,
}

impl OwnerFilter {
    #[must_use]
    pub fn matches(self, card: &CardInstance, perspective: &Perspective) -> bool {
        match self {
            OwnerFilter::Any => true,
            OwnerFilter::Own => card.owner == perspective.own,
            OwnerFilter::Enemy => card.owner == perspective.enemy,
        }
    }
}

/// Type restriction: any type, or a union of types as a bit set.
///
/// `Only(0)` is the empty union and matches nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeFilter {
    Any,
    Only(u8),
}

impl TypeFilter {
    /// Minion or hero.
    pub const CHARACTER: TypeFilter = TypeFilter::Only(CardType::Minion.bit() | CardType::Hero.bit());

    #[must_use]
    pub fn matches(self, card: &CardInstance) -> bool {
        match self {
            TypeFilter::Any => true,
            TypeFilter::Only(mask) => mask & card.card_type.bit() != 0,
        }
    }
}

/// Union of zones as a bit set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneFilter(pub u8);

impl ZoneFilter {
    /// Zone set used when a selector names no zone.
    pub const DEFAULT: ZoneFilter = ZoneFilter(Zone::Play.bit());

    #[must_use]
    pub fn matches(self, card: &CardInstance) -> bool {
        self.0 & card.zone.bit() != 0
    }
}

/// One `#name` clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagFilter {
    Battlecry,
    Deathrattle,
    Aura,
    Trigger,
    Overload,
    Has(Tag),
    /// Name not in the tag table; matches nothing.
    Unknown(String),
}

impl TagFilter {
    /// Resolve a tag name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "battlecry" => TagFilter::Battlecry,
            "deathrattle" => TagFilter::Deathrattle,
            "aura" => TagFilter::Aura,
            "trigger" => TagFilter::Trigger,
            "overload" => TagFilter::Overload,
            other => Tag::from_name(other).map_or_else(|| TagFilter::Unknown(other.to_string()), TagFilter::Has),
        }
    }

    #[must_use]
    pub fn matches(&self, card: &CardInstance) -> bool {
        match self {
            TagFilter::Battlecry => card.has_battlecry(),
            TagFilter::Deathrattle => card.has_deathrattle(),
            TagFilter::Aura => card.has_aura(),
            TagFilter::Trigger => card.has_trigger(),
            TagFilter::Overload => card.has_overload(),
            TagFilter::Has(tag) => card.has_tag(*tag),
            TagFilter::Unknown(_) => false,
        }
    }
}

/// Test applied to a property value.
#[derive(Clone, Debug)]
pub enum PropertyTest {
    /// `.name`
    Truthy,
    /// `.name=value`: exact equality, or a case-insensitive full match of
    /// the value's string form against `value` read as a pattern.
    Equals { raw: String, pattern: Regex },
    /// `.name!=value`
    NotEquals { raw: String },
    /// `.name<value` and friends.
    Order { op: Operator, value: i64 },
}

/// One `.name[op value]` clause.
#[derive(Clone, Debug)]
pub struct PropertyFilter {
    pub key: PropertyKey,
    pub test: PropertyTest,
}

impl PropertyFilter {
    /// Test a card. Fails only for an ordering test against a non-numeric value.
    pub fn matches(&self, card: &CardInstance, selector: &str) -> Result<bool> {
        let value = card.property(&self.key);
        let matched = match &self.test {
            PropertyTest::Truthy => value.is_some_and(PropertyRef::is_truthy),
            PropertyTest::Equals { raw, pattern } => value.is_some_and(|v| {
                loosely_equal(v, raw) || pattern.is_match(&v.render())
            }),
            PropertyTest::NotEquals { raw } => !value.is_some_and(|v| loosely_equal(v, raw)),
            PropertyTest::Order { op, value: rhs } => match value {
                None => false,
                Some(PropertyRef::Int(lhs)) => op.compare(lhs, *rhs),
                Some(other) => {
                    return Err(SelectorError::semantic(
                        selector,
                        format!(
                            "`{}` needs a numeric property, {} of {} is {:?}",
                            op.symbol(),
                            self.key,
                            card.entity_id,
                            other
                        ),
                    ))
                }
            },
        };
        Ok(matched)
    }
}

/// Equality between a property and a selector literal, without regard to
/// how the literal was written (`3` equals `Int(3)`, `true` equals `Bool(true)`).
fn loosely_equal(value: PropertyRef<'_>, raw: &str) -> bool {
    match value {
        PropertyRef::Int(n) => raw.parse::<i64>().is_ok_and(|r| r == n),
        PropertyRef::Bool(b) => raw.parse::<bool>().is_ok_and(|r| r == b),
        PropertyRef::Text(s) => s == raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Enchantment};
    use crate::core::EntityId;
    use regex::RegexBuilder;

    fn minion(owner: PlayerId, zone: Zone) -> CardInstance {
        CardInstance::new(EntityId(1), CardId::new(1), CardType::Minion, owner, zone)
    }

    fn equals(raw: &str) -> PropertyTest {
        PropertyTest::Equals {
            raw: raw.to_string(),
            pattern: RegexBuilder::new(&format!("^(?:{raw})$"))
                .case_insensitive(true)
                .build()
                .unwrap(),
        }
    }

    #[test]
    fn test_owner_filter() {
        let perspective = Perspective::of(PlayerId::FIRST);
        let mine = minion(PlayerId::FIRST, Zone::Play);
        let theirs = minion(PlayerId::SECOND, Zone::Play);

        assert!(OwnerFilter::Any.matches(&mine, &perspective));
        assert!(OwnerFilter::Own.matches(&mine, &perspective));
        assert!(!OwnerFilter::Own.matches(&theirs, &perspective));
        assert!(OwnerFilter::Enemy.matches(&theirs, &perspective));
    }

    #[test]
    fn test_type_filter() {
        let card = minion(PlayerId::FIRST, Zone::Play);
        assert!(TypeFilter::Any.matches(&card));
        assert!(TypeFilter::CHARACTER.matches(&card));
        assert!(!TypeFilter::Only(CardType::Spell.bit()).matches(&card));
        assert!(!TypeFilter::Only(0).matches(&card));
    }

    #[test]
    fn test_zone_filter() {
        assert!(ZoneFilter::DEFAULT.matches(&minion(PlayerId::FIRST, Zone::Play)));
        assert!(!ZoneFilter::DEFAULT.matches(&minion(PlayerId::FIRST, Zone::Hand)));
        let hand_or_deck = ZoneFilter(Zone::Hand.bit() | Zone::Deck.bit());
        assert!(hand_or_deck.matches(&minion(PlayerId::FIRST, Zone::Deck)));
    }

    #[test]
    fn test_tag_filter_resolution() {
        assert_eq!(TagFilter::from_name("battlecry"), TagFilter::Battlecry);
        assert_eq!(TagFilter::from_name("taunt"), TagFilter::Has(Tag::Taunt));
        assert_eq!(TagFilter::from_name("deathratle"), TagFilter::Unknown("deathratle".to_string()));
    }

    #[test]
    fn test_tag_filter_matching() {
        let card = minion(PlayerId::FIRST, Zone::Play)
            .with_tag(Tag::Taunt)
            .with_enchantment(Enchantment::deathrattle("Reincarnate"));

        assert!(TagFilter::Has(Tag::Taunt).matches(&card));
        assert!(!TagFilter::Has(Tag::Charge).matches(&card));
        assert!(TagFilter::Deathrattle.matches(&card));
        assert!(!TagFilter::Battlecry.matches(&card));
        assert!(!TagFilter::Overload.matches(&card));
        assert!(!TagFilter::Unknown("taunt".to_string()).matches(&card));
    }

    #[test]
    fn test_capability_tag_filters() {
        let plain = minion(PlayerId::FIRST, Zone::Play);
        let mut totem = minion(PlayerId::FIRST, Zone::Play);
        totem.capabilities.aura = true;
        totem.capabilities.trigger = true;
        totem.capabilities.deathrattle = true;

        for filter in [TagFilter::Aura, TagFilter::Trigger, TagFilter::Deathrattle] {
            assert!(filter.matches(&totem), "{filter:?}");
            assert!(!filter.matches(&plain), "{filter:?}");
        }
        assert_eq!(TagFilter::from_name("aura"), TagFilter::Aura);
        assert_eq!(TagFilter::from_name("trigger"), TagFilter::Trigger);
    }

    #[test]
    fn test_property_truthy() {
        let ready = minion(PlayerId::FIRST, Zone::Play).with_property("isReady", true);
        let filter = PropertyFilter { key: PropertyKey::parse("isReady"), test: PropertyTest::Truthy };

        assert!(filter.matches(&ready, ".isReady").unwrap());
        assert!(!filter.matches(&minion(PlayerId::FIRST, Zone::Play), ".isReady").unwrap());
    }

    #[test]
    fn test_property_equals_case_insensitive() {
        let murloc = minion(PlayerId::FIRST, Zone::Play).with_property("race", "Murloc");
        let filter = PropertyFilter { key: PropertyKey::Race, test: equals("murloc") };

        assert!(filter.matches(&murloc, ".race=murloc").unwrap());
        assert!(!filter.matches(&minion(PlayerId::FIRST, Zone::Play), ".race=murloc").unwrap());
    }

    #[test]
    fn test_property_equals_is_full_match() {
        let card = minion(PlayerId::FIRST, Zone::Play).with_property("race", "murlocs");
        let filter = PropertyFilter { key: PropertyKey::Race, test: equals("murloc") };
        assert!(!filter.matches(&card, ".race=murloc").unwrap());
    }

    #[test]
    fn test_property_not_equals() {
        let filter = PropertyFilter {
            key: PropertyKey::Race,
            test: PropertyTest::NotEquals { raw: "murloc".to_string() },
        };
        let murloc = minion(PlayerId::FIRST, Zone::Play).with_property("race", "murloc");
        let beast = minion(PlayerId::FIRST, Zone::Play).with_property("race", "beast");
        let no_race = minion(PlayerId::FIRST, Zone::Play);

        assert!(!filter.matches(&murloc, "").unwrap());
        assert!(filter.matches(&beast, "").unwrap());
        assert!(filter.matches(&no_race, "").unwrap());
    }

    #[test]
    fn test_property_order() {
        let card = minion(PlayerId::FIRST, Zone::Play).with_property("attack", 2i64);
        let filter = PropertyFilter {
            key: PropertyKey::Attack,
            test: PropertyTest::Order { op: Operator::Lt, value: 3 },
        };
        assert!(filter.matches(&card, ".attack<3").unwrap());
    }

    #[test]
    fn test_property_order_rejects_text_value() {
        let card = minion(PlayerId::FIRST, Zone::Play).with_property("mood", "grumpy");
        let filter = PropertyFilter {
            key: PropertyKey::parse("mood"),
            test: PropertyTest::Order { op: Operator::Gt, value: 1 },
        };
        assert!(filter.matches(&card, ".mood>1").unwrap_err().is_semantic());
    }

    #[test]
    fn test_loosely_equal() {
        assert!(loosely_equal(PropertyRef::Int(3), "3"));
        assert!(!loosely_equal(PropertyRef::Int(3), "three"));
        assert!(loosely_equal(PropertyRef::Bool(true), "true"));
        assert!(loosely_equal(PropertyRef::Text("beast"), "beast"));
        assert!(!loosely_equal(PropertyRef::Text("Beast"), "beast"));
    }
}
