//! Clause compiler.
//!
//! Turns a token stream into a `CompiledSelector`: one owner filter, one type
//! filter, one zone filter and any number of tag and property filters. The
//! compiled form is immutable and independent of any board, so the engine can
//! cache it by selector text.

use regex::RegexBuilder;
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::cards::{CardInstance, CardType, PropertyKey, PropertyKind};
use crate::core::{EmptyTypeClause, Result, SelectorConfig, SelectorError};

use super::clause::{
    OwnerFilter, Perspective, PropertyFilter, PropertyTest, TagFilter, TypeFilter, ZoneFilter,
};
use super::token::{tokenize, Operator, OwnerToken, PropertyToken, Token, TypeToken};

/// A selector ready to run against any board.
#[derive(Clone, Debug)]
pub struct CompiledSelector {
    text: String,
    owner: OwnerFilter,
    types: TypeFilter,
    zones: ZoneFilter,
    tags: SmallVec<[TagFilter; 2]>,
    properties: SmallVec<[PropertyFilter; 2]>,
}

impl CompiledSelector {
    /// Selector text this was compiled from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn owner(&self) -> OwnerFilter {
        self.owner
    }

    #[must_use]
    pub fn types(&self) -> TypeFilter {
        self.types
    }

    #[must_use]
    pub fn zones(&self) -> ZoneFilter {
        self.zones
    }

    #[must_use]
    pub fn tags(&self) -> &[TagFilter] {
        &self.tags
    }

    #[must_use]
    pub fn properties(&self) -> &[PropertyFilter] {
        &self.properties
    }

    /// Test one card. Clauses run in order owner, type, zone, tags,
    /// properties and stop at the first that fails, so a property error can
    /// only come from a card that passed every other clause.
    pub fn matches(&self, card: &CardInstance, perspective: &Perspective) -> Result<bool> {
        if !self.owner.matches(card, perspective)
            || !self.types.matches(card)
            || !self.zones.matches(card)
            || !self.tags.iter().all(|tag| tag.matches(card))
        {
            return Ok(false);
        }
        for property in &self.properties {
            if !property.matches(card, &self.text)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Compile a selector.
///
/// ```
/// use ccg_select::core::SelectorConfig;
/// use ccg_select::selector::{compile, OwnerFilter};
///
/// let selector = compile("enemy minion #taunt", &SelectorConfig::default()).unwrap();
/// assert_eq!(selector.owner(), OwnerFilter::Enemy);
/// assert_eq!(selector.tags().len(), 1);
///
/// assert!(compile("own enemy minion", &SelectorConfig::default()).unwrap_err().is_syntax());
/// ```
pub fn compile(text: &str, config: &SelectorConfig) -> Result<CompiledSelector> {
    let tokens = tokenize(text)?;

    let mut owner: Option<OwnerToken> = None;
    let mut any_type = false;
    let mut type_mask = 0u8;
    let mut zone_mask: Option<u8> = None;
    let mut tags = SmallVec::new();
    let mut properties = SmallVec::new();

    for token in tokens {
        match token {
            Token::Owner(found) => match owner {
                Some(previous) if previous != found => {
                    return Err(SelectorError::syntax(
                        text,
                        owner_word(found),
                        format!("conflicts with `{}`", owner_word(previous)),
                    ));
                }
                _ => owner = Some(found),
            },
            Token::Type(TypeToken::Card) => any_type = true,
            Token::Type(found) => type_mask |= type_bits(found),
            Token::Zone(zone, name) => {
                let mask = zone_mask.get_or_insert(0);
                match zone {
                    Some(zone) => *mask |= zone.bit(),
                    None => warn!(selector = text, zone = name, "unknown zone in selector"),
                }
            }
            Token::Tag(name) => {
                let filter = TagFilter::from_name(name);
                if let TagFilter::Unknown(_) = filter {
                    warn!(selector = text, tag = name, "unknown tag in selector, clause matches nothing");
                }
                tags.push(filter);
            }
            Token::Property(property) => properties.push(compile_property(text, property)?),
            Token::Unknown(word) => warn!(selector = text, token = word, "ignoring unknown selector token"),
        }
    }

    let types = if any_type {
        TypeFilter::Any
    } else if type_mask != 0 {
        TypeFilter::Only(type_mask)
    } else {
        match config.empty_type_clause {
            EmptyTypeClause::MatchAny => TypeFilter::Any,
            EmptyTypeClause::MatchNone => TypeFilter::Only(0),
            EmptyTypeClause::Reject => {
                return Err(SelectorError::semantic(text, "selector names no type"));
            }
        }
    };

    let owner = match owner {
        None | Some(OwnerToken::Any) => OwnerFilter::Any,
        Some(OwnerToken::Own) => OwnerFilter::Own,
        Some(OwnerToken::Enemy) => OwnerFilter::Enemy,
    };

    let compiled = CompiledSelector {
        text: text.to_string(),
        owner,
        types,
        zones: zone_mask.map_or(ZoneFilter::DEFAULT, ZoneFilter),
        tags,
        properties,
    };
    debug!(
        selector = text,
        owner = ?compiled.owner,
        types = ?compiled.types,
        zones = compiled.zones.0,
        tags = compiled.tags.len(),
        properties = compiled.properties.len(),
        "compiled selector"
    );
    Ok(compiled)
}

fn compile_property(text: &str, token: PropertyToken<'_>) -> Result<PropertyFilter> {
    let key = PropertyKey::parse(token.name);
    let Some((op, raw)) = token.comparison else {
        return Ok(PropertyFilter { key, test: PropertyTest::Truthy });
    };

    let test = match op {
        Operator::Eq => {
            let pattern = RegexBuilder::new(&format!("^(?:{raw})$"))
                .case_insensitive(true)
                .build()
                .map_err(|err| {
                    SelectorError::syntax(text, raw, format!("invalid match pattern: {err}"))
                })?;
            PropertyTest::Equals { raw: raw.to_string(), pattern }
        }
        Operator::Ne => PropertyTest::NotEquals { raw: raw.to_string() },
        _ => {
            if key.kind() == Some(PropertyKind::Text) {
                return Err(SelectorError::semantic(
                    text,
                    format!("`{}` cannot order text property {key}", op.symbol()),
                ));
            }
            let value = raw.parse::<i64>().map_err(|_| {
                SelectorError::semantic(
                    text,
                    format!("`{}` needs a numeric value, got {raw:?}", op.symbol()),
                )
            })?;
            PropertyTest::Order { op, value }
        }
    };
    Ok(PropertyFilter { key, test })
}

fn type_bits(token: TypeToken) -> u8 {
    match token {
        TypeToken::Card => CardType::ALL.iter().fold(0, |mask, t| mask | t.bit()),
        TypeToken::Minion => CardType::Minion.bit(),
        TypeToken::Hero => CardType::Hero.bit(),
        TypeToken::Character => CardType::Minion.bit() | CardType::Hero.bit(),
        TypeToken::Weapon => CardType::Weapon.bit(),
        TypeToken::Spell => CardType::Spell.bit(),
        TypeToken::Power => CardType::Power.bit(),
    }
}

fn owner_word(token: OwnerToken) -> &'static str {
    match token {
        OwnerToken::Own => "own",
        OwnerToken::Enemy => "enemy",
        OwnerToken::Any => "any",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Tag};
    use crate::core::{EntityId, PlayerId};
    use crate::zones::Zone;

    fn defaults() -> SelectorConfig {
        SelectorConfig::default()
    }

    fn card(card_type: CardType, owner: PlayerId, zone: Zone) -> CardInstance {
        CardInstance::new(EntityId(1), CardId::new(1), card_type, owner, zone)
    }

    #[test]
    fn test_defaults() {
        let selector = compile("minion", &defaults()).unwrap();
        assert_eq!(selector.owner(), OwnerFilter::Any);
        assert_eq!(selector.types(), TypeFilter::Only(CardType::Minion.bit()));
        assert_eq!(selector.zones(), ZoneFilter::DEFAULT);
        assert!(selector.tags().is_empty());
        assert!(selector.properties().is_empty());
    }

    #[test]
    fn test_card_overrides_other_types() {
        let selector = compile("minion card spell", &defaults()).unwrap();
        assert_eq!(selector.types(), TypeFilter::Any);
    }

    #[test]
    fn test_character_is_minion_or_hero() {
        let selector = compile("character", &defaults()).unwrap();
        assert_eq!(selector.types(), TypeFilter::CHARACTER);
        assert_eq!(compile("minion hero", &defaults()).unwrap().types(), TypeFilter::CHARACTER);
    }

    #[test]
    fn test_own_with_enemy_conflicts() {
        for text in ["own enemy minion", "enemy own"] {
            let err = compile(text, &defaults()).unwrap_err();
            assert!(err.is_syntax(), "{text}");
        }
    }

    #[test]
    fn test_any_with_own_or_enemy_is_rejected() {
        // Deliberately strict: `any` does not override `own` or `enemy`. At
        // most one distinct owner word per selector.
        for text in ["own any minion", "any enemy minion", "any own"] {
            let err = compile(text, &defaults()).unwrap_err();
            assert!(err.is_syntax(), "{text}");
        }
    }

    #[test]
    fn test_repeated_owner_is_allowed() {
        let selector = compile("own own minion", &defaults()).unwrap();
        assert_eq!(selector.owner(), OwnerFilter::Own);
        assert_eq!(compile("any minion", &defaults()).unwrap().owner(), OwnerFilter::Any);
    }

    #[test]
    fn test_zone_union() {
        let selector = compile("minion @hand @deck", &defaults()).unwrap();
        assert_eq!(selector.zones(), ZoneFilter(Zone::Hand.bit() | Zone::Deck.bit()));
    }

    #[test]
    fn test_unknown_zone_matches_nothing_alone() {
        let selector = compile("minion @library", &defaults()).unwrap();
        assert_eq!(selector.zones(), ZoneFilter(0));

        let with_known = compile("minion @library @hand", &defaults()).unwrap();
        assert_eq!(with_known.zones(), ZoneFilter(Zone::Hand.bit()));
    }

    #[test]
    fn test_empty_type_clause_policies() {
        let any = compile("own", &defaults()).unwrap();
        assert_eq!(any.types(), TypeFilter::Any);

        let none = compile("own", &SelectorConfig::legacy()).unwrap();
        assert_eq!(none.types(), TypeFilter::Only(0));

        let reject = SelectorConfig::default().with_empty_type_clause(EmptyTypeClause::Reject);
        assert!(compile("own", &reject).unwrap_err().is_semantic());
        assert!(compile("own card", &reject).is_ok());
    }

    #[test]
    fn test_unknown_words_are_ignored() {
        let selector = compile("enemy minoin minion", &defaults()).unwrap();
        assert_eq!(selector.types(), TypeFilter::Only(CardType::Minion.bit()));
    }

    #[test]
    fn test_ordering_validation() {
        assert!(compile("minion .race>3", &defaults()).unwrap_err().is_semantic());
        assert!(compile("minion .name<=a", &defaults()).unwrap_err().is_semantic());
        assert!(compile("minion .attack>big", &defaults()).unwrap_err().is_semantic());
        assert!(compile("minion .attack>=-1", &defaults()).is_ok());
        assert!(compile("minion .custom>1", &defaults()).is_ok());
    }

    #[test]
    fn test_invalid_pattern() {
        let err = compile("minion .race=[murloc", &defaults()).unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn test_matches_conjunction() {
        let selector = compile("own minion #taunt .attack>=2", &defaults()).unwrap();
        let perspective = Perspective::of(PlayerId::FIRST);

        let good = card(CardType::Minion, PlayerId::FIRST, Zone::Play)
            .with_tag(Tag::Taunt)
            .with_property("attack", 2i64);
        assert!(selector.matches(&good, &perspective).unwrap());

        let weak = good.clone().with_property("attack", 1i64);
        assert!(!selector.matches(&weak, &perspective).unwrap());

        let enemy = card(CardType::Minion, PlayerId::SECOND, Zone::Play)
            .with_tag(Tag::Taunt)
            .with_property("attack", 5i64);
        assert!(!selector.matches(&enemy, &perspective).unwrap());

        let in_hand = card(CardType::Minion, PlayerId::FIRST, Zone::Hand)
            .with_tag(Tag::Taunt)
            .with_property("attack", 5i64);
        assert!(!selector.matches(&in_hand, &perspective).unwrap());
    }

    #[test]
    fn test_property_error_only_after_other_clauses() {
        let selector = compile("own minion .mood>1", &defaults()).unwrap();
        let perspective = Perspective::of(PlayerId::FIRST);

        let enemy = card(CardType::Minion, PlayerId::SECOND, Zone::Play).with_property("mood", "grumpy");
        assert!(!selector.matches(&enemy, &perspective).unwrap());

        let mine = card(CardType::Minion, PlayerId::FIRST, Zone::Play).with_property("mood", "grumpy");
        let err = selector.matches(&mine, &perspective).unwrap_err();
        assert!(err.is_semantic());
        assert!(err.to_string().contains("mood"));
    }

    #[test]
    fn test_equals_numeric_and_pattern() {
        let perspective = Perspective::of(PlayerId::FIRST);
        let three = card(CardType::Minion, PlayerId::FIRST, Zone::Play).with_property("cost", 3i64);

        assert!(compile("minion .cost=3", &defaults()).unwrap().matches(&three, &perspective).unwrap());
        assert!(compile("minion .cost=[0-3]", &defaults()).unwrap().matches(&three, &perspective).unwrap());
        assert!(!compile("minion .cost=4", &defaults()).unwrap().matches(&three, &perspective).unwrap());
    }
}
