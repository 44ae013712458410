//! Precompiled predicates for the most common selector literals.
//!
//! Only exact text matches hit this table. Each predicate must agree with
//! what `compile` produces for the same text under every empty-type policy,
//! which holds because every literal here names a type.

use crate::cards::{CardInstance, CardType};
use crate::zones::Zone;

use super::clause::Perspective;

/// Predicate for a fast-path literal.
pub type FastPredicate = fn(&CardInstance, &Perspective) -> bool;

const TABLE: [(&str, FastPredicate); 7] = [
    ("minion", minion),
    ("character", character),
    ("own minion", own_minion),
    ("enemy minion", enemy_minion),
    ("own character", own_character),
    ("enemy character", enemy_character),
    ("enemy character .health>0", living_enemy_character),
];

/// Predicate for `text`, if it is one of the literals.
#[must_use]
pub fn lookup(text: &str) -> Option<FastPredicate> {
    TABLE
        .iter()
        .find(|(literal, _)| *literal == text)
        .map(|(_, predicate)| *predicate)
}

/// Every literal in the table.
pub fn literals() -> impl Iterator<Item = &'static str> {
    TABLE.iter().map(|(literal, _)| *literal)
}

fn in_play(card: &CardInstance) -> bool {
    card.zone == Zone::Play
}

fn minion(card: &CardInstance, _: &Perspective) -> bool {
    in_play(card) && card.card_type == CardType::Minion
}

fn character(card: &CardInstance, _: &Perspective) -> bool {
    in_play(card) && card.is_character()
}

fn own_minion(card: &CardInstance, perspective: &Perspective) -> bool {
    card.owner == perspective.own && minion(card, perspective)
}

fn enemy_minion(card: &CardInstance, perspective: &Perspective) -> bool {
    card.owner == perspective.enemy && minion(card, perspective)
}

fn own_character(card: &CardInstance, perspective: &Perspective) -> bool {
    card.owner == perspective.own && character(card, perspective)
}

fn enemy_character(card: &CardInstance, perspective: &Perspective) -> bool {
    card.owner == perspective.enemy && character(card, perspective)
}

fn living_enemy_character(card: &CardInstance, perspective: &Perspective) -> bool {
    enemy_character(card, perspective) && card.properties.health > 0
}
