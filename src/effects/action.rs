//! Aggregate actions over a result set.
//!
//! A `ResultSet` is materialized before any action runs, so actions that move
//! or steal cards never disturb the iteration. Members no longer on the board
//! are skipped.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{CardInstance, Tag};
use crate::core::{Board, PlayerId};
use crate::zones::Zone;

use super::result::ResultSet;

/// A uniform action applied to every member of a result set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulkAction {
    /// Subtract from health.
    DealDamage(i64),

    /// Damage from a spell: `amount` plus the total `spellDamage` of the
    /// caster's cards in play.
    DealSpellDamage { amount: i64, caster: PlayerId },

    /// Add health, capped at `maxHealth` when the card has one.
    RestoreHealth(i64),

    /// Add to attack and health (and `maxHealth`).
    Buff { attack: i64, health: i64 },

    AddTag(Tag),
    RemoveTag(Tag),

    MoveTo(Zone),

    /// Move to the graveyard.
    Destroy,

    /// Change controller. The card stays in its original pool.
    SetOwner(PlayerId),
}

impl BulkAction {
    /// Apply to one card.
    pub fn apply_to(&self, card: &mut CardInstance) {
        match self {
            BulkAction::DealDamage(amount) => card.properties.health -= amount,
            // Resolved to `DealDamage` by `ResultSet::apply`.
            BulkAction::DealSpellDamage { amount, .. } => card.properties.health -= amount,
            BulkAction::RestoreHealth(amount) => {
                let props = &mut card.properties;
                let healed = props.health + amount;
                props.health = match props.max_health {
                    Some(cap) => healed.min(cap).max(props.health),
                    None => healed,
                };
            }
            BulkAction::Buff { attack, health } => {
                let props = &mut card.properties;
                props.attack += attack;
                props.health += health;
                if let Some(max) = props.max_health.as_mut() {
                    *max += health;
                }
            }
            BulkAction::AddTag(tag) => {
                card.tags.insert(*tag);
            }
            BulkAction::RemoveTag(tag) => {
                card.tags.remove(*tag);
            }
            BulkAction::MoveTo(zone) => card.zone = *zone,
            BulkAction::Destroy => card.zone = Zone::Graveyard,
            BulkAction::SetOwner(owner) => card.owner = *owner,
        }
    }
}

/// Total spell damage bonus `player` has in play.
#[must_use]
pub fn spell_damage_bonus(board: &Board, player: PlayerId) -> i64 {
    board
        .universe()
        .filter(|card| card.owner == player && card.zone == Zone::Play)
        .map(|card| card.properties.spell_damage)
        .sum()
}

impl ResultSet {
    /// Apply `action` to every member still on the board. Returns how many
    /// cards were affected; an empty set does nothing.
    ///
    /// ```
    /// use ccg_select::cards::{CardDefinition, CardId, CardType};
    /// use ccg_select::core::{Board, PlayerId};
    /// use ccg_select::effects::BulkAction;
    /// use ccg_select::selector::select;
    /// use ccg_select::zones::Zone;
    ///
    /// let yeti = CardDefinition::new(CardId::new(1), "Chillwind Yeti", CardType::Minion).with_stats(4, 5);
    /// let mut board = Board::new();
    /// let theirs = board.spawn(PlayerId::SECOND, &yeti, PlayerId::SECOND, Zone::Play);
    ///
    /// let targets = select(&board, PlayerId::FIRST, "enemy minion").unwrap();
    /// assert_eq!(targets.apply(&mut board, &BulkAction::DealDamage(2)), 1);
    /// assert_eq!(board.get_card(theirs).unwrap().properties.health, 3);
    /// ```
    pub fn apply(&self, board: &mut Board, action: &BulkAction) -> usize {
        if self.is_empty() {
            return 0;
        }
        let resolved = match action {
            BulkAction::DealSpellDamage { amount, caster } => {
                BulkAction::DealDamage(amount + spell_damage_bonus(board, *caster))
            }
            other => other.clone(),
        };
        let affected = self.for_each_mut(board, |card| resolved.apply_to(card));
        debug!(action = ?resolved, targets = self.len(), affected, "applied bulk action");
        affected
    }

    /// Run `f` on every member still on the board. Returns how many ran.
    pub fn for_each_mut(&self, board: &mut Board, mut f: impl FnMut(&mut CardInstance)) -> usize {
        let mut affected = 0;
        for id in self.iter() {
            if let Some(card) = board.get_card_mut(id) {
                f(card);
                affected += 1;
            }
        }
        affected
    }
}
