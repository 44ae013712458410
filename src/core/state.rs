//! Board: the universe of entities selectors run against.
//!
//! Each player has one card pool covering every zone (deck, hand, play,
//! graveyard, aside, secret). A card stays in the pool it was created in even
//! when its owner changes, which is why selectors always scan both pools and
//! test `owner` rather than trusting pool membership.
//!
//! Pools are `im::Vector`s of ids so snapshots clone in O(1); instances live in
//! an `FxHashMap` keyed by id.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::error::{Result, SelectorError};
use super::player::{PlayerId, PlayerMap};
use crate::cards::{CardDefinition, CardInstance, CardRegistry};
use crate::zones::Zone;

/// Both players' card pools.
///
/// ```
/// use ccg_select::cards::{CardDefinition, CardId, CardType};
/// use ccg_select::core::{Board, PlayerId};
/// use ccg_select::zones::Zone;
///
/// let wisp = CardDefinition::new(CardId::new(1), "Wisp", CardType::Minion).with_stats(1, 1);
///
/// let mut board = Board::new();
/// let id = board.spawn(PlayerId::FIRST, &wisp, PlayerId::FIRST, Zone::Play);
///
/// assert_eq!(board.len(), 1);
/// assert_eq!(board.get_card(id).unwrap().zone, Zone::Play);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    /// Slot order of each player's pool.
    pools: PlayerMap<Vector<EntityId>>,

    /// Card instances by entity ID.
    cards: FxHashMap<EntityId, CardInstance>,

    /// Next entity ID to allocate. Wider than `EntityId` so the slot after
    /// `u32::MAX` is representable.
    next_entity_id: u64,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `player` is one of the two seated players.
    #[must_use]
    pub fn is_known_player(&self, player: PlayerId) -> bool {
        player.is_seated()
    }

    // === Entity Management ===

    /// Allocate a new entity ID.
    ///
    /// # Panics
    ///
    /// Panics once every `u32` id has been handed out.
    pub fn alloc_entity(&mut self) -> EntityId {
        let Ok(raw) = u32::try_from(self.next_entity_id) else {
            panic!("entity ids exhausted");
        };
        self.next_entity_id += 1;
        EntityId(raw)
    }

    /// Append a card instance to the end of `pool`.
    ///
    /// Panics if an instance with the same id is already on the board.
    pub fn add_card(&mut self, pool: PlayerId, card: CardInstance) {
        let entity_id = card.entity_id;
        if self.cards.contains_key(&entity_id) {
            panic!("Entity {:?} already on the board", entity_id);
        }
        self.next_entity_id = self.next_entity_id.max(u64::from(entity_id.raw()) + 1);
        self.cards.insert(entity_id, card);
        self.pools[pool].push_back(entity_id);
    }

    /// Create an instance of `definition` at the end of `pool`.
    pub fn spawn(
        &mut self,
        pool: PlayerId,
        definition: &CardDefinition,
        owner: PlayerId,
        zone: Zone,
    ) -> EntityId {
        let id = self.alloc_entity();
        self.add_card(pool, CardInstance::from_definition(id, definition, owner, zone));
        id
    }

    /// Create an instance of the registered card called `name`.
    ///
    /// Fails with `SelectorError::InputType` if `registry` has no such card.
    pub fn spawn_named(
        &mut self,
        registry: &CardRegistry,
        name: &str,
        pool: PlayerId,
        owner: PlayerId,
        zone: Zone,
    ) -> Result<EntityId> {
        let definition = registry
            .find_by_name(name)
            .ok_or_else(|| SelectorError::input(name, "card name not in registry"))?;
        Ok(self.spawn(pool, definition, owner, zone))
    }

    /// Get a card instance.
    #[must_use]
    pub fn get_card(&self, entity_id: EntityId) -> Option<&CardInstance> {
        self.cards.get(&entity_id)
    }

    /// Get a mutable card instance.
    pub fn get_card_mut(&mut self, entity_id: EntityId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&entity_id)
    }

    /// Remove a card from the board entirely.
    pub fn remove_card(&mut self, entity_id: EntityId) -> Option<CardInstance> {
        let card = self.cards.remove(&entity_id)?;
        for player in PlayerId::all() {
            self.pools[player].retain(|id| *id != entity_id);
        }
        Some(card)
    }

    // === Pools ===

    /// Ids in a player's pool, in slot order.
    #[must_use]
    pub fn pool(&self, player: PlayerId) -> &Vector<EntityId> {
        &self.pools[player]
    }

    /// Every card, first player's pool then second's, each in slot order.
    pub fn universe(&self) -> impl Iterator<Item = &CardInstance> + '_ {
        self.pools
            .values()
            .flat_map(|pool| pool.iter())
            .filter_map(|id| self.cards.get(id))
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
