//! Result container.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{EntityId, GameRng};

/// Ordered, duplicate-preserving list of matched entities.
///
/// Holds ids, not cards: it never owns or copies entity state, and stays
/// valid while the board it came from is mutated. Backed by `im::Vector`, so
/// clones and concatenation share structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    ids: Vector<EntityId>,
}

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = EntityId>) -> Self {
        ids.into_iter().collect()
    }

    pub fn push(&mut self, id: EntityId) {
        self.ids.push_back(id);
    }

    /// `self` followed by `other`.
    ///
    /// ```
    /// use ccg_select::core::EntityId;
    /// use ccg_select::effects::ResultSet;
    ///
    /// let own = ResultSet::from_ids([EntityId(1)]);
    /// let enemy = ResultSet::from_ids([EntityId(4), EntityId(1)]);
    ///
    /// assert_eq!(own.concat(&enemy).to_vec(), vec![EntityId(1), EntityId(4), EntityId(1)]);
    /// ```
    #[must_use]
    pub fn concat(&self, other: &ResultSet) -> ResultSet {
        let mut ids = self.ids.clone();
        ids.append(other.ids.clone());
        Self { ids }
    }

    /// Move every member of `other` onto the end of `self`.
    pub fn append(&mut self, other: ResultSet) {
        self.ids.append(other.ids);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.ids.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn first(&self) -> Option<EntityId> {
        self.ids.front().copied()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<EntityId> {
        self.iter().collect()
    }

    /// One member chosen uniformly, or `None` when empty.
    pub fn random(&self, rng: &mut GameRng) -> Option<EntityId> {
        if self.ids.is_empty() {
            return None;
        }
        let index = rng.gen_range_usize(0..self.ids.len());
        self.ids.get(index).copied()
    }
}

impl FromIterator<EntityId> for ResultSet {
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<EntityId> for ResultSet {
    fn extend<I: IntoIterator<Item = EntityId>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}
