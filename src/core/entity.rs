//! Entity identification.
//!
//! Every card or character on the board has a unique `EntityId`. Heroes are
//! cards of type `hero`, so players themselves never occupy an id.
//!
//! ```
//! use ccg_select::core::EntityId;
//!
//! let fireball = EntityId(7);
//! assert_eq!(fireball.raw(), 7);
//! assert_eq!(fireball.to_string(), "Entity(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a board entity.
///
/// Ids are allocated by `Board` in increasing order and never reused within
/// a match, so they stay stable across owner and zone changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw() {
        assert_eq!(EntityId(41).raw(), 41);
        assert_eq!(EntityId::from(u32::MAX).raw(), u32::MAX);
    }

    #[test]
    fn test_ordering() {
        assert!(EntityId(1) < EntityId(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EntityId(42)), "Entity(42)");
    }

    #[test]
    fn test_serialization() {
        let id = EntityId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
