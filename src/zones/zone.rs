//! Card zones.
//!
//! Every card occupies exactly one zone at any instant. Selectors name zones
//! with an `@` prefix; the graveyard is spelled `@grave`.

use serde::{Deserialize, Serialize};

/// Location of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Play,
    Graveyard,
    /// Set aside: out of the game but still tracked (transformed, discovered).
    Aside,
    Secret,
}

impl Zone {
    /// Every zone, in bit order.
    pub const ALL: [Zone; 6] = [
        Zone::Deck,
        Zone::Hand,
        Zone::Play,
        Zone::Graveyard,
        Zone::Aside,
        Zone::Secret,
    ];

    /// Parse a selector zone name (without the `@`).
    ///
    /// ```
    /// use ccg_select::zones::Zone;
    ///
    /// assert_eq!(Zone::from_selector_name("grave"), Some(Zone::Graveyard));
    /// assert_eq!(Zone::from_selector_name("graveyard"), None);
    /// ```
    #[must_use]
    pub fn from_selector_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|zone| zone.selector_name() == name)
    }

    /// Selector name of this zone (without the `@`).
    #[must_use]
    pub const fn selector_name(self) -> &'static str {
        match self {
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::Play => "play",
            Zone::Graveyard => "grave",
            Zone::Aside => "aside",
            Zone::Secret => "secret",
        }
    }

    /// Bit used in zone sets.
    #[must_use]
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.selector_name())
    }
}
