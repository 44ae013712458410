//! Typed property bag for cards.
//!
//! Selectors read properties by name (`.attack<3`, `.race=murloc`). Known
//! names map to typed fields on `Properties`; anything else falls through to
//! an extension map so card scripts can attach ad-hoc values.
//!
//! ## PropertyValue Types
//!
//! - `Int`: Numbers (attack, health, cost)
//! - `Bool`: Flags (isReady, exhausted)
//! - `Text`: Strings (race, name)

use std::borrow::Cow;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Result, SelectorError};

/// Name of a card property.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKey {
    Attack,
    Health,
    MaxHealth,
    Cost,
    Overload,
    SpellDamage,
    Race,
    Name,
    /// Extension field, looked up in `Properties::extra`.
    Other(String),
}

/// Static type of a known property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    Int,
    Text,
}

impl PropertyKey {
    /// Map a selector property name to a key.
    ///
    /// ```
    /// use ccg_select::cards::PropertyKey;
    ///
    /// assert_eq!(PropertyKey::parse("attack"), PropertyKey::Attack);
    /// assert_eq!(PropertyKey::parse("isReady"), PropertyKey::Other("isReady".into()));
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "attack" => Self::Attack,
            "health" => Self::Health,
            "maxHealth" => Self::MaxHealth,
            "cost" => Self::Cost,
            "overload" => Self::Overload,
            "spellDamage" => Self::SpellDamage,
            "race" => Self::Race,
            "name" => Self::Name,
            other => Self::Other(other.to_string()),
        }
    }

    /// Selector name of this key.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Attack => "attack",
            Self::Health => "health",
            Self::MaxHealth => "maxHealth",
            Self::Cost => "cost",
            Self::Overload => "overload",
            Self::SpellDamage => "spellDamage",
            Self::Race => "race",
            Self::Name => "name",
            Self::Other(name) => name,
        }
    }

    /// Static type of the key, `None` for extension fields.
    #[must_use]
    pub fn kind(&self) -> Option<PropertyKind> {
        match self {
            Self::Attack
            | Self::Health
            | Self::MaxHealth
            | Self::Cost
            | Self::Overload
            | Self::SpellDamage => Some(PropertyKind::Int),
            Self::Race | Self::Name => Some(PropertyKind::Text),
            Self::Other(_) => None,
        }
    }
}

impl std::fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stored value of an extension property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl PropertyValue {
    /// Borrow as a `PropertyRef`.
    #[must_use]
    pub fn view(&self) -> PropertyRef<'_> {
        match self {
            Self::Int(v) => PropertyRef::Int(*v),
            Self::Bool(v) => PropertyRef::Bool(*v),
            Self::Text(v) => PropertyRef::Text(v),
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Borrowed view of a property value, as read by selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyRef<'a> {
    Int(i64),
    Bool(bool),
    Text(&'a str),
}

impl<'a> PropertyRef<'a> {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Get as string if this is a Text value.
    #[must_use]
    pub fn as_text(self) -> Option<&'a str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Non-zero, `true`, or non-empty.
    #[must_use]
    pub fn is_truthy(self) -> bool {
        match self {
            Self::Int(v) => v != 0,
            Self::Bool(v) => v,
            Self::Text(v) => !v.is_empty(),
        }
    }

    /// String form used for textual comparisons.
    #[must_use]
    pub fn render(self) -> Cow<'a, str> {
        match self {
            Self::Int(v) => Cow::Owned(v.to_string()),
            Self::Bool(v) => Cow::Borrowed(if v { "true" } else { "false" }),
            Self::Text(v) => Cow::Borrowed(v),
        }
    }
}

/// Card properties: typed known fields plus an extension map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    pub attack: i64,
    pub health: i64,
    /// Health cap for healing. `None` when uncapped.
    pub max_health: Option<i64>,
    pub cost: i64,
    pub overload: i64,
    pub spell_damage: i64,
    pub race: Option<String>,
    pub name: String,
    /// Extension fields not covered above.
    #[serde(default)]
    pub extra: FxHashMap<String, PropertyValue>,
}

impl Properties {
    /// Read a property. `None` means the card has no such property.
    #[must_use]
    pub fn get(&self, key: &PropertyKey) -> Option<PropertyRef<'_>> {
        match key {
            PropertyKey::Attack => Some(PropertyRef::Int(self.attack)),
            PropertyKey::Health => Some(PropertyRef::Int(self.health)),
            PropertyKey::MaxHealth => self.max_health.map(PropertyRef::Int),
            PropertyKey::Cost => Some(PropertyRef::Int(self.cost)),
            PropertyKey::Overload => Some(PropertyRef::Int(self.overload)),
            PropertyKey::SpellDamage => Some(PropertyRef::Int(self.spell_damage)),
            PropertyKey::Race => self.race.as_deref().map(PropertyRef::Text),
            PropertyKey::Name => Some(PropertyRef::Text(&self.name)),
            PropertyKey::Other(name) => self.extra.get(name).map(PropertyValue::view),
        }
    }

    /// Write a property.
    ///
    /// Known keys are typed: writing text to `attack` or a number to `race`
    /// fails and leaves the properties unchanged. Extension keys take any value.
    pub fn set(&mut self, key: PropertyKey, value: impl Into<PropertyValue>) -> Result<()> {
        match (key, value.into()) {
            (PropertyKey::Attack, PropertyValue::Int(v)) => self.attack = v,
            (PropertyKey::Health, PropertyValue::Int(v)) => self.health = v,
            (PropertyKey::MaxHealth, PropertyValue::Int(v)) => self.max_health = Some(v),
            (PropertyKey::Cost, PropertyValue::Int(v)) => self.cost = v,
            (PropertyKey::Overload, PropertyValue::Int(v)) => self.overload = v,
            (PropertyKey::SpellDamage, PropertyValue::Int(v)) => self.spell_damage = v,
            (PropertyKey::Race, PropertyValue::Text(v)) => self.race = Some(v),
            (PropertyKey::Name, PropertyValue::Text(v)) => self.name = v,
            (PropertyKey::Other(name), value) => match PropertyKey::parse(&name) {
                // `Other("attack")` built by hand still lands on the typed field.
                PropertyKey::Other(_) => {
                    self.extra.insert(name, value);
                }
                known => return self.set(known, value),
            },
            (key, value) => {
                let expected = match key.kind() {
                    Some(PropertyKind::Text) => "text",
                    _ => "an integer",
                };
                return Err(SelectorError::input(
                    value.view().render(),
                    format!("property {key} expects {expected}"),
                ));
            }
        }
        Ok(())
    }
}
