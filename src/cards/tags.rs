//! Keyword tags carried by cards.
//!
//! Selectors test tags with `#name`. The textual names are fixed by
//! `Tag::from_name`; unknown names resolve to `None` and the selector
//! compiles them to a filter that matches nothing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A keyword ability marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Taunt,
    DivineShield,
    Charge,
    Stealth,
    Windfury,
    Frozen,
    Poisonous,
    Lifesteal,
    Rush,
    Immune,
    Silenced,
}

const TAG_NAMES: [(&str, Tag); 11] = [
    ("taunt", Tag::Taunt),
    ("divineShield", Tag::DivineShield),
    ("charge", Tag::Charge),
    ("stealth", Tag::Stealth),
    ("windfury", Tag::Windfury),
    ("frozen", Tag::Frozen),
    ("poisonous", Tag::Poisonous),
    ("lifesteal", Tag::Lifesteal),
    ("rush", Tag::Rush),
    ("immune", Tag::Immune),
    ("silenced", Tag::Silenced),
];

impl Tag {
    /// Look up a tag by its selector name.
    ///
    /// ```
    /// use ccg_select::cards::Tag;
    ///
    /// assert_eq!(Tag::from_name("divineShield"), Some(Tag::DivineShield));
    /// assert_eq!(Tag::from_name("tuant"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        TAG_NAMES
            .iter()
            .find(|(tag_name, _)| *tag_name == name)
            .map(|(_, tag)| *tag)
    }

    /// Selector name of this tag.
    #[must_use]
    pub fn name(self) -> &'static str {
        TAG_NAMES
            .iter()
            .find(|(_, tag)| *tag == self)
            .map_or("", |(name, _)| name)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of tags on a card. Insertion order is kept; duplicates are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet(SmallVec<[Tag; 4]>);

impl TagSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag. Returns false if it was already present.
    pub fn insert(&mut self, tag: Tag) -> bool {
        if self.contains(tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Remove a tag. Returns false if it was absent.
    pub fn remove(&mut self, tag: Tag) -> bool {
        match self.0.iter().position(|t| *t == tag) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, tag: Tag) -> bool {
        self.0.contains(&tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}
