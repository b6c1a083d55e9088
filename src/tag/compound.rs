use indexmap::{map, IndexMap};

use super::Tag;
use crate::error::{NbtResult, ValidationError};

/// Named children of a compound tag.
///
/// Entries keep insertion order so that a decoded document re-encodes to
/// the same bytes. Equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct Compound {
    entries: IndexMap<String, Tag>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts an entry and returns the value it replaced.
    ///
    /// A replaced entry keeps its original position; the new value wins.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Tag>,
    ) -> Option<Tag> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(
        &self,
        key: &str,
    ) -> Option<&Tag> {
        self.entries.get(key)
    }

    pub fn get_mut(
        &mut self,
        key: &str,
    ) -> Option<&mut Tag> {
        self.entries.get_mut(key)
    }

    /// Like [`Compound::get`], but a missing key is an error.
    pub fn require(
        &self,
        key: &str,
    ) -> NbtResult<&Tag> {
        self.entries.get(key).ok_or_else(|| {
            ValidationError::MissingKey {
                key: key.to_string(),
            }
            .into()
        })
    }

    /// Removes an entry, keeping the order of the remaining ones.
    pub fn remove(
        &mut self,
        key: &str,
    ) -> Option<Tag> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(
        &self,
        key: &str,
    ) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> map::Iter<'_, String, Tag> {
        self.entries.iter()
    }

    pub fn keys(&self) -> map::Keys<'_, String, Tag> {
        self.entries.keys()
    }

    pub fn values(&self) -> map::Values<'_, String, Tag> {
        self.entries.values()
    }
}

impl<K: Into<String>, V: Into<Tag>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Tag>> Extend<(K, V)> for Compound {
    fn extend<I: IntoIterator<Item = (K, V)>>(
        &mut self,
        iter: I,
    ) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Tag);
    type IntoIter = map::Iter<'a, String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Compound {
    type Item = (String, Tag);
    type IntoIter = map::IntoIter<String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Builds a [`Compound`] from `key => value` pairs.
///
/// ```
/// use nbtkit::{compound, Tag};
///
/// let c = compound! {
///     "name" => "Bananrama",
///     "level" => 3i32,
/// };
/// assert_eq!(c.get("level").and_then(Tag::as_int), Some(3));
/// ```
#[macro_export]
macro_rules! compound {
    () => {
        $crate::Compound::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut c = $crate::Compound::new();
        $(
            c.insert($key, $value);
        )+
        c
    }};
}
