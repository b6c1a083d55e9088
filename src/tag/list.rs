use std::slice;

use super::{Tag, TagKind};
use crate::{
    error::{NbtResult, ValidationError},
    validate,
};

/// A homogeneous sequence of unnamed tags.
///
/// The element kind is declared on the list itself and written once on the
/// wire. Every element has that kind; the checked constructors and mutators
/// enforce it, and [`List::from_tags_unchecked`] leaves the check to
/// [`validate`] or to the serializer.
#[derive(Debug, Clone)]
pub struct List {
    kind: TagKind,
    items: Vec<Tag>,
}

impl List {
    /// An empty list declared as holding `kind`.
    pub fn new(kind: TagKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    /// The canonical empty list: element kind End, no elements.
    pub fn empty() -> Self {
        Self::new(TagKind::End)
    }

    /// Builds a list and checks that every element has kind `kind`.
    pub fn from_tags(
        kind: TagKind,
        items: Vec<Tag>,
    ) -> NbtResult<Self> {
        validate::validate_list(kind, &items)?;
        Ok(Self { kind, items })
    }

    /// Builds a list without checking element kinds.
    ///
    /// For trusted, already-homogeneous input. A mismatch is still caught
    /// when the tree is validated or encoded.
    pub fn from_tags_unchecked(
        kind: TagKind,
        items: Vec<Tag>,
    ) -> Self {
        Self { kind, items }
    }

    pub fn element_kind(&self) -> TagKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&Tag> {
        self.items.get(index)
    }

    pub fn get_mut(
        &mut self,
        index: usize,
    ) -> Option<&mut Tag> {
        self.items.get_mut(index)
    }

    /// Appends an element.
    ///
    /// An empty list declared as End takes the kind of its first element.
    pub fn push(
        &mut self,
        value: impl Into<Tag>,
    ) -> NbtResult<()> {
        let value = value.into();
        let found = value.kind();
        if found == TagKind::End {
            return Err(ValidationError::EndTagStored.into());
        }
        if self.items.is_empty() && self.kind == TagKind::End {
            self.kind = found;
        }
        if found != self.kind {
            return Err(ValidationError::HeterogeneousList {
                index: self.items.len(),
                expected: self.kind,
                found,
            }
            .into());
        }
        self.items.push(value);
        Ok(())
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set(
        &mut self,
        index: usize,
        value: impl Into<Tag>,
    ) -> NbtResult<Tag> {
        let value = value.into();
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(ValidationError::IndexOutOfBounds { index, len })?;
        if value.kind() != self.kind {
            return Err(ValidationError::HeterogeneousList {
                index,
                expected: self.kind,
                found: value.kind(),
            }
            .into());
        }
        Ok(std::mem::replace(slot, value))
    }

    pub fn iter(&self) -> slice::Iter<'_, Tag> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.items
    }

    pub fn into_tags(self) -> Vec<Tag> {
        self.items
    }
}

impl Default for List {
    fn default() -> Self {
        Self::empty()
    }
}

/// Infers the element kind from the first element; an empty vector gives
/// the canonical empty list.
impl TryFrom<Vec<Tag>> for List {
    type Error = crate::error::NbtError;

    fn try_from(items: Vec<Tag>) -> NbtResult<Self> {
        let kind = items.first().map(Tag::kind).unwrap_or(TagKind::End);
        Self::from_tags(kind, items)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for List {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NbtError;

    #[test]
    fn test_from_tags_rejects_mixed_kinds() {
        let err = List::from_tags(TagKind::Int, vec![Tag::Int(1), Tag::Long(2)]).unwrap_err();
        assert_eq!(
            err,
            NbtError::Validation(ValidationError::HeterogeneousList {
                index: 1,
                expected: TagKind::Int,
                found: TagKind::Long,
            })
        );
    }

    #[test]
    fn test_unchecked_skips_validation() {
        let list = List::from_tags_unchecked(TagKind::Int, vec![Tag::Long(2)]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.element_kind(), TagKind::Int);
    }

    #[test]
    fn test_push_adopts_kind_on_empty_end_list() {
        let mut list = List::empty();
        list.push(3.5f32).unwrap();
        assert_eq!(list.element_kind(), TagKind::Float);
        assert!(list.push(1i32).unwrap_err().is_validation());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_push_keeps_declared_kind() {
        let mut list = List::new(TagKind::String);
        assert!(list.push(1i8).is_err());
        list.push("a").unwrap();
        assert_eq!(list.get(0).and_then(Tag::as_str), Some("a"));
    }

    #[test]
    fn test_push_rejects_end() {
        let mut list = List::empty();
        assert_eq!(
            list.push(Tag::End).unwrap_err(),
            NbtError::Validation(ValidationError::EndTagStored)
        );
    }

    #[test]
    fn test_try_from_vec_infers_kind() {
        let list = List::try_from(vec![Tag::Double(1.0), Tag::Double(2.0)]).unwrap();
        assert_eq!(list.element_kind(), TagKind::Double);

        let list = List::try_from(Vec::new()).unwrap();
        assert_eq!(list.element_kind(), TagKind::End);
        assert!(list.is_empty());

        assert!(List::try_from(vec![Tag::Byte(1), Tag::Short(1)]).is_err());
    }
}
