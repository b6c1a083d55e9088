use super::{Compound, List, TagKind};
use crate::error::{NbtResult, ValidationError};

/// One node of a tag tree.
///
/// The enum is closed over the thirteen kinds of the format, so every
/// consumer matches exhaustively. [`Tag::End`] exists to keep the kind set
/// complete; the parser never produces it and trees that contain it are
/// rejected by validation and by the serializer.
#[derive(Debug, Clone)]
pub enum Tag {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Tag {
    pub fn kind(&self) -> TagKind {
        match self {
            Self::End => TagKind::End,
            Self::Byte(_) => TagKind::Byte,
            Self::Short(_) => TagKind::Short,
            Self::Int(_) => TagKind::Int,
            Self::Long(_) => TagKind::Long,
            Self::Float(_) => TagKind::Float,
            Self::Double(_) => TagKind::Double,
            Self::ByteArray(_) => TagKind::ByteArray,
            Self::String(_) => TagKind::String,
            Self::List(_) => TagKind::List,
            Self::Compound(_) => TagKind::Compound,
            Self::IntArray(_) => TagKind::IntArray,
            Self::LongArray(_) => TagKind::LongArray,
        }
    }

    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Self::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<i16> {
        match self {
            Self::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Self::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Self::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Self::LongArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Self::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Self::Compound(c) => Some(c),
            _ => None,
        }
    }

    /// Child of a compound by name.
    ///
    /// Fails if this tag is not a compound or has no such entry.
    pub fn get(
        &self,
        key: &str,
    ) -> NbtResult<&Tag> {
        let found = self.kind();
        let compound = self.as_compound().ok_or(ValidationError::WrongKind {
            expected: TagKind::Compound,
            found,
        })?;
        compound.require(key)
    }

    pub fn get_mut(
        &mut self,
        key: &str,
    ) -> NbtResult<&mut Tag> {
        let found = self.kind();
        let compound = self.as_compound_mut().ok_or(ValidationError::WrongKind {
            expected: TagKind::Compound,
            found,
        })?;
        compound.get_mut(key).ok_or_else(|| {
            ValidationError::MissingKey {
                key: key.to_string(),
            }
            .into()
        })
    }

    /// Element of a list by position.
    ///
    /// Fails if this tag is not a list or `index` is out of bounds.
    pub fn at(
        &self,
        index: usize,
    ) -> NbtResult<&Tag> {
        let found = self.kind();
        let list = self.as_list().ok_or(ValidationError::WrongKind {
            expected: TagKind::List,
            found,
        })?;
        list.get(index).ok_or_else(|| {
            ValidationError::IndexOutOfBounds {
                index,
                len: list.len(),
            }
            .into()
        })
    }

    /// Inserts into a compound, returning the value previously stored under
    /// `key`.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Tag>,
    ) -> NbtResult<Option<Tag>> {
        let found = self.kind();
        let compound = self.as_compound_mut().ok_or(ValidationError::WrongKind {
            expected: TagKind::Compound,
            found,
        })?;
        Ok(compound.insert(key, value))
    }

    /// Replaces a list element, returning the old one. The new element must
    /// match the list's element kind.
    pub fn set_at(
        &mut self,
        index: usize,
        value: impl Into<Tag>,
    ) -> NbtResult<Tag> {
        let found = self.kind();
        let list = self.as_list_mut().ok_or(ValidationError::WrongKind {
            expected: TagKind::List,
            found,
        })?;
        list.set(index, value)
    }
}

macro_rules! impl_from_payload {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Tag {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_payload! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    String => String,
    List => List,
    Compound => Compound,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
}

impl From<&str> for Tag {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<bool> for Tag {
    fn from(v: bool) -> Self {
        Self::Byte(v as i8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compound, error::NbtError};

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Tag::from(1i8).kind(), TagKind::Byte);
        assert_eq!(Tag::from(1i16).kind(), TagKind::Short);
        assert_eq!(Tag::from(1i32).kind(), TagKind::Int);
        assert_eq!(Tag::from(1i64).kind(), TagKind::Long);
        assert_eq!(Tag::from(1.0f32).kind(), TagKind::Float);
        assert_eq!(Tag::from(1.0f64).kind(), TagKind::Double);
        assert_eq!(Tag::from(vec![1i8]).kind(), TagKind::ByteArray);
        assert_eq!(Tag::from("x").kind(), TagKind::String);
        assert_eq!(Tag::from(List::empty()).kind(), TagKind::List);
        assert_eq!(Tag::from(Compound::new()).kind(), TagKind::Compound);
        assert_eq!(Tag::from(vec![1i32]).kind(), TagKind::IntArray);
        assert_eq!(Tag::from(vec![1i64]).kind(), TagKind::LongArray);
        assert_eq!(Tag::End.kind(), TagKind::End);
    }

    #[test]
    fn test_bool_is_byte() {
        assert_eq!(Tag::from(true).as_byte(), Some(1));
        assert_eq!(Tag::from(false).as_byte(), Some(0));
    }

    #[test]
    fn test_get_on_compound() {
        let tag = Tag::Compound(compound! { "level" => 7i32 });
        assert_eq!(tag.get("level").unwrap().as_int(), Some(7));

        let err = tag.get("missing").unwrap_err();
        assert_eq!(
            err,
            NbtError::Validation(ValidationError::MissingKey {
                key: "missing".into()
            })
        );
    }

    #[test]
    fn test_get_on_non_compound_is_wrong_kind() {
        let err = Tag::Int(3).get("anything").unwrap_err();
        assert_eq!(
            err,
            NbtError::Validation(ValidationError::WrongKind {
                expected: TagKind::Compound,
                found: TagKind::Int,
            })
        );
    }

    #[test]
    fn test_at_on_list() {
        let list = List::from_tags(TagKind::Short, vec![Tag::Short(1), Tag::Short(2)]).unwrap();
        let tag = Tag::List(list);
        assert_eq!(tag.at(1).unwrap().as_short(), Some(2));
        assert_eq!(
            tag.at(2).unwrap_err(),
            NbtError::Validation(ValidationError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert!(Tag::from("s").at(0).unwrap_err().is_validation());
    }

    #[test]
    fn test_field_assignment_through_get_mut() {
        let mut tag = Tag::Compound(compound! { "hp" => 20i16 });
        if let Tag::Short(hp) = tag.get_mut("hp").unwrap() {
            *hp -= 5;
        }
        assert_eq!(tag.get("hp").unwrap().as_short(), Some(15));
    }

    #[test]
    fn test_insert_and_set_at() {
        let mut tag = Tag::Compound(Compound::new());
        assert_eq!(tag.insert("a", 1i32).unwrap(), None);
        assert!(matches!(tag.insert("a", 2i32).unwrap(), Some(Tag::Int(1))));
        assert!(Tag::Int(0).insert("a", 1i32).is_err());

        let mut list = Tag::List(List::from_tags(TagKind::Int, vec![Tag::Int(1)]).unwrap());
        assert!(matches!(list.set_at(0, 9i32).unwrap(), Tag::Int(1)));
        assert!(list.set_at(0, 9i64).unwrap_err().is_validation());
        assert!(list.set_at(5, 9i32).unwrap_err().is_validation());
    }
}
