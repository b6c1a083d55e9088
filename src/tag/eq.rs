//! Deep structural equality.
//!
//! Two tags are equal only if their kinds match, so `Int(5) != Long(5)`.
//! Floats compare by bit pattern: a decoded NaN equals the NaN it was
//! encoded from, and `0.0` differs from `-0.0`.

use super::{Compound, List, Tag};

impl PartialEq for Tag {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Tag::End, Tag::End) => true,
            (Tag::Byte(a), Tag::Byte(b)) => a == b,
            (Tag::Short(a), Tag::Short(b)) => a == b,
            (Tag::Int(a), Tag::Int(b)) => a == b,
            (Tag::Long(a), Tag::Long(b)) => a == b,
            (Tag::Float(a), Tag::Float(b)) => a.to_bits() == b.to_bits(),
            (Tag::Double(a), Tag::Double(b)) => a.to_bits() == b.to_bits(),
            (Tag::ByteArray(a), Tag::ByteArray(b)) => a == b,
            (Tag::String(a), Tag::String(b)) => a == b,
            (Tag::List(a), Tag::List(b)) => a == b,
            (Tag::Compound(a), Tag::Compound(b)) => a == b,
            (Tag::IntArray(a), Tag::IntArray(b)) => a == b,
            (Tag::LongArray(a), Tag::LongArray(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for List {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.element_kind() == other.element_kind()
            && self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl PartialEq for Compound {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|w| v == w))
    }
}
