//! Kind discriminants of the binary tag format.
//!
//! Every tag on the wire starts with a one-byte kind id. The ids are fixed by
//! the format and shared by all byte orders and framings.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Terminates a compound or the top-level document.
pub const TAG_END: u8 = 0x00;
/// Signed 8-bit integer.
pub const TAG_BYTE: u8 = 0x01;
/// Signed 16-bit integer.
pub const TAG_SHORT: u8 = 0x02;
/// Signed 32-bit integer.
pub const TAG_INT: u8 = 0x03;
/// Signed 64-bit integer.
pub const TAG_LONG: u8 = 0x04;
/// IEEE-754 single precision float.
pub const TAG_FLOAT: u8 = 0x05;
/// IEEE-754 double precision float.
pub const TAG_DOUBLE: u8 = 0x06;
/// Length-prefixed array of signed bytes.
pub const TAG_BYTE_ARRAY: u8 = 0x07;
/// Length-prefixed Modified UTF-8 string.
pub const TAG_STRING: u8 = 0x08;
/// Homogeneous list of unnamed tags.
pub const TAG_LIST: u8 = 0x09;
/// Named children terminated by [`TAG_END`].
pub const TAG_COMPOUND: u8 = 0x0A;
/// Length-prefixed array of signed 32-bit integers.
pub const TAG_INT_ARRAY: u8 = 0x0B;
/// Length-prefixed array of signed 64-bit integers.
pub const TAG_LONG_ARRAY: u8 = 0x0C;

/// The thirteen tag kinds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TagKind {
    End = 0x00,
    Byte = 0x01,
    Short = 0x02,
    Int = 0x03,
    Long = 0x04,
    Float = 0x05,
    Double = 0x06,
    ByteArray = 0x07,
    String = 0x08,
    List = 0x09,
    Compound = 0x0A,
    IntArray = 0x0B,
    LongArray = 0x0C,
}

impl TagKind {
    /// Wire id of the kind.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks a kind up by wire id.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::try_from(id).ok()
    }

    /// Conventional name, as used by most tooling for this format.
    pub const fn name(self) -> &'static str {
        match self {
            Self::End => "TAG_End",
            Self::Byte => "TAG_Byte",
            Self::Short => "TAG_Short",
            Self::Int => "TAG_Int",
            Self::Long => "TAG_Long",
            Self::Float => "TAG_Float",
            Self::Double => "TAG_Double",
            Self::ByteArray => "TAG_Byte_Array",
            Self::String => "TAG_String",
            Self::List => "TAG_List",
            Self::Compound => "TAG_Compound",
            Self::IntArray => "TAG_Int_Array",
            Self::LongArray => "TAG_Long_Array",
        }
    }

    /// Smallest number of bytes an unnamed payload of this kind occupies.
    ///
    /// The parser multiplies declared counts by this before allocating, so a
    /// count that cannot possibly fit in the remaining input is rejected
    /// up front.
    pub const fn min_payload_len(self) -> usize {
        match self {
            Self::End => 0,
            Self::Byte => 1,
            Self::Short => 2,
            Self::Int | Self::Float => 4,
            Self::Long | Self::Double => 8,
            // i32 length prefix
            Self::ByteArray | Self::IntArray | Self::LongArray => 4,
            // u16 length prefix
            Self::String => 2,
            // element kind byte + i32 count
            Self::List => 5,
            // at least the End terminator
            Self::Compound => 1,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_roundtrip_through_from_id() {
        for id in 0u8..=12 {
            let kind = TagKind::from_id(id).expect("known id");
            assert_eq!(kind.id(), id);
            assert_eq!(u8::from(kind), id);
        }
    }

    #[test]
    fn test_unknown_ids() {
        assert_eq!(TagKind::from_id(13), None);
        assert_eq!(TagKind::from_id(0xFF), None);
    }

    #[test]
    fn test_display_uses_conventional_name() {
        assert_eq!(TagKind::Compound.to_string(), "TAG_Compound");
        assert_eq!(TagKind::LongArray.to_string(), "TAG_Long_Array");
    }
}
