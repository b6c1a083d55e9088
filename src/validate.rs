//! Structural validation of tag trees.
//!
//! The parser produces valid trees by construction. Trees assembled in code
//! go through [`validate_list`] when built with the checked [`List`]
//! constructors, and through [`validate_compound`] before encoding unless
//! the caller disables it in [`crate::EncodeOptions`].

use crate::{
    binary::mutf8,
    error::ValidationError,
    tag::{Compound, List, Tag, TagKind},
};

/// Longest encoded string the u16 length prefix can describe.
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

/// Longest list or array a signed 32-bit count can describe.
pub const MAX_SEQUENCE_LEN: usize = i32::MAX as usize;

/// Checks that every element of `items` has kind `kind`.
///
/// A list declared as End must be empty.
pub fn validate_list(
    kind: TagKind,
    items: &[Tag],
) -> Result<(), ValidationError> {
    if kind == TagKind::End && !items.is_empty() {
        return Err(ValidationError::EndTagStored);
    }
    check_len(TagKind::List, items.len())?;
    match items.iter().position(|t| t.kind() != kind) {
        Some(index) => Err(ValidationError::HeterogeneousList {
            index,
            expected: kind,
            found: items[index].kind(),
        }),
        None => Ok(()),
    }
}

/// Walks a whole tree and checks every invariant the serializer relies on.
pub fn validate_tag(tag: &Tag) -> Result<(), ValidationError> {
    match tag {
        Tag::End => Err(ValidationError::EndTagStored),
        Tag::Byte(_)
        | Tag::Short(_)
        | Tag::Int(_)
        | Tag::Long(_)
        | Tag::Float(_)
        | Tag::Double(_) => Ok(()),
        Tag::ByteArray(v) => check_len(TagKind::ByteArray, v.len()),
        Tag::IntArray(v) => check_len(TagKind::IntArray, v.len()),
        Tag::LongArray(v) => check_len(TagKind::LongArray, v.len()),
        Tag::String(s) => validate_string(s),
        Tag::List(list) => validate_list_deep(list),
        Tag::Compound(c) => validate_compound(c),
    }
}

pub fn validate_compound(compound: &Compound) -> Result<(), ValidationError> {
    for (name, value) in compound {
        validate_string(name)?;
        validate_tag(value)?;
    }
    Ok(())
}

/// Checks that `s` fits the u16 length prefix once encoded.
pub fn validate_string(s: &str) -> Result<(), ValidationError> {
    let len = mutf8::encoded_len(s);
    if len > MAX_STRING_LEN {
        return Err(ValidationError::StringTooLong {
            len,
            max: MAX_STRING_LEN,
        });
    }
    Ok(())
}

fn validate_list_deep(list: &List) -> Result<(), ValidationError> {
    validate_list(list.element_kind(), list.as_slice())?;
    list.iter().try_for_each(validate_tag)
}

fn check_len(
    kind: TagKind,
    len: usize,
) -> Result<(), ValidationError> {
    if len > MAX_SEQUENCE_LEN {
        return Err(ValidationError::LengthOverflow { kind, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound;

    #[test]
    fn test_homogeneous_list_passes() {
        let items = vec![Tag::Int(1), Tag::Int(2), Tag::Int(3)];
        assert!(validate_list(TagKind::Int, &items).is_ok());
    }

    #[test]
    fn test_reports_first_offending_index() {
        let items = vec![Tag::Int(1), Tag::Int(2), Tag::Long(3), Tag::Short(4)];
        assert_eq!(
            validate_list(TagKind::Int, &items),
            Err(ValidationError::HeterogeneousList {
                index: 2,
                expected: TagKind::Int,
                found: TagKind::Long,
            })
        );
    }

    #[test]
    fn test_end_list_must_be_empty() {
        assert!(validate_list(TagKind::End, &[]).is_ok());
        assert_eq!(
            validate_list(TagKind::End, &[Tag::Int(1)]),
            Err(ValidationError::EndTagStored)
        );
    }

    #[test]
    fn test_nested_mismatch_is_found() {
        let bad = List::from_tags_unchecked(TagKind::Byte, vec![Tag::Byte(1), Tag::Int(1)]);
        let outer = List::from_tags(TagKind::List, vec![Tag::List(bad)]).unwrap();
        let root = compound! { "deep" => compound! { "lists" => outer } };
        assert!(matches!(
            validate_compound(&root),
            Err(ValidationError::HeterogeneousList { index: 1, .. })
        ));
    }

    #[test]
    fn test_string_length_limit() {
        assert!(validate_string(&"a".repeat(MAX_STRING_LEN)).is_ok());
        assert_eq!(
            validate_string(&"a".repeat(MAX_STRING_LEN + 1)),
            Err(ValidationError::StringTooLong {
                len: MAX_STRING_LEN + 1,
                max: MAX_STRING_LEN,
            })
        );
    }

    #[test]
    fn test_string_limit_counts_encoded_bytes() {
        // U+00E9 takes two bytes in Modified UTF-8.
        let s = "\u{e9}".repeat(MAX_STRING_LEN / 2 + 1);
        assert!(validate_string(&s).is_err());
    }

    #[test]
    fn test_compound_names_are_checked() {
        let mut c = Compound::new();
        c.insert("k".repeat(MAX_STRING_LEN + 1), 1i8);
        assert!(matches!(
            validate_compound(&c),
            Err(ValidationError::StringTooLong { .. })
        ));
    }

    #[test]
    fn test_stored_end_is_rejected() {
        let c = compound! { "end" => Tag::End };
        assert_eq!(validate_compound(&c), Err(ValidationError::EndTagStored));
    }
}
