use thiserror::Error;

use crate::tag::TagKind;

/// A semantic invariant of the tag tree does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("List element {index} is {found}, but the list holds {expected}")]
    HeterogeneousList {
        index: usize,
        expected: TagKind,
        found: TagKind,
    },

    #[error("Encoded string is {len} bytes, maximum is {max}")]
    StringTooLong { len: usize, max: usize },

    #[error("{kind} has {len} elements, which does not fit a signed 32-bit count")]
    LengthOverflow { kind: TagKind, len: usize },

    #[error("TAG_End cannot be stored in a tree")]
    EndTagStored,

    #[error("Expected {expected}, found {found}")]
    WrongKind { expected: TagKind, found: TagKind },

    #[error("Compound has no entry named {key:?}")]
    MissingKey { key: String },

    #[error("Index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Network framing needs exactly one root entry, found {entries}")]
    NetworkRoot { entries: usize },

    #[error("{kind} cannot be a network root")]
    InvalidRootKind { kind: TagKind },
}
