use thiserror::Error;

use crate::tag::TagKind;

/// Malformed byte stream.
///
/// Every variant carries the byte offset (into the decompressed buffer) at
/// which the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid tag id 0x{tag:02X} at offset {offset}")]
    InvalidTag { tag: u8, offset: usize },

    #[error("Unexpected end of input while reading {context} at offset {offset}: need {needed} bytes, {remaining} left")]
    UnexpectedEof {
        context: &'static str,
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("Invalid {kind} length {length} at offset {offset} ({remaining} bytes left)")]
    InvalidLength {
        kind: TagKind,
        length: i32,
        remaining: usize,
        offset: usize,
    },

    #[error("Invalid Modified UTF-8 string at offset {offset}: {reason}")]
    InvalidString { reason: String, offset: usize },

    #[error("List of {kind} with {count} elements at offset {offset}")]
    InvalidListKind {
        kind: TagKind,
        count: i32,
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset the error refers to.
    pub fn offset(&self) -> usize {
        match self {
            Self::InvalidTag { offset, .. }
            | Self::UnexpectedEof { offset, .. }
            | Self::InvalidLength { offset, .. }
            | Self::InvalidString { offset, .. }
            | Self::InvalidListKind { offset, .. } => *offset,
        }
    }
}
