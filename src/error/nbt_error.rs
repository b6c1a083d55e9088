use std::{any::Any, fmt};

use nbtkit_error::{ErrorExt, StatusCode};
use thiserror::Error;

use super::{ParseError, ValidationError};
use crate::binary::Compression;

pub type NbtResult<T> = Result<T, NbtError>;

/// Error returned by every decode, encode and tree-access operation.
///
/// A failed call never leaves partial output behind: the caller gets either
/// the complete tree/buffer or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NbtError {
    /// The input bytes are malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A configured resource ceiling was exceeded during decode.
    ///
    /// Kept apart from [`NbtError::Parse`] so that oversized input can be
    /// rejected under its own admission policy.
    #[error("{limit} limit exceeded: {actual} > {max}")]
    DataTooLarge {
        limit: LimitKind,
        max: usize,
        actual: usize,
    },

    /// The tree breaks an invariant of the format.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Writing the gzip/zlib wrapper failed.
    #[error("{format:?} compression failed: {reason}")]
    Compression { format: Compression, reason: String },
}

/// The resource ceiling named in [`NbtError::DataTooLarge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    /// Cumulative number of tags in one document.
    Nodes,
    /// Nesting depth of lists and compounds.
    Depth,
    /// Size of the inflated input.
    DecompressedBytes,
}

impl NbtError {
    pub fn too_large(
        limit: LimitKind,
        max: usize,
        actual: usize,
    ) -> Self {
        Self::DataTooLarge { limit, max, actual }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    pub fn is_too_large(&self) -> bool {
        matches!(self, Self::DataTooLarge { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl fmt::Display for LimitKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Nodes => write!(f, "Node count"),
            Self::Depth => write!(f, "Nesting depth"),
            Self::DecompressedBytes => write!(f, "Decompressed size"),
        }
    }
}

impl ErrorExt for NbtError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Parse(e) => match e {
                ParseError::InvalidTag { .. } | ParseError::InvalidListKind { .. } => {
                    StatusCode::InvalidTag
                }
                ParseError::UnexpectedEof { .. } => StatusCode::UnexpectedEof,
                ParseError::InvalidLength { .. } => StatusCode::InvalidLength,
                ParseError::InvalidString { .. } => StatusCode::InvalidUtf8,
            },
            Self::DataTooLarge { limit, .. } => match limit {
                LimitKind::Nodes => StatusCode::NodeLimit,
                LimitKind::Depth => StatusCode::DepthLimit,
                LimitKind::DecompressedBytes => StatusCode::SizeLimit,
            },
            Self::Validation(e) => match e {
                ValidationError::HeterogeneousList { .. } => StatusCode::HeterogeneousList,
                ValidationError::StringTooLong { .. } | ValidationError::LengthOverflow { .. } => {
                    StatusCode::EncodingError
                }
                ValidationError::WrongKind { .. } => StatusCode::WrongType,
                ValidationError::MissingKey { .. } => StatusCode::NotFound,
                ValidationError::IndexOutOfBounds { .. } => StatusCode::IndexOutOfBounds,
                ValidationError::EndTagStored | ValidationError::NetworkRoot { .. } => {
                    StatusCode::InvalidData
                }
                ValidationError::InvalidRootKind { .. } => StatusCode::InvalidArgs,
            },
            Self::Compression { .. } => StatusCode::CompressionFailed,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn client_message(&self) -> String {
        match self {
            Self::Parse(_) => "Malformed NBT data".to_string(),
            Self::DataTooLarge { limit, .. } => format!("{limit} exceeds the configured limit"),
            Self::Validation(e) => e.to_string(),
            Self::Compression { format, .. } => format!("{format:?} compression failed"),
        }
    }

    fn metrics_tags(&self) -> Vec<(&'static str, String)> {
        let mut tags = vec![
            ("error_type", self.type_name()),
            ("status_code", self.status_code().to_string()),
        ];
        match self {
            Self::DataTooLarge { limit, .. } => tags.push(("limit_type", format!("{limit:?}"))),
            Self::Parse(e) => tags.push(("offset", e.offset().to_string())),
            _ => {}
        }
        tags
    }
}
