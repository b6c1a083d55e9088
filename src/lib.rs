//! Decoder and encoder for the named binary tag (NBT) format.
//!
//! A document is decoded into a root [`Compound`] of named [`Tag`]s and can
//! be written back byte-for-byte. Big- and little-endian numerics, gzip/zlib
//! wrapped input and the network framing without a root name are selected
//! per call through [`DecodeOptions`] and [`EncodeOptions`].

/// Wire codec: reader, writer, parser, serializer, compression.
pub mod binary;
/// Settings loaded from files and `NBTKIT_*` environment variables.
pub mod config;
/// Parse, validation and resource-limit errors.
pub mod error;
/// tracing-subscriber initialisation.
pub mod logging;
/// In-memory tag tree.
pub mod tag;
/// Structural checks run before encoding.
pub mod validate;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Entry points and per-call options.
pub use binary::{
    decode, encode, from_bytes, to_bytes, Compression, DecodeOptions, EncodeOptions, Endian,
};
/// config
pub use config::Settings;
/// Error types and the result alias.
pub use error::{LimitKind, NbtError, NbtResult, ParseError, ValidationError};
/// Logging setup.
pub use logging::{init_logging, LogFormat, LoggingConfig};
/// Status codes shared with callers that map errors to wire responses.
pub use nbtkit_error::{ErrorExt, StatusCode};
/// Tree types.
pub use tag::{Compound, List, Tag, TagKind};
