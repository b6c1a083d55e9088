//! Binary codec for NBT documents.
//!
//! A document is a sequence of named root tags. Each named tag is a kind
//! byte, a u16-prefixed Modified UTF-8 name and the payload. Lists carry an
//! element kind and a signed 32-bit count, and compounds run until an End
//! byte. Multi-byte numerics use the byte order picked per call.
//!
//! ```
//! use nbtkit::{compound, decode, encode, DecodeOptions, EncodeOptions};
//!
//! let root = compound! { "hello world" => compound! { "name" => "Bananrama" } };
//! let bytes = encode(&root, &EncodeOptions::default()).unwrap();
//! assert_eq!(decode(&bytes, &DecodeOptions::default()).unwrap(), root);
//! ```

pub mod compression;
pub mod decode;
pub mod encode;
pub mod mutf8;
pub mod options;
pub mod reader;
pub mod writer;

pub use decode::decode;
pub use encode::encode;
pub use options::{
    Compression, DecodeOptions, EncodeOptions, Endian, DEFAULT_MAX_DECOMPRESSED_BYTES,
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES,
};
pub use reader::Reader;
pub use writer::Writer;

use crate::{error::NbtResult, tag::Compound};

/// Decodes big-endian, possibly compressed input with default limits.
pub fn from_bytes(bytes: &[u8]) -> NbtResult<Compound> {
    decode(bytes, &DecodeOptions::default())
}

/// Encodes big-endian, uncompressed output.
pub fn to_bytes(root: &Compound) -> NbtResult<Vec<u8>> {
    encode(root, &EncodeOptions::default())
}
