use serde::{Deserialize, Serialize};

use crate::tag::TagKind;

/// Default ceiling on the number of tags in one decoded document.
pub const DEFAULT_MAX_NODES: usize = 1 << 20;
/// Default ceiling on list/compound nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;
/// Default ceiling on the size of inflated input (64 MiB).
pub const DEFAULT_MAX_DECOMPRESSED_BYTES: usize = 64 * 1024 * 1024;

/// Byte order of every multi-byte numeric field in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    #[default]
    Big,
    Little,
}

/// Compression applied to encoded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    None,
    Gzip,
    Zlib,
}

/// Per-call decode configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub endian: Endian,
    /// Network framing: one unnamed root without a kind byte.
    pub network: bool,
    /// Kind of the network root, known out-of-band.
    pub network_root_kind: TagKind,
    /// Node-count ceiling for the whole document.
    pub max_nodes: usize,
    /// Nesting ceiling; `None` disables the check.
    pub max_depth: Option<usize>,
    /// Try gzip/zlib before parsing.
    pub decompress: bool,
    pub max_decompressed_bytes: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            endian: Endian::Big,
            network: false,
            network_root_kind: TagKind::Compound,
            max_nodes: DEFAULT_MAX_NODES,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            decompress: true,
            max_decompressed_bytes: DEFAULT_MAX_DECOMPRESSED_BYTES,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endian(
        mut self,
        endian: Endian,
    ) -> Self {
        self.endian = endian;
        self
    }

    pub fn network(
        mut self,
        network: bool,
    ) -> Self {
        self.network = network;
        self
    }

    pub fn network_root_kind(
        mut self,
        kind: TagKind,
    ) -> Self {
        self.network_root_kind = kind;
        self
    }

    pub fn max_nodes(
        mut self,
        max_nodes: usize,
    ) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn max_depth(
        mut self,
        max_depth: Option<usize>,
    ) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn decompress(
        mut self,
        decompress: bool,
    ) -> Self {
        self.decompress = decompress;
        self
    }

    pub fn max_decompressed_bytes(
        mut self,
        max: usize,
    ) -> Self {
        self.max_decompressed_bytes = max;
        self
    }
}

/// Per-call encode configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    pub endian: Endian,
    pub network: bool,
    /// Validate the whole tree before writing anything.
    pub validate: bool,
    /// Write an End byte after the last root entry.
    pub terminate_document: bool,
    pub compression: Compression,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            endian: Endian::Big,
            network: false,
            validate: true,
            terminate_document: false,
            compression: Compression::None,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn endian(
        mut self,
        endian: Endian,
    ) -> Self {
        self.endian = endian;
        self
    }

    pub fn network(
        mut self,
        network: bool,
    ) -> Self {
        self.network = network;
        self
    }

    pub fn validate(
        mut self,
        validate: bool,
    ) -> Self {
        self.validate = validate;
        self
    }

    pub fn terminate_document(
        mut self,
        terminate: bool,
    ) -> Self {
        self.terminate_document = terminate;
        self
    }

    pub fn compression(
        mut self,
        compression: Compression,
    ) -> Self {
        self.compression = compression;
        self
    }
}
