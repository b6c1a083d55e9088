//! Document decoder.
//!
//! Input is inflated first when it looks compressed, then parsed under the
//! byte order and framing chosen in [`DecodeOptions`]. Every tag that gets
//! materialised counts towards `max_nodes`, and each list or compound level
//! counts towards `max_depth`. Declared lengths are checked against the
//! remaining input before anything is allocated.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use tracing::{debug, error, trace, warn};

use super::{compression, options::DecodeOptions, reader::Reader, Endian};
use crate::{
    error::{LimitKind, NbtError, NbtResult, ParseError, ValidationError},
    tag::{Compound, List, Tag, TagKind},
};

/// Decodes one document into its root compound.
///
/// With network framing the single root payload is bound under the empty
/// name. Nothing is returned on failure; a partially built tree is dropped.
pub fn decode(
    bytes: &[u8],
    options: &DecodeOptions,
) -> NbtResult<Compound> {
    let inflated = if options.decompress {
        compression::decompress(bytes, options.max_decompressed_bytes)?
    } else {
        None
    };
    let data = inflated.as_deref().unwrap_or(bytes);

    let result = match options.endian {
        Endian::Big => Parser::<BigEndian>::new(data, options).parse_document(),
        Endian::Little => Parser::<LittleEndian>::new(data, options).parse_document(),
    };
    if let Err(e) = &result {
        error!(error = %e, input_len = data.len(), "Failed to decode document");
    }
    result
}

struct Parser<'a, 'o, B> {
    reader: Reader<'a, B>,
    options: &'o DecodeOptions,
    nodes: usize,
}

impl<'a, 'o, B: ByteOrder> Parser<'a, 'o, B> {
    fn new(
        data: &'a [u8],
        options: &'o DecodeOptions,
    ) -> Self {
        Self {
            reader: Reader::new(data),
            options,
            nodes: 0,
        }
    }

    fn parse_document(mut self) -> NbtResult<Compound> {
        let root = if self.options.network {
            let kind = self.options.network_root_kind;
            if kind == TagKind::End {
                return Err(ValidationError::InvalidRootKind { kind }.into());
            }
            self.count_node()?;
            let value = self.read_payload(kind, 0)?;
            let mut root = Compound::with_capacity(1);
            root.insert("", value);
            root
        } else {
            let mut root = Compound::new();
            // A clean end of input also terminates the document.
            while !self.reader.is_empty() {
                let Some(kind) = self.read_kind()? else {
                    break;
                };
                let name = self.reader.read_string()?;
                self.count_node()?;
                let value = self.read_payload(kind, 0)?;
                trace!(name = %name, %kind, "Decoded root entry");
                insert_named(&mut root, name, value);
            }
            root
        };

        let trailing = self.reader.remaining();
        if trailing > 0 {
            debug!(trailing, "Ignoring bytes after end of document");
        }
        debug!(
            entries = root.len(),
            nodes = self.nodes,
            bytes = self.reader.position(),
            "Decoded document"
        );
        Ok(root)
    }

    /// Reads a kind byte. `None` means End.
    fn read_kind(&mut self) -> NbtResult<Option<TagKind>> {
        let offset = self.reader.position();
        let id = self.reader.read_u8()?;
        match TagKind::from_id(id) {
            Some(TagKind::End) => Ok(None),
            Some(kind) => Ok(Some(kind)),
            None => Err(ParseError::InvalidTag { tag: id, offset }.into()),
        }
    }

    fn read_payload(
        &mut self,
        kind: TagKind,
        depth: usize,
    ) -> NbtResult<Tag> {
        let tag = match kind {
            TagKind::End => {
                return Err(ParseError::InvalidTag {
                    tag: kind.id(),
                    offset: self.reader.position(),
                }
                .into())
            }
            TagKind::Byte => Tag::Byte(self.reader.read_i8()?),
            TagKind::Short => Tag::Short(self.reader.read_i16()?),
            TagKind::Int => Tag::Int(self.reader.read_i32()?),
            TagKind::Long => Tag::Long(self.reader.read_i64()?),
            TagKind::Float => Tag::Float(self.reader.read_f32()?),
            TagKind::Double => Tag::Double(self.reader.read_f64()?),
            TagKind::ByteArray => {
                let count = self.read_count(kind, 1)?;
                Tag::ByteArray(self.reader.read_i8_array(count)?)
            }
            TagKind::IntArray => {
                let count = self.read_count(kind, 4)?;
                Tag::IntArray(self.reader.read_i32_array(count)?)
            }
            TagKind::LongArray => {
                let count = self.read_count(kind, 8)?;
                Tag::LongArray(self.reader.read_i64_array(count)?)
            }
            TagKind::String => Tag::String(self.reader.read_string()?),
            TagKind::List => Tag::List(self.read_list(depth + 1)?),
            TagKind::Compound => Tag::Compound(self.read_compound(depth + 1)?),
        };
        Ok(tag)
    }

    /// Reads a signed count and checks that `count * elem_len` bytes remain.
    fn read_count(
        &mut self,
        kind: TagKind,
        elem_len: usize,
    ) -> NbtResult<usize> {
        let offset = self.reader.position();
        let length = self.reader.read_i32()?;
        let remaining = self.reader.remaining();
        if length < 0 || (length as usize).saturating_mul(elem_len) > remaining {
            return Err(ParseError::InvalidLength {
                kind,
                length,
                remaining,
                offset,
            }
            .into());
        }
        Ok(length as usize)
    }

    fn read_list(
        &mut self,
        depth: usize,
    ) -> NbtResult<List> {
        self.check_depth(depth)?;

        let offset = self.reader.position();
        let id = self.reader.read_u8()?;
        let kind = TagKind::from_id(id).ok_or(ParseError::InvalidTag { tag: id, offset })?;
        let count_offset = self.reader.position();

        if kind == TagKind::End {
            let count = self.reader.read_i32()?;
            if count != 0 {
                return Err(ParseError::InvalidListKind {
                    kind,
                    count,
                    offset: count_offset,
                }
                .into());
            }
            return Ok(List::empty());
        }

        let count = self.read_count(TagKind::List, kind.min_payload_len())?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            self.count_node()?;
            items.push(self.read_payload(kind, depth)?);
        }
        Ok(List::from_tags_unchecked(kind, items))
    }

    fn read_compound(
        &mut self,
        depth: usize,
    ) -> NbtResult<Compound> {
        self.check_depth(depth)?;

        let mut compound = Compound::new();
        while let Some(kind) = self.read_kind()? {
            let name = self.reader.read_string()?;
            self.count_node()?;
            let value = self.read_payload(kind, depth)?;
            insert_named(&mut compound, name, value);
        }
        Ok(compound)
    }

    fn count_node(&mut self) -> NbtResult<()> {
        self.nodes += 1;
        if self.nodes > self.options.max_nodes {
            return Err(NbtError::too_large(
                LimitKind::Nodes,
                self.options.max_nodes,
                self.nodes,
            ));
        }
        Ok(())
    }

    fn check_depth(
        &self,
        depth: usize,
    ) -> NbtResult<()> {
        match self.options.max_depth {
            Some(max) if depth > max => Err(NbtError::too_large(LimitKind::Depth, max, depth)),
            _ => Ok(()),
        }
    }
}

/// Later duplicates win and keep the first occurrence's position.
fn insert_named(
    compound: &mut Compound,
    name: String,
    value: Tag,
) {
    if compound.contains_key(&name) {
        warn!(name = %name, "Duplicate compound key, keeping the later value");
    }
    compound.insert(name, value);
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
