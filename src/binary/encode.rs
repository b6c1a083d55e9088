//! Document encoder, the exact mirror of [`super::decode`].

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use tracing::debug;

use super::{compression, options::EncodeOptions, writer::Writer, Endian};
use crate::{
    error::{NbtResult, ValidationError},
    tag::{Compound, List, Tag, TagKind, TAG_END},
    validate,
};

/// Encodes `root` as a document.
///
/// Each root entry is written as a named tag. With network framing `root`
/// must hold exactly one entry and only its payload is written.
pub fn encode(
    root: &Compound,
    options: &EncodeOptions,
) -> NbtResult<Vec<u8>> {
    if options.validate {
        validate::validate_compound(root)?;
    }

    let raw = match options.endian {
        Endian::Big => Serializer::<BigEndian>::new(options).write_document(root)?,
        Endian::Little => Serializer::<LittleEndian>::new(options).write_document(root)?,
    };
    debug!(
        bytes = raw.len(),
        entries = root.len(),
        compression = ?options.compression,
        "Encoded document"
    );
    compression::compress(raw, options.compression)
}

/// Initial output buffer size; small documents fit without regrowing.
const INITIAL_CAPACITY: usize = 256;

struct Serializer<'o, B> {
    writer: Writer<B>,
    options: &'o EncodeOptions,
}

impl<'o, B: ByteOrder> Serializer<'o, B> {
    fn new(options: &'o EncodeOptions) -> Self {
        Self {
            writer: Writer::with_capacity(INITIAL_CAPACITY),
            options,
        }
    }

    fn write_document(
        mut self,
        root: &Compound,
    ) -> NbtResult<Vec<u8>> {
        if self.options.network {
            let mut entries = root.values();
            let value = match (entries.next(), entries.next()) {
                (Some(value), None) => value,
                _ => {
                    return Err(ValidationError::NetworkRoot {
                        entries: root.len(),
                    }
                    .into())
                }
            };
            if value.kind() == TagKind::End {
                return Err(ValidationError::InvalidRootKind { kind: TagKind::End }.into());
            }
            self.write_payload(value)?;
        } else {
            for (name, value) in root {
                self.write_named(name, value)?;
            }
            if self.options.terminate_document {
                self.writer.write_u8(TAG_END);
            }
        }
        Ok(self.writer.into_inner())
    }

    fn write_named(
        &mut self,
        name: &str,
        value: &Tag,
    ) -> NbtResult<()> {
        if value.kind() == TagKind::End {
            return Err(ValidationError::EndTagStored.into());
        }
        self.writer.write_u8(value.kind().id());
        self.writer.write_string(name)?;
        self.write_payload(value)
    }

    fn write_payload(
        &mut self,
        tag: &Tag,
    ) -> NbtResult<()> {
        match tag {
            Tag::End => return Err(ValidationError::EndTagStored.into()),
            Tag::Byte(v) => self.writer.write_i8(*v),
            Tag::Short(v) => self.writer.write_i16(*v),
            Tag::Int(v) => self.writer.write_i32(*v),
            Tag::Long(v) => self.writer.write_i64(*v),
            Tag::Float(v) => self.writer.write_f32(*v),
            Tag::Double(v) => self.writer.write_f64(*v),
            Tag::ByteArray(v) => self.writer.write_i8_array(v)?,
            Tag::IntArray(v) => self.writer.write_i32_array(v)?,
            Tag::LongArray(v) => self.writer.write_i64_array(v)?,
            Tag::String(s) => self.writer.write_string(s)?,
            Tag::List(list) => self.write_list(list)?,
            Tag::Compound(compound) => {
                for (name, value) in compound {
                    self.write_named(name, value)?;
                }
                self.writer.write_u8(TAG_END);
            }
        }
        Ok(())
    }

    fn write_list(
        &mut self,
        list: &List,
    ) -> NbtResult<()> {
        let kind = list.element_kind();
        if kind == TagKind::End && !list.is_empty() {
            return Err(ValidationError::EndTagStored.into());
        }
        self.writer.write_u8(kind.id());
        self.writer.write_len(TagKind::List, list.len())?;
        for (index, item) in list.iter().enumerate() {
            // Checked here too: validation may be switched off.
            if item.kind() != kind {
                return Err(ValidationError::HeterogeneousList {
                    index,
                    expected: kind,
                    found: item.kind(),
                }
                .into());
            }
            self.write_payload(item)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
