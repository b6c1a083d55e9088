//! Primitive writes into a growable buffer.

use std::marker::PhantomData;

use byteorder::ByteOrder;

use super::mutf8;
use crate::{
    error::ValidationError,
    tag::TagKind,
    validate::{MAX_SEQUENCE_LEN, MAX_STRING_LEN},
};

pub struct Writer<B> {
    buf: Vec<u8>,
    _order: PhantomData<B>,
}

impl<B: ByteOrder> Writer<B> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(
        &mut self,
        v: u8,
    ) {
        self.buf.push(v);
    }

    pub fn write_i8(
        &mut self,
        v: i8,
    ) {
        self.buf.push(v as u8);
    }

    pub fn write_u16(
        &mut self,
        v: u16,
    ) {
        let mut b = [0; 2];
        B::write_u16(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_i16(
        &mut self,
        v: i16,
    ) {
        let mut b = [0; 2];
        B::write_i16(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_i32(
        &mut self,
        v: i32,
    ) {
        let mut b = [0; 4];
        B::write_i32(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_i64(
        &mut self,
        v: i64,
    ) {
        let mut b = [0; 8];
        B::write_i64(&mut b, v);
        self.buf.extend_from_slice(&b);
    }

    pub fn write_f32(
        &mut self,
        v: f32,
    ) {
        let mut b = [0; 4];
        B::write_u32(&mut b, v.to_bits());
        self.buf.extend_from_slice(&b);
    }

    pub fn write_f64(
        &mut self,
        v: f64,
    ) {
        let mut b = [0; 8];
        B::write_u64(&mut b, v.to_bits());
        self.buf.extend_from_slice(&b);
    }

    /// Writes the signed 32-bit count that precedes arrays and lists.
    pub fn write_len(
        &mut self,
        kind: TagKind,
        len: usize,
    ) -> Result<(), ValidationError> {
        if len > MAX_SEQUENCE_LEN {
            return Err(ValidationError::LengthOverflow { kind, len });
        }
        self.write_i32(len as i32);
        Ok(())
    }

    /// Writes a u16 length prefix and the Modified UTF-8 bytes of `s`.
    pub fn write_string(
        &mut self,
        s: &str,
    ) -> Result<(), ValidationError> {
        let bytes = mutf8::encode(s);
        if bytes.len() > MAX_STRING_LEN {
            return Err(ValidationError::StringTooLong {
                len: bytes.len(),
                max: MAX_STRING_LEN,
            });
        }
        self.write_u16(bytes.len() as u16);
        self.buf.extend_from_slice(&bytes);
        Ok(())
    }

    pub fn write_i8_array(
        &mut self,
        v: &[i8],
    ) -> Result<(), ValidationError> {
        self.write_len(TagKind::ByteArray, v.len())?;
        self.buf.extend(v.iter().map(|&b| b as u8));
        Ok(())
    }

    pub fn write_i32_array(
        &mut self,
        v: &[i32],
    ) -> Result<(), ValidationError> {
        self.write_len(TagKind::IntArray, v.len())?;
        v.iter().for_each(|&x| self.write_i32(x));
        Ok(())
    }

    pub fn write_i64_array(
        &mut self,
        v: &[i64],
    ) -> Result<(), ValidationError> {
        self.write_len(TagKind::LongArray, v.len())?;
        v.iter().for_each(|&x| self.write_i64(x));
        Ok(())
    }
}

impl<B: ByteOrder> Default for Writer<B> {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
