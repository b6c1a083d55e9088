//! Bounds-checked primitive reads over a borrowed buffer.

use std::marker::PhantomData;

use byteorder::ByteOrder;

use super::mutf8;
use crate::error::ParseError;

/// Cursor over a byte slice with the byte order fixed by `B`.
///
/// Every read checks the remaining length first and reports
/// [`ParseError::UnexpectedEof`] instead of panicking.
pub struct Reader<'a, B> {
    buf: &'a [u8],
    pos: usize,
    _order: PhantomData<B>,
}

impl<'a, B: ByteOrder> Reader<'a, B> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            _order: PhantomData,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Takes the next `n` bytes.
    pub fn read_bytes(
        &mut self,
        n: usize,
        context: &'static str,
    ) -> Result<&'a [u8], ParseError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(ParseError::UnexpectedEof {
                context,
                offset: self.pos,
                needed: n,
                remaining,
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..self.pos])
    }

    pub fn read_u8(&mut self) -> Result<u8, ParseError> {
        Ok(self.read_bytes(1, "u8")?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8, ParseError> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16, ParseError> {
        Ok(B::read_u16(self.read_bytes(2, "u16")?))
    }

    pub fn read_i16(&mut self) -> Result<i16, ParseError> {
        Ok(B::read_i16(self.read_bytes(2, "i16")?))
    }

    pub fn read_i32(&mut self) -> Result<i32, ParseError> {
        Ok(B::read_i32(self.read_bytes(4, "i32")?))
    }

    pub fn read_i64(&mut self) -> Result<i64, ParseError> {
        Ok(B::read_i64(self.read_bytes(8, "i64")?))
    }

    /// Reads the raw bit pattern, so NaN payloads survive.
    pub fn read_f32(&mut self) -> Result<f32, ParseError> {
        Ok(f32::from_bits(B::read_u32(self.read_bytes(4, "f32")?)))
    }

    pub fn read_f64(&mut self) -> Result<f64, ParseError> {
        Ok(f64::from_bits(B::read_u64(self.read_bytes(8, "f64")?)))
    }

    /// Reads a u16 length prefix followed by Modified UTF-8 bytes.
    pub fn read_string(&mut self) -> Result<String, ParseError> {
        let len = self.read_u16()? as usize;
        let offset = self.pos;
        let bytes = self.read_bytes(len, "string")?;
        match mutf8::decode(bytes) {
            Ok(s) => Ok(s.into_owned()),
            Err(e) => Err(ParseError::InvalidString {
                reason: e.to_string(),
                offset,
            }),
        }
    }

    pub fn read_i8_array(
        &mut self,
        count: usize,
    ) -> Result<Vec<i8>, ParseError> {
        let raw = self.read_bytes(count, "byte array")?;
        Ok(raw.iter().map(|&b| b as i8).collect())
    }

    pub fn read_i32_array(
        &mut self,
        count: usize,
    ) -> Result<Vec<i32>, ParseError> {
        let raw = self.read_bytes(count.saturating_mul(4), "int array")?;
        let mut out = vec![0; count];
        B::read_i32_into(raw, &mut out);
        Ok(out)
    }

    pub fn read_i64_array(
        &mut self,
        count: usize,
    ) -> Result<Vec<i64>, ParseError> {
        let raw = self.read_bytes(count.saturating_mul(8), "long array")?;
        let mut out = vec![0; count];
        B::read_i64_into(raw, &mut out);
        Ok(out)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use byteorder::{BigEndian, LittleEndian};

    use super::*;

    #[test]
    fn test_reads_big_endian() {
        let data = [0x12, 0x34, 0x00, 0x00, 0x00, 0x2A];
        let mut r = Reader::<BigEndian>::new(&data);
        assert_eq!(r.read_i16().unwrap(), 0x1234);
        assert_eq!(r.read_i32().unwrap(), 42);
        assert!(r.is_empty());
    }

    #[test]
    fn test_reads_little_endian() {
        let data = [0x34, 0x12, 0x2A, 0x00, 0x00, 0x00];
        let mut r = Reader::<LittleEndian>::new(&data);
        assert_eq!(r.read_i16().unwrap(), 0x1234);
        assert_eq!(r.read_i32().unwrap(), 42);
    }

    #[test]
    fn test_eof_reports_position_and_counts() {
        let data = [0x00, 0x01, 0x02];
        let mut r = Reader::<BigEndian>::new(&data);
        r.read_u8().unwrap();
        assert_eq!(
            r.read_i32(),
            Err(ParseError::UnexpectedEof {
                context: "i32",
                offset: 1,
                needed: 4,
                remaining: 2,
            })
        );
        // A failed read does not advance.
        assert_eq!(r.position(), 1);
    }

    #[test]
    fn test_nan_bits_are_kept() {
        let bits = 0x7FC0_1234u32;
        let data = bits.to_be_bytes();
        let mut r = Reader::<BigEndian>::new(&data);
        assert_eq!(r.read_f32().unwrap().to_bits(), bits);
    }

    #[test]
    fn test_read_string() {
        let data = [0x00, 0x05, b'h', b'e', b'l', b'l', b'o'];
        let mut r = Reader::<BigEndian>::new(&data);
        assert_eq!(r.read_string().unwrap(), "hello");
    }

    #[test]
    fn test_read_string_truncated() {
        let data = [0x00, 0x05, b'h', b'i'];
        let mut r = Reader::<BigEndian>::new(&data);
        assert!(matches!(
            r.read_string(),
            Err(ParseError::UnexpectedEof {
                context: "string",
                needed: 5,
                remaining: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_read_string_ill_formed() {
        let data = [0x00, 0x01, 0xFF];
        let mut r = Reader::<BigEndian>::new(&data);
        assert!(matches!(
            r.read_string(),
            Err(ParseError::InvalidString { offset: 2, .. })
        ));
    }

    #[test]
    fn test_read_arrays() {
        let data = [0, 0, 0, 1, 0xFF, 0xFF, 0xFF, 0xFF];
        let mut r = Reader::<BigEndian>::new(&data);
        assert_eq!(r.read_i32_array(2).unwrap(), vec![1, -1]);

        let data = [0x80, 0x7F];
        let mut r = Reader::<BigEndian>::new(&data);
        assert_eq!(r.read_i8_array(2).unwrap(), vec![-128, 127]);
    }
}
