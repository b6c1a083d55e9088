//! gzip/zlib wrapping of whole documents.
//!
//! On decode the input is sniffed: gzip by its magic bytes, zlib by a valid
//! two-byte header. Inflation is attempted only when one of them matches, and
//! any inflate failure means the buffer is treated as raw NBT. On encode
//! compression is opt-in through [`Compression`].

use std::io::{Read, Write};

use flate2::{
    read::{MultiGzDecoder, ZlibDecoder},
    write::{GzEncoder, ZlibEncoder},
    Compression as Level,
};
use tracing::debug;

use super::Compression;
use crate::error::{LimitKind, NbtError, NbtResult};

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Guesses the wrapping of `data` from its first bytes.
pub fn detect(data: &[u8]) -> Compression {
    if data.starts_with(&GZIP_MAGIC) {
        Compression::Gzip
    } else if is_zlib_header(data) {
        Compression::Zlib
    } else {
        Compression::None
    }
}

/// RFC 1950 header: deflate method, window ≤ 32K, FCHECK divisible by 31.
fn is_zlib_header(data: &[u8]) -> bool {
    match data {
        [cmf, flg, ..] => {
            cmf & 0x0F == 8 && cmf >> 4 <= 7 && (u16::from(*cmf) << 8 | u16::from(*flg)) % 31 == 0
        }
        _ => false,
    }
}

/// Inflates `data` if it looks compressed.
///
/// Returns `Ok(None)` when the input is not compressed or fails to inflate,
/// in which case the caller parses it as-is. Output larger than `max_bytes`
/// is an error rather than a fallback.
pub fn decompress(
    data: &[u8],
    max_bytes: usize,
) -> NbtResult<Option<Vec<u8>>> {
    let format = detect(data);
    let reader: Box<dyn Read + '_> = match format {
        Compression::None => return Ok(None),
        Compression::Gzip => Box::new(MultiGzDecoder::new(data)),
        Compression::Zlib => Box::new(ZlibDecoder::new(data)),
    };

    // One byte past the limit is enough to tell that it was exceeded.
    let limit = (max_bytes as u64).saturating_add(1);
    let mut out = Vec::new();
    if let Err(e) = reader.take(limit).read_to_end(&mut out) {
        debug!(?format, error = %e, "Inflate failed, parsing input as raw");
        return Ok(None);
    }
    if out.len() > max_bytes {
        return Err(NbtError::too_large(
            LimitKind::DecompressedBytes,
            max_bytes,
            out.len(),
        ));
    }

    debug!(
        ?format,
        compressed = data.len(),
        inflated = out.len(),
        "Inflated input"
    );
    Ok(Some(out))
}

/// Wraps an encoded document. [`Compression::None`] returns it unchanged.
pub fn compress(
    data: Vec<u8>,
    format: Compression,
) -> NbtResult<Vec<u8>> {
    let result = match format {
        Compression::None => return Ok(data),
        Compression::Gzip => {
            let mut enc = GzEncoder::new(Vec::new(), Level::default());
            enc.write_all(&data).and_then(|_| enc.finish())
        }
        Compression::Zlib => {
            let mut enc = ZlibEncoder::new(Vec::new(), Level::default());
            enc.write_all(&data).and_then(|_| enc.finish())
        }
    };
    result.map_err(|e| NbtError::Compression {
        format,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<u8> {
        b"\x0a\x00\x00\x08\x00\x01kvalue\x00".repeat(16)
    }

    #[test]
    fn test_detect_raw() {
        assert_eq!(detect(&[0x0A, 0x00, 0x00]), Compression::None);
        assert_eq!(detect(&[]), Compression::None);
        assert_eq!(detect(&[0x1F]), Compression::None);
    }

    #[test]
    fn test_gzip_roundtrip() {
        let packed = compress(sample(), Compression::Gzip).unwrap();
        assert_eq!(detect(&packed), Compression::Gzip);
        assert_eq!(decompress(&packed, 1 << 20).unwrap(), Some(sample()));
    }

    #[test]
    fn test_zlib_roundtrip() {
        let packed = compress(sample(), Compression::Zlib).unwrap();
        assert_eq!(detect(&packed), Compression::Zlib);
        assert_eq!(decompress(&packed, 1 << 20).unwrap(), Some(sample()));
    }

    #[test]
    fn test_none_is_passthrough() {
        assert_eq!(compress(sample(), Compression::None).unwrap(), sample());
        assert_eq!(decompress(&sample(), 1 << 20).unwrap(), None);
    }

    #[test]
    fn test_corrupt_stream_falls_back() {
        let data = [0x1F, 0x8B, 0x00, 0x00, 0x00];
        assert_eq!(decompress(&data, 1 << 20).unwrap(), None);
    }

    #[test]
    fn test_inflated_size_limit() {
        let big = vec![0u8; 10_000];
        let packed = compress(big, Compression::Gzip).unwrap();
        let err = decompress(&packed, 1_000).unwrap_err();
        assert!(matches!(
            err,
            NbtError::DataTooLarge {
                limit: LimitKind::DecompressedBytes,
                max: 1_000,
                ..
            }
        ));
    }
}
