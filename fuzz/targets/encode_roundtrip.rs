#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nbtkit::{decode, encode, Compound, DecodeOptions, EncodeOptions, Tag};

/// Flat documents built from arbitrary scalars and arrays.
#[derive(Debug, Arbitrary)]
enum Leaf {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(u32),
    Double(u64),
    Bytes(Vec<i8>),
    Text(String),
    Ints(Vec<i32>),
    Longs(Vec<i64>),
}

impl From<Leaf> for Tag {
    fn from(leaf: Leaf) -> Self {
        match leaf {
            Leaf::Byte(v) => Tag::Byte(v),
            Leaf::Short(v) => Tag::Short(v),
            Leaf::Int(v) => Tag::Int(v),
            Leaf::Long(v) => Tag::Long(v),
            Leaf::Float(bits) => Tag::Float(f32::from_bits(bits)),
            Leaf::Double(bits) => Tag::Double(f64::from_bits(bits)),
            Leaf::Bytes(v) => Tag::ByteArray(v),
            Leaf::Text(s) => Tag::String(s),
            Leaf::Ints(v) => Tag::IntArray(v),
            Leaf::Longs(v) => Tag::LongArray(v),
        }
    }
}

fuzz_target!(|entries: Vec<(String, Leaf)>| {
    let inner: Compound = entries.into_iter().collect();
    let doc: Compound = std::iter::once(("", inner)).collect();

    let bytes = encode(&doc, &EncodeOptions::default()).expect("flat document must encode");
    let decoded = decode(&bytes, &DecodeOptions::default()).expect("encoded document must decode");
    assert_eq!(doc, decoded);
});
