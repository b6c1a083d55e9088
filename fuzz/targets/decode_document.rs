#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nbtkit::{decode, encode, DecodeOptions, EncodeOptions, Endian, TagKind};

#[derive(Debug, Arbitrary)]
enum FuzzEndian {
    Big,
    Little,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    data: Vec<u8>,
    endian: FuzzEndian,
    network: bool,
    decompress: bool,
}

fuzz_target!(|input: FuzzInput| {
    let endian = match input.endian {
        FuzzEndian::Big => Endian::Big,
        FuzzEndian::Little => Endian::Little,
    };
    let dec = DecodeOptions::default()
        .endian(endian)
        .network(input.network)
        .network_root_kind(TagKind::Compound)
        .decompress(input.decompress)
        .max_nodes(1 << 16)
        .max_decompressed_bytes(1 << 20);

    // Must never panic; errors are fine.
    let Ok(root) = decode(&input.data, &dec) else {
        return;
    };

    // Anything the decoder accepts has to encode and decode back to itself.
    let enc = EncodeOptions::default().endian(endian).network(input.network);
    let bytes = encode(&root, &enc).expect("decoded tree must encode");
    let again = decode(&bytes, &dec.decompress(false)).expect("re-encoded tree must decode");
    assert_eq!(root, again);
});
