//! Fuzz target for CBOR message decoding
//!
//! # Strategy
//!
//! - Random bytes: completely arbitrary CBOR data
//! - Huge lengths: CBOR claiming massive string/array lengths
//! - Deeply nested: arrays nested to arbitrary depth
//!
//! # Invariants
//!
//! - Malformed input returns an error (NEVER panic)
//! - Huge claimed lengths are rejected, not allocated
//! - Anything that decodes re-encodes and decodes to the same message

#![no_main]

use arbitrary::Arbitrary;
use clack_core::codec;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum CborAttack {
    RandomBytes { bytes: Vec<u8> },
    HugeLength { claimed_len_exponent: u8, major: u8 },
    DeeplyNested { depth: u8 },
}

fuzz_target!(|attack: CborAttack| {
    let bytes = match attack {
        CborAttack::RandomBytes { bytes } => bytes,
        CborAttack::HugeLength { claimed_len_exponent, major } => {
            let exponent = u32::from(claimed_len_exponent % 32);
            let claimed_length = 1u32.checked_shl(exponent).unwrap_or(u32::MAX);
            // byte string, text string, array, map
            let header = [0x5A, 0x7A, 0x9A, 0xBA][usize::from(major % 4)];

            let mut bytes = vec![header];
            bytes.extend_from_slice(&claimed_length.to_be_bytes());
            bytes.extend(vec![0x61; (claimed_length as usize).min(10)]);
            bytes
        }
        CborAttack::DeeplyNested { depth } => {
            let mut bytes = vec![0x81; usize::from(depth)];
            bytes.push(0x01);
            bytes
        }
    };

    if let Ok(message) = codec::decode(&bytes) {
        let encoded = codec::encode(&message).expect("decoded messages always encode");
        assert_eq!(codec::decode(&encoded).ok(), Some(message));
    }
});
