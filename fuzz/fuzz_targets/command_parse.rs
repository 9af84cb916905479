//! Fuzz target for the command grammar
//!
//! # Invariants
//!
//! - Every line produces exactly one message (NEVER panic)
//! - Text payloads equal the trimmed line
//! - File payloads are unloaded and name a destination without separators
//! - The parsed message survives a codec round trip unchanged

#![no_main]

use clack_core::{FixedEnv, Payload, codec, command};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|line: &str| {
    let message = command::parse_at(&FixedEnv::default(), "fuzz", line);

    match message.payload() {
        Payload::Text(text) => assert_eq!(text, line.trim()),
        Payload::File(file) => {
            assert!(!file.is_loaded());
            assert!(!file.destination().as_str().contains(['/', '\\']));
        }
        _ => {}
    }

    let bytes = codec::encode(&message).expect("parsed messages always encode");
    assert_eq!(codec::decode(&bytes).expect("encoded messages always decode"), message);
});
