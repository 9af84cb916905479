//! Fuzz target for the substitution cipher
//!
//! # Strategy
//!
//! - Arbitrary keys, including the i64 extremes
//! - Arbitrary alphabets, most of which are rejected
//! - Arbitrary text, including characters outside the alphabet
//!
//! # Invariants
//!
//! - Construction either succeeds or returns an error (NEVER panic)
//! - Encryption preserves the character count
//! - Decryption inverts encryption for the default alphabet

#![no_main]

use arbitrary::Arbitrary;
use clack_crypto::Cipher;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    key: i64,
    alphabet: Option<String>,
    text: String,
}

fuzz_target!(|input: Input| {
    let default = Cipher::with_default_alphabet(input.key);
    let encrypted = default.encrypt(&input.text);
    assert_eq!(encrypted.chars().count(), input.text.chars().count());
    assert_eq!(default.decrypt(&encrypted), input.text);

    if let Some(alphabet) = input.alphabet {
        if let Ok(cipher) = Cipher::new(input.key, &alphabet) {
            let encrypted = cipher.encrypt(&input.text);
            assert_eq!(encrypted.chars().count(), input.text.chars().count());
            let _ = cipher.decrypt(&encrypted);
        }
    }
});
