//! Clack Cryptographic Primitives
//!
//! Keyed alphabetic substitution used to obscure text payloads before they
//! reach the transport. Pure functions with deterministic outputs: the same
//! alphabet, key and input always produce the same output.
//!
//! # Transform
//!
//! ```text
//! input char c
//!        │
//!        ▼
//! uppercase(c) → position i in alphabet (or pass through unchanged)
//!        │
//!        ▼
//! alphabet[(i + key) mod len] → rendered in the case of c
//! ```
//!
//! Decryption applies the same rule with the inverse shift, so
//! `decrypt(encrypt(t)) == t` for any text whose characters are either in the
//! alphabet or passed through.
//!
//! # Security
//!
//! None. A substitution cipher hides payloads from casual inspection only and
//! offers no confidentiality or integrity against an adversary.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;

pub use cipher::{Cipher, CipherConfig, DEFAULT_ALPHABET, DEFAULT_KEY};
pub use error::CipherError;
