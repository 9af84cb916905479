//! Error types for cipher construction

use thiserror::Error;

/// Errors from building a [`Cipher`](crate::Cipher).
///
/// Every variant describes malformed constructor input; none of them can
/// occur once a cipher exists, so encryption and decryption are infallible.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The alphabet contains no characters
    #[error("cipher alphabet is empty")]
    EmptyAlphabet,

    /// The alphabet lists the same character twice (compared after
    /// uppercasing)
    #[error("duplicate character {ch:?} in cipher alphabet")]
    DuplicateCharacter {
        /// The repeated character
        ch: char,
    },

    /// The character has no single-character case mapping that maps back to
    /// itself, so it cannot survive a round trip
    #[error("character {ch:?} has no reversible case mapping")]
    UnsupportedCharacter {
        /// The offending character
        ch: char,
    },

    /// The alphabet mixes letters with caseless characters, so a letter
    /// shifted onto a digit could not recover its case
    #[error("character {ch:?} differs in casing from the rest of the cipher alphabet")]
    MixedCasing {
        /// First character whose casing differs from the alphabet's first
        ch: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CipherError::DuplicateCharacter { ch: 'A' };
        assert_eq!(err.to_string(), "duplicate character 'A' in cipher alphabet");

        assert_eq!(CipherError::EmptyAlphabet.to_string(), "cipher alphabet is empty");
        assert_eq!(
            CipherError::MixedCasing { ch: '1' }.to_string(),
            "character '1' differs in casing from the rest of the cipher alphabet"
        );
    }
}
