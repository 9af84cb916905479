//! Keyed alphabetic substitution cipher
//!
//! # Properties
//!
//! - Determinism: same alphabet and key always produce the same mapping
//! - Case preservation: output case follows the input character at the same
//!   position, for both directions
//! - Pass-through: characters outside the alphabet are copied unchanged

use std::collections::HashMap;

use super::error::CipherError;

/// Default alphabet: the 26 uppercase Latin letters.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default shift used when a caller enables the cipher without a key.
pub const DEFAULT_KEY: i64 = 3;

/// Explicit cipher configuration.
///
/// Built into a [`Cipher`] with [`CipherConfig::build`]; nothing in the
/// workspace reads alphabet or key from shared static state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherConfig {
    /// Shift applied on encryption. Any integer; normalized modulo the
    /// alphabet length.
    pub key: i64,
    /// Ordered alphabet of distinct characters.
    pub alphabet: String,
}

impl CipherConfig {
    /// Configuration with the given key and [`DEFAULT_ALPHABET`].
    pub fn new(key: i64) -> Self {
        Self { key, alphabet: DEFAULT_ALPHABET.to_string() }
    }

    /// Validate the alphabet and build the cipher.
    pub fn build(&self) -> Result<Cipher, CipherError> {
        Cipher::new(self.key, &self.alphabet)
    }
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}

/// Keyed substitution over a fixed alphabet.
///
/// Characters are matched by their uppercase form. The alphabet is stored in
/// both case renderings so that the output character can follow the case of
/// the input character rather than the case of the alphabet entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cipher {
    /// Uppercase rendering of the alphabet
    upper: Vec<char>,
    /// Lowercase rendering of the alphabet
    lower: Vec<char>,
    /// Uppercase character -> position in the alphabet
    positions: HashMap<char, usize>,
    /// Encryption shift, in `0..len`
    shift: usize,
}

impl Cipher {
    /// Create a cipher over `alphabet` with the given key.
    ///
    /// # Errors
    ///
    /// - `EmptyAlphabet`: `alphabet` is empty
    /// - `DuplicateCharacter`: two entries share an uppercase form
    /// - `UnsupportedCharacter`: an entry has no reversible single-character
    ///   case mapping (e.g. `ß`)
    /// - `MixedCasing`: the alphabet mixes letters with caseless characters
    ///   such as digits
    pub fn new(key: i64, alphabet: &str) -> Result<Self, CipherError> {
        let Some(first) = alphabet.chars().next() else {
            return Err(CipherError::EmptyAlphabet);
        };
        let cased = is_cased(first);

        let mut upper = Vec::new();
        let mut lower = Vec::new();

        for ch in alphabet.chars() {
            let (Some(up), Some(low)) = (to_upper(ch), to_lower(ch)) else {
                return Err(CipherError::UnsupportedCharacter { ch });
            };
            if to_upper(low) != Some(up) {
                return Err(CipherError::UnsupportedCharacter { ch });
            }
            if is_cased(ch) != cased {
                return Err(CipherError::MixedCasing { ch });
            }
            if upper.contains(&up) {
                return Err(CipherError::DuplicateCharacter { ch });
            }
            upper.push(up);
            lower.push(low);
        }

        Ok(Self::from_tables(key, upper, lower))
    }

    /// Cipher over [`DEFAULT_ALPHABET`].
    pub fn with_default_alphabet(key: i64) -> Self {
        let upper: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        let lower = upper.iter().map(char::to_ascii_lowercase).collect();
        Self::from_tables(key, upper, lower)
    }

    /// Build from validated case tables of equal, non-zero length.
    fn from_tables(key: i64, upper: Vec<char>, lower: Vec<char>) -> Self {
        let positions = upper.iter().enumerate().map(|(index, &ch)| (ch, index)).collect();
        let shift = key.rem_euclid(upper.len() as i64) as usize;
        Self { upper, lower, positions, shift }
    }

    /// Encrypt `cleartext`.
    pub fn encrypt(&self, cleartext: &str) -> String {
        self.substitute(cleartext, self.shift)
    }

    /// Decrypt `ciphertext`. Exact inverse of [`Cipher::encrypt`].
    pub fn decrypt(&self, ciphertext: &str) -> String {
        let len = self.upper.len();
        self.substitute(ciphertext, (len - self.shift) % len)
    }

    /// Normalized key, smaller than the alphabet length.
    pub fn key(&self) -> usize {
        self.shift
    }

    /// Alphabet in its uppercase rendering.
    pub fn alphabet(&self) -> String {
        self.upper.iter().collect()
    }

    fn substitute(&self, text: &str, shift: usize) -> String {
        let len = self.upper.len();
        text.chars()
            .map(|ch| {
                let Some(index) = to_upper(ch).and_then(|up| self.positions.get(&up).copied())
                else {
                    return ch;
                };
                // Characters that only fold onto the alphabet (e.g. 'ſ' -> 'S') are not in it
                if ch != self.upper[index] && ch != self.lower[index] {
                    return ch;
                }
                let target = (index + shift) % len;
                if ch == self.upper[index] { self.upper[target] } else { self.lower[target] }
            })
            .collect()
    }
}

/// Uppercase mapping, if it is exactly one character.
fn to_upper(ch: char) -> Option<char> {
    single(ch.to_uppercase())
}

/// Lowercase mapping, if it is exactly one character.
fn to_lower(ch: char) -> Option<char> {
    single(ch.to_lowercase())
}

/// Letters have distinct upper and lower forms; digits and punctuation do not.
fn is_cased(ch: char) -> bool {
    to_upper(ch) != to_lower(ch)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    mapped.next().is_none().then_some(first)
}
