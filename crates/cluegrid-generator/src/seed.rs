use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that determines every random choice of a generation run.
///
/// Seeds print as 64 lowercase hex digits and parse back from the same form,
/// so a puzzle can be reproduced from its printed seed.
///
/// # Examples
///
/// ```
/// use cluegrid_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily puzzle");
/// let printed = seed.to_string();
/// assert_eq!(printed.len(), 64);
/// assert_eq!(printed.parse::<PuzzleSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from arbitrary text by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when a seed string is not 64 hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The string does not have 64 characters.
    #[display("seed must have 64 hex digits, got {len}")]
    InvalidLength {
        /// Length of the rejected string, in characters.
        len: usize,
    },
    /// The string contains a character that is not a hex digit.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }

        let mut bytes = [0; 32];
        let mut digits = s.chars().map(|ch| {
            ch.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(ParseSeedError::InvalidDigit { ch })
        });
        for byte in &mut bytes {
            let (Some(high), Some(low)) = (digits.next(), digits.next()) else {
                return Err(ParseSeedError::InvalidLength { len });
            };
            *byte = (high? << 4) | low?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed: PuzzleSeed = HEX.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), HEX);
        assert_eq!(HEX.to_uppercase().parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength { len: 3 })
        );
        let bad = format!("{}g", &HEX[..63]);
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidDigit { ch: 'g' })
        );
    }

    #[test]
    fn test_from_phrase_is_stable() {
        assert_eq!(PuzzleSeed::from_phrase("a"), PuzzleSeed::from_phrase("a"));
        assert_ne!(PuzzleSeed::from_phrase("a"), PuzzleSeed::from_phrase("b"));
        // SHA-256 of the empty string
        assert_eq!(
            PuzzleSeed::from_phrase("").to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }
}
