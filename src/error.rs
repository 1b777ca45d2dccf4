//! Error types shared by every stage of the wallet pipeline.

use thiserror::Error;

/// Errors produced while generating keys, hashing, or encoding addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The entropy source or curve rejected key generation. Fatal, never retried.
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Empty or malformed bytes were handed to a hashing or byte helper.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A character outside the base-58 alphabet.
    ///
    /// `position` is the zero-based character index of the offending
    /// character in the input text.
    #[error("Invalid base58 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Well-formed base-58 text whose trailing checksum does not match its payload.
    #[error(
        "Checksum mismatch: expected {}, found {}",
        hex::encode(.expected),
        hex::encode(.found)
    )]
    ChecksumMismatch { expected: [u8; 4], found: [u8; 4] },

    /// Valid Base58Check text that is not a version-0x00, 25-byte address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

impl Error {
    pub fn key_generation<S: Into<String>>(msg: S) -> Self {
        Self::KeyGeneration(msg.into())
    }

    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_mismatch_message() {
        let err = Error::ChecksumMismatch {
            expected: [0xd6, 0x19, 0x67, 0xf6],
            found: [0x00, 0x00, 0x00, 0x01],
        };
        assert_eq!(
            err.to_string(),
            "Checksum mismatch: expected d61967f6, found 00000001"
        );
    }

    #[test]
    fn test_invalid_character_message() {
        let err = Error::InvalidCharacter {
            character: '0',
            position: 3,
        };
        assert_eq!(err.to_string(), "Invalid base58 character '0' at position 3");
    }
}
