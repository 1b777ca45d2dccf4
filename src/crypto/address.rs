//! Bitcoin P2PKH address derivation and parsing.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use super::hash::{short_hash, CHECKSUM_LEN, SHORT_HASH_LEN};
use crate::bytes::concat;
use crate::encoding::base58;
use crate::error::{Error, Result};

/// Version byte prepended to the short hash (mainnet P2PKH).
pub const ADDRESS_VERSION: u8 = 0x00;

/// Length of `version || short_hash`.
pub const VERSIONED_PAYLOAD_LEN: usize = 1 + SHORT_HASH_LEN;

/// Length of `version || short_hash || checksum`.
pub const ADDRESS_BYTES_LEN: usize = VERSIONED_PAYLOAD_LEN + CHECKSUM_LEN;

/// A Base58Check encoded address.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
    short_hash: [u8; SHORT_HASH_LEN],
    encoded: String,
}

impl Address {
    /// Derives the address of a serialized public key.
    pub fn from_public_key(public_key: &[u8]) -> Result<Self> {
        Ok(Self::from_short_hash(short_hash(public_key)?))
    }

    /// Builds the address for an already computed short hash.
    pub fn from_short_hash(short_hash: [u8; SHORT_HASH_LEN]) -> Self {
        let payload = concat(&[&[ADDRESS_VERSION][..], &short_hash[..]]);
        let encoded = base58::encode_check(&payload);
        trace!(address = %encoded, "Derived address");
        Self {
            short_hash,
            encoded,
        }
    }

    /// Returns the 20-byte short hash embedded in the address.
    #[inline]
    pub const fn short_hash(&self) -> &[u8; SHORT_HASH_LEN] {
        &self.short_hash
    }

    /// Returns the short hash as a lowercase hex string.
    pub fn short_hash_hex(&self) -> String {
        hex::encode(self.short_hash)
    }

    /// Returns `version || short_hash`.
    pub fn versioned_payload(&self) -> [u8; VERSIONED_PAYLOAD_LEN] {
        let mut payload = [0u8; VERSIONED_PAYLOAD_LEN];
        payload[0] = ADDRESS_VERSION;
        payload[1..].copy_from_slice(&self.short_hash);
        payload
    }

    /// Returns the Base58Check text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    pub fn into_string(self) -> String {
        self.encoded
    }
}

/// Derives the Base58Check address string of a serialized public key.
///
/// Pure function of its input. Fails only for an empty public key.
pub fn derive_address(public_key: &[u8]) -> Result<String> {
    Address::from_public_key(public_key).map(Address::into_string)
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let payload = base58::decode_check(s)?;

        let decoded_len = payload.len() + CHECKSUM_LEN;
        if decoded_len != ADDRESS_BYTES_LEN {
            return Err(Error::InvalidAddress(format!(
                "expected {} bytes, got {}",
                ADDRESS_BYTES_LEN, decoded_len
            )));
        }
        if payload[0] != ADDRESS_VERSION {
            return Err(Error::InvalidAddress(format!(
                "unsupported version byte 0x{:02x}",
                payload[0]
            )));
        }

        let mut short_hash = [0u8; SHORT_HASH_LEN];
        short_hash.copy_from_slice(&payload[1..]);
        Ok(Self {
            short_hash,
            encoded: s.to_string(),
        })
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.encoded)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}
