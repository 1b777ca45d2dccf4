//! SHA-256 / RIPEMD-160 hashing used by address derivation.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Length of a public key short hash (RIPEMD-160 output).
pub const SHORT_HASH_LEN: usize = 20;

/// Length of a Base58Check checksum.
pub const CHECKSUM_LEN: usize = 4;

/// Single SHA-256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Bitcoin's double SHA-256: SHA256(SHA256(data)).
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD160(SHA256(data)), accepting any input including empty.
#[inline]
pub fn hash160(data: &[u8]) -> [u8; SHORT_HASH_LEN] {
    let hash = Ripemd160::digest(sha256(data));
    let mut result = [0u8; SHORT_HASH_LEN];
    result.copy_from_slice(&hash);
    result
}

/// Short hash of a serialized public key.
///
/// Identical to [`hash160`] but rejects an empty key, which can only come
/// from a caller bug. No other validation is performed.
pub fn short_hash(public_key: &[u8]) -> Result<[u8; SHORT_HASH_LEN]> {
    if public_key.is_empty() {
        return Err(Error::invalid_input("public key is empty"));
    }
    Ok(hash160(public_key))
}

/// First four bytes of SHA256(SHA256(payload)).
#[inline]
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = double_sha256(payload);
    let mut result = [0u8; CHECKSUM_LEN];
    result.copy_from_slice(&hash[..CHECKSUM_LEN]);
    result
}
