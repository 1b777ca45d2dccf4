//! Byte-array helpers.

use crate::error::{Error, Result};

/// Joins byte sequences in argument order into one buffer.
pub fn concat(parts: &[&[u8]]) -> Vec<u8> {
    let len = parts.iter().map(|part| part.len()).sum();
    let mut out = Vec::with_capacity(len);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

/// Fixed-width big-endian encoding of a `u64`.
#[inline]
pub fn u64_to_be_bytes(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Inverse of [`u64_to_be_bytes`]. Requires exactly 8 bytes.
pub fn u64_from_be_bytes(bytes: &[u8]) -> Result<u64> {
    let array: [u8; 8] = bytes.try_into().map_err(|_| {
        Error::invalid_input(format!("expected 8 bytes, got {}", bytes.len()))
    })?;
    Ok(u64::from_be_bytes(array))
}
