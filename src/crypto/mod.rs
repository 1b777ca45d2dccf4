//! Cryptographic operations for Bitcoin key and address generation.
//!
//! This module provides:
//! - Secure random key generation using secp256k1
//! - SHA-256 / RIPEMD-160 short hashes and double-SHA-256 checksums
//! - P2PKH address derivation and parsing

mod address;
pub mod hash;
mod keypair;

pub use address::{
    derive_address, Address, ADDRESS_BYTES_LEN, ADDRESS_VERSION, VERSIONED_PAYLOAD_LEN,
};
pub use hash::{checksum, short_hash, CHECKSUM_LEN, SHORT_HASH_LEN};
pub use keypair::{Keypair, PrivateKey, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN};
