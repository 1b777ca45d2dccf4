//! # btc_wallet
//!
//! Bitcoin-style wallet core: secp256k1 key pairs and Base58Check P2PKH
//! addresses.
//!
//! ## Architecture
//!
//! - `bytes`: Byte-array helpers
//! - `crypto`: Key generation, hashing and address derivation
//! - `encoding`: Base58 / Base58Check codecs
//! - `wallet`: A key pair owned for its whole lifetime
//! - `error`: The shared error type

pub mod bytes;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod wallet;

pub use crypto::{derive_address, Address, Keypair, PrivateKey};
pub use error::{Error, Result};
pub use wallet::Wallet;
