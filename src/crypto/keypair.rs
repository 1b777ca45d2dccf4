//! secp256k1 keypair generation.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::hash::hash160;
use super::Address;
use crate::error::{Error, Result};

/// Length of a raw secp256k1 private scalar.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Length of an uncompressed public key (`0x04 || X || Y`).
pub const PUBLIC_KEY_LEN: usize = 65;

/// Opaque secp256k1 private scalar.
///
/// Not `Clone`; the scalar is erased when dropped and never printed.
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Returns a copy of the raw scalar that is wiped when dropped.
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_LEN]> {
        Zeroizing::new(self.0.secret_bytes())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.0.non_secure_erase();
    }
}

/// A secp256k1 keypair: private scalar plus its uncompressed public point.
///
/// Immutable once built, so it can be shared read-only across threads.
#[derive(Debug)]
pub struct Keypair {
    private_key: PrivateKey,
    public_key: [u8; PUBLIC_KEY_LEN],
}

impl Keypair {
    /// Generates a new random keypair from the operating system's CSPRNG.
    pub fn generate() -> Result<Self> {
        Self::generate_with(&mut OsRng)
    }

    /// Generates a new random keypair from the given cryptographic RNG.
    ///
    /// A failing RNG or an out-of-range sample is reported as
    /// [`Error::KeyGeneration`]; nothing is retried.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut scalar = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
        if let Err(e) = rng.try_fill_bytes(&mut scalar[..]) {
            warn!(error = %e, "Entropy source failed during key generation");
            return Err(Error::key_generation(format!("entropy source failed: {}", e)));
        }

        let keypair = Self::from_private_key(&scalar).map_err(|e| {
            warn!(error = %e, "Sampled scalar rejected by secp256k1");
            e
        })?;
        debug!(public_key = %keypair.public_key_hex(), "Generated secp256k1 keypair");
        Ok(keypair)
    }

    /// Rebuilds a keypair from a raw private scalar.
    ///
    /// Fails if the scalar is zero or not below the curve order.
    pub fn from_private_key(secret_bytes: &[u8; PRIVATE_KEY_LEN]) -> Result<Self> {
        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(secret_bytes)
            .map_err(|e| Error::key_generation(format!("invalid private scalar: {}", e)))?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);

        Ok(Self {
            private_key: PrivateKey(secret_key),
            public_key: public_key.serialize_uncompressed(),
        })
    }

    /// Returns the uncompressed public key bytes.
    #[inline]
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public_key
    }

    /// Returns the public key as a lowercase hex string.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key)
    }

    /// Returns the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Derives the address of this keypair.
    pub fn address(&self) -> Address {
        Address::from_short_hash(hash160(&self.public_key))
    }
}
