//! A wallet owning exactly one keypair.

use rand::{CryptoRng, RngCore};
use tracing::info;

use crate::crypto::{Address, Keypair, PrivateKey, PUBLIC_KEY_LEN};
use crate::error::Result;

/// Owns a single keypair for its whole lifetime.
///
/// There is no way to replace the keypair after construction. The address is
/// recomputed from the public key on every call rather than stored.
#[derive(Debug)]
pub struct Wallet {
    keypair: Keypair,
}

impl Wallet {
    /// Creates a wallet with a freshly generated keypair.
    ///
    /// Fails with [`crate::Error::KeyGeneration`] if no key could be produced;
    /// a wallet never exists without keys.
    pub fn new() -> Result<Self> {
        Keypair::generate().map(Self::created)
    }

    /// Creates a wallet whose keypair is drawn from `rng`.
    pub fn with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        Keypair::generate_with(rng).map(Self::created)
    }

    /// Wraps an existing keypair.
    pub fn from_keypair(keypair: Keypair) -> Self {
        Self { keypair }
    }

    fn created(keypair: Keypair) -> Self {
        let wallet = Self::from_keypair(keypair);
        info!(address = %wallet.address(), "Created wallet");
        wallet
    }

    #[inline]
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LEN] {
        self.keypair.public_key()
    }

    #[inline]
    pub fn private_key(&self) -> &PrivateKey {
        self.keypair.private_key()
    }

    #[inline]
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    /// Returns the wallet's address.
    pub fn address(&self) -> Address {
        self.keypair.address()
    }
}
