//! Text encodings for binary payloads.

pub mod base58;
