//! Hashing and key operations.
//!
//! This module provides:
//! - Keccak-256 and 4-byte function selectors
//! - Leading zero counting on selector fingerprints
//! - Ethereum address derivation from a private key

mod address;
mod keypair;
mod selector;

pub use address::Address;
pub use keypair::{address_from_secret_key, derive_address, KeyError};
pub use selector::{fingerprint, leading_zero_count, Selector, GOLDEN_ZEROS};

use tiny_keccak::{Hasher, Keccak};

/// Keccak-256 of arbitrary bytes (output 32 bytes).
#[inline]
pub fn keccak256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(input);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}
