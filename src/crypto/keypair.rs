//! Address derivation from an existing private key.

use secp256k1::{PublicKey, Secp256k1, SecretKey};

use super::{keccak256, Address};

/// Reasons a private key cannot be turned into an address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("private key is not valid hex: {0}")]
    InvalidHex(String),

    #[error("private key must be 32 bytes, got {0}")]
    InvalidLength(usize),

    #[error("private key is not a valid secp256k1 scalar")]
    InvalidScalar,
}

/// Derives the address for a hex private key (with or without 0x).
pub fn derive_address(private_key: &str) -> Result<Address, KeyError> {
    let trimmed = private_key.trim();
    let hex_key = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    let bytes = hex::decode(hex_key).map_err(|e| KeyError::InvalidHex(e.to_string()))?;
    let secret_bytes: [u8; 32] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| KeyError::InvalidLength(bytes.len()))?;

    address_from_secret_key(&secret_bytes)
}

/// Derives the address for raw secret key bytes.
pub fn address_from_secret_key(secret_bytes: &[u8; 32]) -> Result<Address, KeyError> {
    let secp = Secp256k1::signing_only();
    let secret_key = SecretKey::from_slice(secret_bytes).map_err(|_| KeyError::InvalidScalar)?;
    let public_key = PublicKey::from_secret_key(&secp, &secret_key);
    Ok(address_from_public_key(&public_key))
}

/// keccak256 of the uncompressed public key without its 0x04 prefix,
/// keeping the last 20 bytes.
fn address_from_public_key(public_key: &PublicKey) -> Address {
    let public_key_bytes = public_key.serialize_uncompressed();
    let hash = keccak256(&public_key_bytes[1..]);

    let mut address_bytes = [0u8; 20];
    address_bytes.copy_from_slice(&hash[12..]);
    Address::from_bytes(address_bytes)
}
