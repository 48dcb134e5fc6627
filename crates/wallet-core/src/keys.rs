use k256::ecdsa::SigningKey;
use rand::RngCore;
use rand_core::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::WalletError;

/// A secp256k1 private key held as a raw 32-byte big-endian scalar.
///
/// The bytes are zeroed when the value is dropped. Parsing only checks the
/// length; the group-order predicate is applied when the public key is
/// derived, so an out-of-range scalar surfaces as
/// [`WalletError::InvalidPrivateKey`] there and not here.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    /// Build a private key from raw bytes. Fails unless exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, WalletError> {
        let scalar: [u8; 32] = bytes
            .try_into()
            .map_err(|_| WalletError::WrongLength(bytes.len()))?;
        Ok(Self(scalar))
    }

    /// Build a private key from a hex string (64 hex characters).
    pub fn from_hex(hex_str: &str) -> Result<Self, WalletError> {
        let bytes =
            hex::decode(hex_str).map_err(|e| WalletError::MalformedInput(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Generate a private key from the platform's secure random source.
///
/// Rejection-samples: a draw that is zero or not below the group order is
/// discarded and redrawn. The probability of even one rejection is below
/// 2^-127, but the loop handles it rather than assuming it away.
pub fn generate_private_key() -> PrivateKey {
    loop {
        let mut candidate = [0u8; 32];
        OsRng.fill_bytes(&mut candidate);
        if SigningKey::from_bytes(&candidate.into()).is_ok() {
            return PrivateKey(candidate);
        }
    }
}

/// Derive the SEC1 compressed public key (parity byte + x-coordinate) for a
/// private key.
///
/// Fails with [`WalletError::InvalidPrivateKey`] when the scalar is zero or
/// not below the secp256k1 group order.
pub fn derive_public_key(private_key: &PrivateKey) -> Result<[u8; 33], WalletError> {
    let signing_key = SigningKey::from_bytes(&(*private_key.as_bytes()).into())
        .map_err(|e| WalletError::InvalidPrivateKey(e.to_string()))?;

    signing_key
        .verifying_key()
        .to_sec1_bytes()
        .as_ref()
        .try_into()
        .map_err(|_| WalletError::InvalidPrivateKey("unexpected public key length".into()))
}
