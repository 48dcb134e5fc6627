//! # wallet-core
//!
//! Deterministic key-to-address derivation: secp256k1 key generation and
//! parsing, compressed public key derivation, and base58check address
//! encoding with per-network version prefixes.
//!
//! All operations are synchronous and stateless; the only side effect is
//! entropy acquisition in [`keys::generate_private_key`]. Identical inputs
//! always produce byte-identical output, so everything here is safe to call
//! concurrently.

pub mod address;
pub mod error;
pub mod keys;
pub mod network;
pub mod types;

use error::WalletError;
use keys::PrivateKey;
use network::Network;
use types::Wallet;

/// Generate a wallet with a fresh random private key.
pub fn generate_wallet(network: Network) -> Result<Wallet, WalletError> {
    let private_key = keys::generate_private_key();
    wallet_from_private_key(&private_key, network)
}

/// Build the wallet record for an existing private key.
pub fn wallet_from_private_key(
    private_key: &PrivateKey,
    network: Network,
) -> Result<Wallet, WalletError> {
    let public_key = keys::derive_public_key(private_key)?;
    let address = address::pubkey_to_address(&public_key, network);

    Ok(Wallet {
        private_key: private_key.to_hex(),
        public_key: hex::encode(public_key),
        address,
        network,
    })
}

/// Build a wallet from a hex-encoded private key.
///
/// Hex and length problems surface as [`WalletError::MalformedInput`] and
/// [`WalletError::WrongLength`] before any curve arithmetic runs; a scalar
/// outside the group order fails later as
/// [`WalletError::InvalidPrivateKey`].
pub fn wallet_from_hex(private_key_hex: &str, network: Network) -> Result<Wallet, WalletError> {
    let private_key = PrivateKey::from_hex(private_key_hex)?;
    wallet_from_private_key(&private_key, network)
}

/// Build a wallet from raw private key bytes (must be exactly 32).
pub fn wallet_from_slice(
    private_key_bytes: &[u8],
    network: Network,
) -> Result<Wallet, WalletError> {
    let private_key = PrivateKey::from_slice(private_key_bytes)?;
    wallet_from_private_key(&private_key, network)
}

/// Structural sanity check of an address string.
///
/// Format heuristic only; see [`address::is_structurally_valid`].
pub fn validate_address(addr: &str) -> bool {
    address::is_structurally_valid(addr)
}
