use crypto_utils::base58;
use crypto_utils::digest::{hash160, sha256d};

use crate::network::Network;

/// Derive a base58check address from a 33-byte compressed secp256k1 public
/// key.
///
/// Steps:
/// 1. Hash160(pubkey) -> 20-byte pubkey hash
/// 2. Prepend the network's 1-byte version prefix
/// 3. Append the first 4 bytes of double SHA-256 of the 21-byte payload
/// 4. Base58 encode the resulting 25 bytes
///
/// Deterministic and infallible: the key is well-formed by construction and
/// every 25-byte payload has an encoding.
pub fn pubkey_to_address(pubkey_bytes: &[u8; 33], network: Network) -> String {
    let pubkey_hash = hash160(pubkey_bytes);

    let mut payload = Vec::with_capacity(25);
    payload.push(network.version_byte());
    payload.extend_from_slice(&pubkey_hash);

    let checksum = sha256d(&payload);
    payload.extend_from_slice(&checksum[..4]);

    base58::encode(&payload)
}

/// Structural sanity check of an address string.
///
/// Accepts lengths in [26, 35] whose first character is `b`, `m`, or `1`.
/// This is a format heuristic only: it does not decode base58 and does not
/// verify the embedded checksum, so `true` is not cryptographic proof of a
/// well-formed address.
pub fn is_structurally_valid(address: &str) -> bool {
    if address.len() < 26 || address.len() > 35 {
        return false;
    }
    // Known gap: testnet addresses can start with 'n', which this rejects.
    matches!(address.chars().next(), Some('b' | 'm' | '1'))
}
