use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute Hash160 (RIPEMD-160(SHA-256(data))), the 20-byte public key
/// fingerprint used in address payloads.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    Ripemd160::digest(sha).into()
}

/// Double SHA-256 (SHA-256 applied twice).
///
/// The first 4 bytes of this digest are the base58check checksum.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash160_is_20_bytes() {
        assert_eq!(hash160(b"").len(), 20);
        assert_eq!(hash160(&[0u8; 33]).len(), 20);
    }

    #[test]
    fn sha256d_is_32_bytes() {
        assert_eq!(sha256d(b"").len(), 32);
        assert_eq!(sha256d(&[0u8; 21]).len(), 32);
    }

    #[test]
    fn hash160_known_vector() {
        // Hash160 of the compressed pubkey for secret key 1. This is the
        // pubkey hash behind several well-known Bitcoin test vectors.
        let pubkey = hex::decode(
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        )
        .unwrap();
        assert_eq!(
            hex::encode(hash160(&pubkey)),
            "751e76e8199196d454941c45d1b3a323f1433bd6"
        );
    }

    #[test]
    fn hash160_empty_input() {
        assert_eq!(
            hex::encode(hash160(b"")),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }

    #[test]
    fn sha256d_known_vectors() {
        assert_eq!(
            hex::encode(sha256d(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
        assert_eq!(
            hex::encode(sha256d(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn digests_are_deterministic() {
        let data = b"determinism check";
        assert_eq!(hash160(data), hash160(data));
        assert_eq!(sha256d(data), sha256d(data));
    }

    #[test]
    fn different_inputs_different_digests() {
        assert_ne!(hash160(b"a"), hash160(b"b"));
        assert_ne!(sha256d(b"a"), sha256d(b"b"));
    }
}
