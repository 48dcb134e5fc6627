use thiserror::Error;

/// Wallet operation errors.
///
/// Every failure is local and recoverable; the variants stay distinguishable
/// so callers can branch on the kind (a too-short key is not the same as a
/// structurally valid key that falls outside the curve order).
#[derive(Debug, Error)]
pub enum WalletError {
    /// The 32-byte scalar is zero or not below the secp256k1 group order.
    /// Surfaced at derivation time, not when the key is parsed.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Supplied key material is not decodable hex.
    #[error("malformed key input: {0}")]
    MalformedInput(String),

    /// Decoded key material is not exactly 32 bytes.
    #[error("wrong key length: expected 32 bytes, got {0}")]
    WrongLength(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_private_key() {
        let err = WalletError::InvalidPrivateKey("out of range".into());
        assert_eq!(err.to_string(), "invalid private key: out of range");
    }

    #[test]
    fn display_malformed_input() {
        let err = WalletError::MalformedInput("odd length".into());
        assert_eq!(err.to_string(), "malformed key input: odd length");
    }

    #[test]
    fn display_wrong_length() {
        let err = WalletError::WrongLength(2);
        assert_eq!(err.to_string(), "wrong key length: expected 32 bytes, got 2");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> =
            Box::new(WalletError::WrongLength(31));
        assert!(err.to_string().contains("31"));
    }

    #[test]
    fn debug_format_works() {
        let debug = format!("{:?}", WalletError::MalformedInput("bad".into()));
        assert!(debug.contains("MalformedInput"));
    }
}
