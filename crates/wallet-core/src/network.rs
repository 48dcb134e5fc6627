use serde::{Deserialize, Serialize};

/// Address version byte for mainnet. Mainnet addresses start with `b`.
pub const MAINNET_VERSION: u8 = 0x55;

/// Address version byte for testnet. Testnet addresses start with `m` or `n`.
pub const TESTNET_VERSION: u8 = 0x6f;

/// Supported networks.
///
/// The version bytes are fixed protocol parameters; any address consumer
/// relies on these exact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Single-byte version prefix prepended to the pubkey hash.
    pub fn version_byte(self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_VERSION,
            Network::Testnet => TESTNET_VERSION,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}
