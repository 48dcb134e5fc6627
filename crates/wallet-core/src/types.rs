use serde::{Deserialize, Serialize};

use crate::network::Network;

/// Wallet output record: hex-encoded key pair plus the derived address.
///
/// A convenience aggregate built fresh per call and returned by value;
/// nothing is persisted anywhere. The address is a pure function of
/// (private key, network).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub private_key: String,
    pub public_key: String,
    pub address: String,
    pub network: Network,
}
