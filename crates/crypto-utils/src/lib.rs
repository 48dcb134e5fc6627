//! # crypto-utils
//!
//! Chain-agnostic primitives for the wallet: the composed digests used in
//! address derivation and the base58 text encoding.

pub mod base58;
pub mod digest;
