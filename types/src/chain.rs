//! Chain identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the chain a token instance is deployed on.
///
/// Mixed into the permit domain separator so a signature made for one chain is
/// worthless on every other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    /// Ethereum mainnet.
    pub const MAINNET: Self = Self(1);
    /// Sepolia test network.
    pub const SEPOLIA: Self = Self(11_155_111);
    /// Local development chain (hardhat / anvil default).
    pub const DEV: Self = Self(31_337);

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
