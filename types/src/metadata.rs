//! Token metadata fixed at deployment.

use serde::{Deserialize, Serialize};

/// Version string of the permit signing domain. Bumping it invalidates every
/// outstanding signature.
pub const PERMIT_VERSION: &str = "1";

/// Descriptive token metadata. Never changes after deployment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Human-readable name; also the `name` field of the permit domain.
    pub name: String,
    pub symbol: String,
    /// Number of decimals used for display. Balances are always base units.
    pub decimals: u8,
}

impl TokenMetadata {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }
}
