//! Timestamp type used for call contexts and permit deadlines.
//!
//! Timestamps are Unix epoch seconds (UTC), the unit block timestamps use.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// This timestamp widened to the `uint256` the permit schema uses.
    pub fn as_u256(&self) -> U256 {
        U256::from(self.0)
    }

    /// Timestamp `secs` seconds later (saturating).
    pub fn plus(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }

    /// Whether this moment is strictly after `deadline`.
    ///
    /// A deadline equal to the current time is still valid.
    pub fn is_past(&self, deadline: U256) -> bool {
        self.as_u256() > deadline
    }

    /// Seconds by which this moment overshoots `deadline`, saturating at `u64::MAX`.
    pub fn overshoot(&self, deadline: U256) -> u64 {
        let late = self.as_u256().saturating_sub(deadline);
        u64::try_from(late).unwrap_or(u64::MAX)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl From<u64> for Timestamp {
    fn from(secs: u64) -> Self {
        Self(secs)
    }
}
