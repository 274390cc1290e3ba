//! Nullable clock: deterministic block timestamps.

use isft_types::Timestamp;
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            current: Cell::new(initial_secs),
        }
    }

    /// Current block timestamp.
    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    /// Move time forward by `secs` seconds.
    pub fn advance(&self, secs: u64) {
        self.current.set(self.current.get().saturating_add(secs));
    }

    /// Jump to an absolute time.
    pub fn set(&self, secs: u64) {
        self.current.set(secs);
    }

    /// A permit deadline `secs` from now.
    pub fn deadline_in(&self, secs: u64) -> isft_types::U256 {
        self.now().plus(secs).as_u256()
    }
}
