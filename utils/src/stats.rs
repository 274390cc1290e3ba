//! Per-operation call statistics.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Committed and rolled-back call counts for one operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub committed: u64,
    pub rolled_back: u64,
}

impl OutcomeCounts {
    pub fn total(&self) -> u64 {
        self.committed + self.rolled_back
    }
}

#[derive(Default)]
struct Counter {
    committed: AtomicU64,
    rolled_back: AtomicU64,
}

/// Counts call outcomes for a fixed set of operation names.
///
/// Names outside the set passed to [`CallStats::new`] are ignored.
pub struct CallStats {
    counters: BTreeMap<&'static str, Counter>,
}

impl CallStats {
    pub fn new(operations: &[&'static str]) -> Self {
        let counters = operations
            .iter()
            .map(|&name| (name, Counter::default()))
            .collect();
        Self { counters }
    }

    pub fn record_commit(&self, operation: &str) {
        if let Some(c) = self.counters.get(operation) {
            c.committed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_rollback(&self, operation: &str) {
        if let Some(c) = self.counters.get(operation) {
            c.rolled_back.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn get(&self, operation: &str) -> OutcomeCounts {
        self.counters
            .get(operation)
            .map(|c| OutcomeCounts {
                committed: c.committed.load(Ordering::Relaxed),
                rolled_back: c.rolled_back.load(Ordering::Relaxed),
            })
            .unwrap_or_default()
    }

    /// All counters, ordered by operation name.
    pub fn snapshot(&self) -> Vec<(&'static str, OutcomeCounts)> {
        self.counters.keys().map(|&name| (name, self.get(name))).collect()
    }
}

impl std::fmt::Debug for CallStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.snapshot()).finish()
    }
}

impl Clone for CallStats {
    fn clone(&self) -> Self {
        let counters = self
            .counters
            .iter()
            .map(|(&name, c)| {
                let copy = Counter {
                    committed: AtomicU64::new(c.committed.load(Ordering::Relaxed)),
                    rolled_back: AtomicU64::new(c.rolled_back.load(Ordering::Relaxed)),
                };
                (name, copy)
            })
            .collect();
        Self { counters }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_outcomes_per_operation() {
        let stats = CallStats::new(&["transfer", "permit"]);
        stats.record_commit("transfer");
        stats.record_commit("transfer");
        stats.record_rollback("transfer");
        stats.record_rollback("permit");

        assert_eq!(
            stats.get("transfer"),
            OutcomeCounts { committed: 2, rolled_back: 1 }
        );
        assert_eq!(stats.get("permit").total(), 1);
    }

    #[test]
    fn unknown_operations_ignored() {
        let stats = CallStats::new(&["transfer"]);
        stats.record_commit("mint");
        assert_eq!(stats.get("mint"), OutcomeCounts::default());
        assert_eq!(stats.snapshot().len(), 1);
    }

    #[test]
    fn clone_is_independent() {
        let stats = CallStats::new(&["approve"]);
        stats.record_commit("approve");
        let copy = stats.clone();
        stats.record_commit("approve");
        assert_eq!(copy.get("approve").committed, 1);
        assert_eq!(stats.get("approve").committed, 2);
    }
}
