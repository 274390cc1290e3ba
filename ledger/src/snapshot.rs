//! Ledger snapshots: a sorted, hashed copy of every non-zero balance.
//!
//! A snapshot can be persisted with bincode and checked later: the hash
//! covers every account and the supply, and the balances must add up to the
//! supply for the snapshot to verify.

use isft_crypto::keccak256_multi;
use isft_types::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::ledger::Ledger;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Keccak-256 over version, supply and accounts.
    pub hash: B256,
    pub total_supply: U256,
    /// Non-zero balances, sorted by address.
    pub accounts: Vec<AccountSnapshot>,
    pub version: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub address: Address,
    pub balance: U256,
}

impl LedgerSnapshot {
    pub fn create(ledger: &Ledger) -> Self {
        let mut accounts: Vec<AccountSnapshot> = ledger
            .holders()
            .map(|(address, balance)| AccountSnapshot {
                address: *address,
                balance: *balance,
            })
            .collect();
        accounts.sort_by_key(|a| a.address);

        let mut snap = Self {
            hash: B256::ZERO,
            total_supply: ledger.total_supply(),
            accounts,
            version: SNAPSHOT_VERSION,
        };
        snap.hash = snap.compute_hash();
        snap
    }

    fn compute_hash(&self) -> B256 {
        let version = self.version.to_be_bytes();
        let supply = self.total_supply.to_be_bytes::<32>();
        let mut parts: Vec<Vec<u8>> = Vec::with_capacity(self.accounts.len() + 2);
        parts.push(version.to_vec());
        parts.push(supply.to_vec());
        for account in &self.accounts {
            let mut entry = account.address.to_vec();
            entry.extend_from_slice(&account.balance.to_be_bytes::<32>());
            parts.push(entry);
        }
        let slices: Vec<&[u8]> = parts.iter().map(Vec::as_slice).collect();
        keccak256_multi(&slices)
    }

    /// True when the hash matches the contents and the balances sum to the
    /// recorded supply.
    pub fn verify(&self) -> bool {
        if self.hash != self.compute_hash() {
            return false;
        }
        let sum = self
            .accounts
            .iter()
            .try_fold(U256::ZERO, |acc, a| acc.checked_add(a.balance));
        sum == Some(self.total_supply)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, LedgerError> {
        bincode::serialize(self).map_err(|e| LedgerError::Snapshot(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LedgerError> {
        bincode::deserialize(bytes).map_err(|e| LedgerError::Snapshot(e.to_string()))
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn balance_of(&self, address: &Address) -> U256 {
        self.accounts
            .binary_search_by_key(address, |a| a.address)
            .map(|i| self.accounts[i].balance)
            .unwrap_or(U256::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genesis::{create_genesis, GenesisConfig};

    fn addr(n: u8) -> Address {
        Address::with_last_byte(n)
    }

    fn sample_ledger() -> Ledger {
        let (mut ledger, _) = create_genesis(&GenesisConfig {
            holder: addr(1),
            supply: U256::from(10_000u64),
        })
        .unwrap();
        ledger.transfer(addr(1), addr(3), U256::from(2_500u64)).unwrap();
        ledger.transfer(addr(1), addr(2), U256::from(1_500u64)).unwrap();
        ledger
    }

    #[test]
    fn test_create_and_verify() {
        let snap = LedgerSnapshot::create(&sample_ledger());

        assert!(snap.verify());
        assert_eq!(snap.version, SNAPSHOT_VERSION);
        assert_eq!(snap.account_count(), 3);
        assert_eq!(snap.total_supply, U256::from(10_000u64));
        assert_eq!(snap.balance_of(&addr(2)), U256::from(1_500u64));
        assert_eq!(snap.balance_of(&addr(9)), U256::ZERO);
    }

    #[test]
    fn test_accounts_sorted() {
        let snap = LedgerSnapshot::create(&sample_ledger());
        let addresses: Vec<_> = snap.accounts.iter().map(|a| a.address).collect();
        assert_eq!(addresses, vec![addr(1), addr(2), addr(3)]);
    }

    #[test]
    fn test_tampered_snapshot_fails_verify() {
        let mut snap = LedgerSnapshot::create(&sample_ledger());
        assert!(snap.verify());

        snap.accounts[0].balance += U256::from(1u64);
        assert!(!snap.verify());
    }

    #[test]
    fn test_rehashed_but_unbalanced_snapshot_fails_verify() {
        let mut snap = LedgerSnapshot::create(&sample_ledger());
        snap.total_supply = U256::from(1u64);
        snap.hash = snap.compute_hash();
        assert!(!snap.verify());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let snap = LedgerSnapshot::create(&sample_ledger());

        let bytes = snap.to_bytes().unwrap();
        let restored = LedgerSnapshot::from_bytes(&bytes).expect("deserialization failed");

        assert_eq!(snap, restored);
        assert!(restored.verify());
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let err = LedgerSnapshot::from_bytes(&[0xFF, 0x01]).unwrap_err();
        assert!(matches!(err, LedgerError::Snapshot(_)));
    }

    #[test]
    fn test_empty_snapshot() {
        let snap = LedgerSnapshot::create(&Ledger::new());
        assert!(snap.verify());
        assert_eq!(snap.account_count(), 0);
    }

    #[test]
    fn test_deterministic_hash() {
        let a = LedgerSnapshot::create(&sample_ledger());
        let b = LedgerSnapshot::create(&sample_ledger());
        assert_eq!(a.hash, b.hash);
    }
}
