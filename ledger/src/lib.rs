//! Account-based fungible-token ledger.
//!
//! Owns balances and allowances and enforces conservation of supply: every
//! operation either fully applies or leaves the ledger untouched, and the sum
//! of all balances always equals the total supply fixed at genesis.

pub mod error;
pub mod genesis;
pub mod ledger;
pub mod snapshot;

pub use error::LedgerError;
pub use genesis::{create_genesis, GenesisConfig};
pub use ledger::Ledger;
pub use snapshot::{AccountSnapshot, LedgerSnapshot, SNAPSHOT_VERSION};
