//! Genesis mint: the only point at which tokens come into existence.
//!
//! The whole supply is credited to one holder and recorded as a transfer from
//! the zero address. After genesis the total supply never changes.

use isft_types::{Address, Transfer, U256};

use crate::error::LedgerError;
use crate::ledger::Ledger;

/// Configuration for the genesis mint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenesisConfig {
    /// Receives the entire initial supply.
    pub holder: Address,
    /// Initial supply in base units.
    pub supply: U256,
}

/// Build the initial ledger and the mint event for `config`.
///
/// A zero supply is allowed and yields an empty ledger.
pub fn create_genesis(config: &GenesisConfig) -> Result<(Ledger, Transfer), LedgerError> {
    if config.holder.is_zero() {
        return Err(LedgerError::TransferToZeroAddress);
    }

    let ledger = Ledger::mint_genesis(config.holder, config.supply);
    tracing::debug!(holder = %config.holder, supply = %config.supply, "genesis mint");

    Ok((
        ledger,
        Transfer {
            from: Address::ZERO,
            to: config.holder,
            value: config.supply,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use isft_types::parse_units;

    #[test]
    fn genesis_credits_holder_with_full_supply() {
        let holder = Address::with_last_byte(7);
        let supply = parse_units(1_000_000_000, 18).unwrap();
        let (ledger, mint) = create_genesis(&GenesisConfig { holder, supply }).unwrap();

        assert_eq!(ledger.total_supply(), supply);
        assert_eq!(ledger.balance_of(&holder), supply);
        assert_eq!(ledger.sum_of_balances(), Some(supply));
        assert_eq!(mint.from, Address::ZERO);
        assert_eq!(mint.to, holder);
        assert_eq!(mint.value, supply);
    }

    #[test]
    fn genesis_to_zero_address_rejected() {
        let config = GenesisConfig {
            holder: Address::ZERO,
            supply: U256::from(1u64),
        };
        assert_eq!(
            create_genesis(&config).unwrap_err(),
            LedgerError::TransferToZeroAddress
        );
    }

    #[test]
    fn zero_supply_genesis_has_no_holders() {
        let config = GenesisConfig {
            holder: Address::with_last_byte(1),
            supply: U256::ZERO,
        };
        let (ledger, _) = create_genesis(&config).unwrap();
        assert_eq!(ledger.holders().count(), 0);
        assert_eq!(ledger.total_supply(), U256::ZERO);
    }
}
