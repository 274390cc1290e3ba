//! The token contract: one owner of all state, one atomic unit per call.

use isft_crypto::Eip712Domain;
use isft_ledger::{create_genesis, GenesisConfig, Ledger, LedgerSnapshot};
use isft_permit::PermitAuthorizer;
use isft_rebate::{NativeTransfer, RebateDispenser};
use isft_types::{
    Address, ChainId, GasRebate, PermitSignature, Timestamp, TokenEvent, TokenMetadata, B256,
    U256,
};
use isft_utils::CallStats;

use crate::config::TokenConfig;
use crate::engine::TransferEngine;
use crate::error::TokenError;
use crate::events::{EventLog, LoggedEvent};

/// Names under which call outcomes are counted in [`Isft::stats`].
pub const OPERATIONS: [&str; 5] = ["transfer", "transfer_from", "approve", "permit", "fund"];

/// Who is calling and when.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    pub sender: Address,
    pub timestamp: Timestamp,
}

impl CallContext {
    pub fn new(sender: Address, timestamp: Timestamp) -> Self {
        Self { sender, timestamp }
    }
}

/// Events emitted by one committed call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Receipt {
    pub events: Vec<TokenEvent>,
}

impl Receipt {
    pub fn gas_rebate(&self) -> Option<&GasRebate> {
        self.events.iter().find_map(TokenEvent::as_gas_rebate)
    }
}

/// Everything a call may mutate. Cloned before each call so a failure can
/// put it back untouched.
#[derive(Clone, Debug)]
struct TokenState {
    ledger: Ledger,
    permits: PermitAuthorizer,
    rebates: RebateDispenser,
}

/// A deployed token instance.
///
/// `N` pays rebates out of the contract's native pool.
pub struct Isft<N> {
    metadata: TokenMetadata,
    address: Address,
    chain_id: ChainId,
    state: TokenState,
    bank: N,
    events: EventLog,
    stats: CallStats,
}

impl<N: NativeTransfer> Isft<N> {
    /// Deploy at `contract`, minting the whole initial supply to `deployer`.
    pub fn deploy(
        config: &TokenConfig,
        deployer: Address,
        contract: Address,
        bank: N,
    ) -> Result<Self, TokenError> {
        let supply = config.initial_supply_units()?;
        let (ledger, mint) = create_genesis(&GenesisConfig {
            holder: deployer,
            supply,
        })?;
        let domain = Eip712Domain::new(config.name.clone(), config.chain_id, contract);

        let mut events = EventLog::new();
        events.commit(&[mint.into()]);

        tracing::info!(
            name = %config.name,
            symbol = %config.symbol,
            %contract,
            %deployer,
            %supply,
            chain_id = %config.chain_id,
            "token deployed"
        );

        Ok(Self {
            metadata: config.metadata(),
            address: contract,
            chain_id: config.chain_id,
            state: TokenState {
                ledger,
                permits: PermitAuthorizer::new(&domain),
                rebates: RebateDispenser::new(config.rebate_amount()),
            },
            bank,
            events,
            stats: CallStats::new(&OPERATIONS),
        })
    }

    // ── Reads ──────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn total_supply(&self) -> U256 {
        self.state.ledger.total_supply()
    }

    pub fn balance_of(&self, account: &Address) -> U256 {
        self.state.ledger.balance_of(account)
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.state.ledger.allowance(owner, spender)
    }

    pub fn nonces(&self, owner: &Address) -> U256 {
        self.state.permits.nonce(owner)
    }

    pub fn domain_separator(&self) -> B256 {
        self.state.permits.domain_separator()
    }

    /// The digest `owner` must sign for a permit accepted by the next call.
    pub fn permit_digest(
        &self,
        owner: Address,
        spender: Address,
        value: U256,
        deadline: U256,
    ) -> B256 {
        self.state.permits.digest(owner, spender, value, deadline)
    }

    /// Native currency held for rebates.
    pub fn native_balance(&self) -> U256 {
        self.state.rebates.pool()
    }

    pub fn rebate_amount(&self) -> U256 {
        self.state.rebates.rebate_amount()
    }

    pub fn rebate_claimed(&self, account: &Address) -> bool {
        self.state.rebates.is_claimed(account)
    }

    pub fn rebates_paid(&self) -> u64 {
        self.state.rebates.rebates_paid()
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Register a listener for events of committed calls.
    pub fn subscribe(&mut self, listener: impl Fn(&LoggedEvent) + Send + Sync + 'static) {
        self.events.subscribe(listener);
    }

    pub fn stats(&self) -> &CallStats {
        &self.stats
    }

    pub fn bank(&self) -> &N {
        &self.bank
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot::create(&self.state.ledger)
    }

    /// The current snapshot in its bincode wire form.
    pub fn export_snapshot(&self) -> Result<Vec<u8>, TokenError> {
        Ok(self.snapshot().to_bytes()?)
    }

    // ── Calls ──────────────────────────────────────────────────────────

    /// Move `amount` from the caller to `to`. May pay the caller's rebate.
    pub fn transfer(
        &mut self,
        ctx: &CallContext,
        to: Address,
        amount: U256,
    ) -> Result<Receipt, TokenError> {
        self.execute("transfer", ctx, |state, bank| {
            TransferEngine::new(&mut state.ledger, &mut state.rebates, bank)
                .transfer(ctx.sender, to, amount)
        })
    }

    /// Move `amount` of `owner`'s tokens to `to` using the caller's allowance.
    pub fn transfer_from(
        &mut self,
        ctx: &CallContext,
        owner: Address,
        to: Address,
        amount: U256,
    ) -> Result<Receipt, TokenError> {
        self.execute("transfer_from", ctx, |state, bank| {
            TransferEngine::new(&mut state.ledger, &mut state.rebates, bank)
                .transfer_from(ctx.sender, owner, to, amount)
        })
    }

    /// Set the caller's allowance for `spender` to exactly `amount`.
    pub fn approve(
        &mut self,
        ctx: &CallContext,
        spender: Address,
        amount: U256,
    ) -> Result<Receipt, TokenError> {
        self.execute("approve", ctx, |state, _| {
            let approval = state.ledger.approve(ctx.sender, spender, amount)?;
            Ok(vec![approval.into()])
        })
    }

    /// Set `owner`'s allowance for `spender` on the strength of `owner`'s
    /// signature. Anyone may submit it.
    pub fn permit(
        &mut self,
        ctx: &CallContext,
        owner: Address,
        spender: Address,
        value: U256,
        deadline: U256,
        signature: &PermitSignature,
    ) -> Result<Receipt, TokenError> {
        self.execute("permit", ctx, |state, _| {
            let approval = state.permits.permit(
                &mut state.ledger,
                owner,
                spender,
                value,
                deadline,
                signature,
                ctx.timestamp,
            )?;
            Ok(vec![approval.into()])
        })
    }

    /// [`Isft::permit`] with the signature in its 65-byte or 64-byte
    /// compact encoding. Any other length is an invalid signature.
    pub fn permit_bytes(
        &mut self,
        ctx: &CallContext,
        owner: Address,
        spender: Address,
        value: U256,
        deadline: U256,
        signature: &[u8],
    ) -> Result<Receipt, TokenError> {
        self.execute("permit", ctx, |state, _| {
            let signature = PermitSignature::from_bytes(signature).map_err(|e| {
                tracing::debug!(%owner, error = %e, "undecodable permit signature");
                TokenError::InvalidSignature
            })?;
            let approval = state.permits.permit(
                &mut state.ledger,
                owner,
                spender,
                value,
                deadline,
                &signature,
                ctx.timestamp,
            )?;
            Ok(vec![approval.into()])
        })
    }

    /// Add native currency sent by the caller to the rebate pool.
    pub fn fund(&mut self, ctx: &CallContext, amount: U256) -> Result<Receipt, TokenError> {
        self.execute("fund", ctx, |state, _| {
            let pool = state.rebates.fund(amount)?;
            tracing::debug!(sender = %ctx.sender, %amount, %pool, "rebate pool funded");
            Ok(Vec::new())
        })
    }

    /// Run `call` against the state; keep its effects and events only if it
    /// succeeds.
    fn execute<F>(
        &mut self,
        operation: &'static str,
        ctx: &CallContext,
        call: F,
    ) -> Result<Receipt, TokenError>
    where
        F: FnOnce(&mut TokenState, &mut N) -> Result<Vec<TokenEvent>, TokenError>,
    {
        let checkpoint = self.state.clone();
        match call(&mut self.state, &mut self.bank) {
            Ok(events) => {
                self.events.commit(&events);
                self.stats.record_commit(operation);
                tracing::debug!(
                    operation,
                    sender = %ctx.sender,
                    events = events.len(),
                    "call committed"
                );
                Ok(Receipt { events })
            }
            Err(e) => {
                self.state = checkpoint;
                self.stats.record_rollback(operation);
                tracing::warn!(operation, sender = %ctx.sender, error = %e, "call rolled back");
                Err(e)
            }
        }
    }
}

impl<N> std::fmt::Debug for Isft<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Isft")
            .field("metadata", &self.metadata)
            .field("address", &self.address)
            .field("chain_id", &self.chain_id)
            .field("total_supply", &self.state.ledger.total_supply())
            .field("events", &self.events.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isft_rebate::NativeTransferError;

    #[derive(Default)]
    struct Sink(Vec<(Address, U256)>);

    impl NativeTransfer for Sink {
        fn send_value(&mut self, to: Address, amount: U256) -> Result<(), NativeTransferError> {
            self.0.push((to, amount));
            Ok(())
        }
    }

    fn deployer() -> Address {
        Address::with_last_byte(0x01)
    }

    fn deploy() -> Isft<Sink> {
        Isft::deploy(
            &TokenConfig::default(),
            deployer(),
            Address::with_last_byte(0xCC),
            Sink::default(),
        )
        .unwrap()
    }

    fn ctx(sender: Address) -> CallContext {
        CallContext::new(sender, Timestamp::new(1_700_000_000))
    }

    #[test]
    fn deploy_mints_to_deployer() {
        let token = deploy();
        assert_eq!(token.name(), "Interoperable Secure Fungible Token Standard");
        assert_eq!(token.symbol(), "ISFT");
        assert_eq!(token.decimals(), 18);
        assert_eq!(token.balance_of(&deployer()), token.total_supply());
        assert_eq!(token.events().len(), 1);
        assert_eq!(token.events().transfers().next().map(|t| t.from), Some(Address::ZERO));
    }

    #[test]
    fn deploy_to_zero_deployer_fails() {
        let err = Isft::deploy(
            &TokenConfig::default(),
            Address::ZERO,
            Address::with_last_byte(0xCC),
            Sink::default(),
        )
        .unwrap_err();
        assert_eq!(err, TokenError::TransferToZeroAddress);
    }

    #[test]
    fn failed_call_commits_nothing() {
        let mut token = deploy();
        let stranger = Address::with_last_byte(0x09);
        let err = token
            .transfer(&ctx(stranger), deployer(), U256::from(1u64))
            .unwrap_err();

        assert!(matches!(err, TokenError::InsufficientBalance { .. }));
        assert_eq!(token.events().len(), 1);
        assert_eq!(token.stats().get("transfer").rolled_back, 1);
    }

    #[test]
    fn domain_separator_binds_this_deployment() {
        let token = deploy();
        let expected = Eip712Domain::new(
            token.name().to_string(),
            token.chain_id(),
            token.address(),
        )
        .separator();
        assert_eq!(token.domain_separator(), expected);
    }

    #[test]
    fn fund_without_rebate_emits_nothing() {
        let mut token = deploy();
        let receipt = token.fund(&ctx(deployer()), U256::from(5u64)).unwrap();
        assert!(receipt.events.is_empty());
        assert_eq!(token.native_balance(), U256::from(5u64));
        assert_eq!(token.stats().get("fund").committed, 1);
    }
}
