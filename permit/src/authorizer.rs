//! Nonce tracking and verification of signed permits.

use std::collections::HashMap;

use isft_crypto::{recover_signer, Eip712Domain, PermitMessage};
use isft_ledger::Ledger;
use isft_types::{Address, Approval, PermitSignature, Timestamp, B256, U256};
use isft_utils::format_duration;
use serde::{Deserialize, Serialize};

use crate::error::PermitError;

/// Verifies permits for one token instance and tracks per-owner nonces.
///
/// Owner nonces start at zero and grow by one per accepted permit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitAuthorizer {
    domain_separator: B256,
    nonces: HashMap<Address, U256>,
}

impl PermitAuthorizer {
    pub fn new(domain: &Eip712Domain) -> Self {
        Self {
            domain_separator: domain.separator(),
            nonces: HashMap::new(),
        }
    }

    pub fn domain_separator(&self) -> B256 {
        self.domain_separator
    }

    /// The nonce the owner's next permit must be signed with.
    pub fn nonce(&self, owner: &Address) -> U256 {
        self.nonces.get(owner).copied().unwrap_or(U256::ZERO)
    }

    /// The digest `owner` must sign to authorise `spender` for `value` until
    /// `deadline`, using the owner's current nonce.
    pub fn digest(&self, owner: Address, spender: Address, value: U256, deadline: U256) -> B256 {
        PermitMessage {
            owner,
            spender,
            value,
            nonce: self.nonce(&owner),
            deadline,
        }
        .digest(&self.domain_separator)
    }

    /// Verify a signed permit and set the allowance it grants.
    ///
    /// The deadline is inclusive. Any signature that does not recover to
    /// `owner` is rejected as [`PermitError::InvalidSignature`], whatever the
    /// reason. On error neither the nonce nor the ledger changes.
    #[allow(clippy::too_many_arguments)]
    pub fn permit(
        &mut self,
        ledger: &mut Ledger,
        owner: Address,
        spender: Address,
        value: U256,
        deadline: U256,
        signature: &PermitSignature,
        now: Timestamp,
    ) -> Result<Approval, PermitError> {
        if now.is_past(deadline) {
            tracing::debug!(
                %owner,
                late_by = %format_duration(now.overshoot(deadline)),
                "permit past deadline"
            );
            return Err(PermitError::ExpiredDeadline { deadline, now });
        }

        let nonce = self.nonce(&owner);
        let digest = self.digest(owner, spender, value, deadline);
        match recover_signer(&digest, signature) {
            Ok(signer) if signer == owner => {}
            Ok(signer) => {
                tracing::debug!(%owner, %signer, %nonce, "permit signed by another key");
                return Err(PermitError::InvalidSignature);
            }
            Err(e) => {
                tracing::debug!(%owner, %nonce, error = %e, "malformed permit signature");
                return Err(PermitError::InvalidSignature);
            }
        }

        let approval = ledger.approve(owner, spender, value)?;
        self.nonces.insert(owner, nonce + U256::from(1u64));

        tracing::debug!(%owner, %spender, %value, %nonce, "permit accepted");
        Ok(approval)
    }
}
