//! EIP-712 typed-data hashing for `Permit` messages.
//!
//! The encoding must match wallets bit for bit:
//!
//! ```text
//! domainSeparator = keccak256(typeHash(EIP712Domain) ‖ keccak256(name) ‖ keccak256(version)
//!                             ‖ uint256(chainId) ‖ address(verifyingContract))
//! structHash      = keccak256(typeHash(Permit) ‖ owner ‖ spender ‖ value ‖ nonce ‖ deadline)
//! digest          = keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ structHash)
//! ```
//!
//! The hashed structs are ABI-encoded as static tuples, one 32-byte word per
//! field.

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::{sol, SolType};
use isft_types::{ChainId, PERMIT_VERSION};

use crate::hash::{keccak256, keccak256_multi};

type DomainTuple = sol! { tuple(bytes32, bytes32, bytes32, uint256, address) };

type PermitTuple = sol! { tuple(bytes32, address, address, uint256, uint256, uint256) };

/// Canonical type string of the signing domain.
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Canonical type string of the permit message. Field order is fixed.
pub const PERMIT_TYPE: &str =
    "Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)";

/// The signing domain of one token instance on one chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Eip712Domain {
    pub name: String,
    pub version: String,
    pub chain_id: ChainId,
    pub verifying_contract: Address,
}

impl Eip712Domain {
    /// Domain for a token named `name`, using the fixed permit version.
    pub fn new(name: impl Into<String>, chain_id: ChainId, verifying_contract: Address) -> Self {
        Self {
            name: name.into(),
            version: PERMIT_VERSION.to_string(),
            chain_id,
            verifying_contract,
        }
    }

    /// Hash of the domain struct. Binds signatures to this contract and chain.
    pub fn separator(&self) -> B256 {
        keccak256(&DomainTuple::abi_encode(&(
            keccak256(DOMAIN_TYPE.as_bytes()),
            keccak256(self.name.as_bytes()),
            keccak256(self.version.as_bytes()),
            U256::from(self.chain_id.get()),
            self.verifying_contract,
        )))
    }
}

/// The message an owner signs to grant `spender` an allowance of `value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PermitMessage {
    pub owner: Address,
    pub spender: Address,
    pub value: U256,
    pub nonce: U256,
    pub deadline: U256,
}

impl PermitMessage {
    pub fn struct_hash(&self) -> B256 {
        keccak256(&PermitTuple::abi_encode(&(
            keccak256(PERMIT_TYPE.as_bytes()),
            self.owner,
            self.spender,
            self.value,
            self.nonce,
            self.deadline,
        )))
    }

    /// The digest the owner's key signs, under the given domain separator.
    pub fn digest(&self, domain_separator: &B256) -> B256 {
        typed_data_digest(domain_separator, &self.struct_hash())
    }
}

/// `keccak256(0x19 ‖ 0x01 ‖ domainSeparator ‖ structHash)`.
pub fn typed_data_digest(domain_separator: &B256, struct_hash: &B256) -> B256 {
    keccak256_multi(&[
        &[0x19, 0x01],
        domain_separator.as_slice(),
        struct_hash.as_slice(),
    ])
}
