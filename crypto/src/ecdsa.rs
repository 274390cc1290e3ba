//! secp256k1 public-key recovery (`ecrecover`) for permit signatures.
//!
//! Recovery is a single fallible step: it either yields the signer's address
//! or a [`SignatureError`] naming what was wrong with the input. Callers that
//! must not leak the distinction collapse every error into one kind.

use alloy_primitives::{uint, Address, B256, U256};
use isft_types::PermitSignature;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use thiserror::Error;

use crate::keys::address_from_verifying_key;

/// Half the secp256k1 group order. Signatures with `s` above this bound are
/// the malleable twin of a low-`s` signature and are rejected.
pub const SECP256K1N_HALF: U256 =
    uint!(0x7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF5D576E7357A4501DDFE92F46681B20A0_U256);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("recovery byte {0} is not 27 or 28")]
    InvalidRecoveryByte(u8),

    #[error("s lies in the upper half of the curve order")]
    HighS,

    #[error("r or s is zero or not below the curve order")]
    ScalarOutOfRange,

    #[error("no public key recovers from this signature")]
    Unrecoverable,
}

/// Recover the address that produced `signature` over `digest`.
pub fn recover_signer(digest: &B256, signature: &PermitSignature) -> Result<Address, SignatureError> {
    let recovery_id = match signature.v {
        27 => RecoveryId::new(false, false),
        28 => RecoveryId::new(true, false),
        v => return Err(SignatureError::InvalidRecoveryByte(v)),
    };

    if U256::from_be_bytes(signature.s.0) > SECP256K1N_HALF {
        return Err(SignatureError::HighS);
    }

    let mut bytes = [0u8; 64];
    bytes[..32].copy_from_slice(signature.r.as_slice());
    bytes[32..].copy_from_slice(signature.s.as_slice());
    let sig = Signature::from_slice(&bytes).map_err(|_| SignatureError::ScalarOutOfRange)?;

    let key = VerifyingKey::recover_from_prehash(digest.as_slice(), &sig, recovery_id)
        .map_err(|_| SignatureError::Unrecoverable)?;
    Ok(address_from_verifying_key(&key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyPair;

    fn digest() -> B256 {
        crate::hash::keccak256(b"permit digest")
    }

    #[test]
    fn recovers_signer_address() {
        let kp = KeyPair::from_seed(b"owner");
        let sig = kp.sign_digest(&digest()).unwrap();
        assert_eq!(recover_signer(&digest(), &sig), Ok(kp.address()));
    }

    #[test]
    fn other_digest_recovers_other_address() {
        let kp = KeyPair::from_seed(b"owner");
        let sig = kp.sign_digest(&digest()).unwrap();
        let other = crate::hash::keccak256(b"another digest");
        let recovered = recover_signer(&other, &sig);
        assert_ne!(recovered, Ok(kp.address()));
    }

    #[test]
    fn flipped_parity_does_not_recover_signer() {
        let kp = KeyPair::from_seed(b"owner");
        let mut sig = kp.sign_digest(&digest()).unwrap();
        sig.v = if sig.v == 27 { 28 } else { 27 };
        assert_ne!(recover_signer(&digest(), &sig), Ok(kp.address()));
    }

    #[test]
    fn rejects_bad_recovery_byte() {
        let kp = KeyPair::from_seed(b"owner");
        let mut sig = kp.sign_digest(&digest()).unwrap();
        sig.v = 1;
        assert_eq!(
            recover_signer(&digest(), &sig),
            Err(SignatureError::InvalidRecoveryByte(1))
        );
    }

    #[test]
    fn rejects_high_s_twin() {
        let kp = KeyPair::from_seed(b"owner");
        let sig = kp.sign_digest(&digest()).unwrap();
        // n - s is the malleable twin of a valid signature.
        let n = SECP256K1N_HALF * U256::from(2u64) + U256::from(1u64);
        let high_s = n - U256::from_be_bytes(sig.s.0);
        let twin = PermitSignature::new(
            if sig.v == 27 { 28 } else { 27 },
            sig.r,
            B256::from(high_s.to_be_bytes::<32>()),
        );
        assert_eq!(recover_signer(&digest(), &twin), Err(SignatureError::HighS));
    }

    #[test]
    fn rejects_zero_scalars() {
        let sig = PermitSignature::new(27, B256::ZERO, B256::ZERO);
        assert_eq!(
            recover_signer(&digest(), &sig),
            Err(SignatureError::ScalarOutOfRange)
        );
    }

    #[test]
    fn rejects_r_above_order() {
        let sig = PermitSignature::new(27, B256::repeat_byte(0xFF), B256::repeat_byte(0x01));
        assert_eq!(
            recover_signer(&digest(), &sig),
            Err(SignatureError::ScalarOutOfRange)
        );
    }
}
