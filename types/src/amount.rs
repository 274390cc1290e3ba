//! Token and native-currency amounts.
//!
//! Both are unsigned 256-bit integers counted in base units, the way the
//! permit schema encodes them (`uint256`). Arithmetic on them is always checked:
//! an underflow fails the operation instead of wrapping.

use alloy_primitives::U256;

/// One whole unit of native currency (10^18 base units, i.e. one ether in wei).
pub const NATIVE_UNIT: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Scale a whole-unit amount by `10^decimals`.
///
/// Returns `None` when the result does not fit in 256 bits.
pub fn parse_units(whole: u64, decimals: u8) -> Option<U256> {
    let scale = U256::from(10u64).checked_pow(U256::from(decimals))?;
    scale.checked_mul(U256::from(whole))
}
