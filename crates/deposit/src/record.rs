//! Canonical deposit record consumed by the external derivation process.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolValue;

/// Version of the record's opaque payload layout. Evolution is
/// additive-only: the payload is parsed positionally off-ledger.
pub const DEPOSIT_RECORD_VERSION: U256 = U256::ZERO;

/// A record authorizing value/calldata execution on the derived ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositRecord {
    /// Originator, aliased when the depositing caller is a contract.
    pub from: Address,
    /// Target on the derived ledger, zero for contract creation.
    pub to: Address,
    /// Payload layout version.
    pub version: U256,
    /// Packed payload: nativeValueSent, declaredValue, gasLimit, isCreation
    /// flag, data — in that fixed order.
    pub opaque_data: Bytes,
}

/// Pack the deposit payload in its fixed positional order.
pub fn encode_opaque_payload(
    native_value: U256,
    value: U256,
    gas_limit: u64,
    is_creation: bool,
    data: &Bytes,
) -> Bytes {
    let packed = (native_value, value, gas_limit, is_creation, data).abi_encode_packed();
    Bytes::from(packed)
}
