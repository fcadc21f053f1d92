//! Deposit gateway: primary-ledger entry point for value and calldata moving
//! down to the derived ledger.
//!
//! The gateway validates size and gas bounds, aliases contract callers, and
//! emits a canonical record that an external derivation process parses
//! positionally. It shares the bridge's target-validation and calldata-bound
//! guards but carries no dispute logic.

pub mod alias;
pub mod gateway;
pub mod record;

pub use alias::{apply_alias, undo_alias, ALIAS_OFFSET};
pub use gateway::{
    minimum_deposit_gas, CustodyError, DepositError, DepositGateway, DepositRequest,
    DepositSource, FeeAssetCustody, NoCustody,
};
pub use record::{DepositRecord, DEPOSIT_RECORD_VERSION};
