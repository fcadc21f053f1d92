//! Deposit gateway state machine.

use crate::{
    alias::apply_alias,
    record::{encode_opaque_payload, DepositRecord, DEPOSIT_RECORD_VERSION},
};
use alloy_primitives::{Address, Bytes, U256};
use config::PortalConfig;
use thiserror::Error;
use tracing::info;

/// Base gas cost of any deposit execution on the derived ledger.
pub const DEPOSIT_BASE_GAS: u64 = 21_000;

/// Per-byte gas charged for deposit calldata.
pub const DEPOSIT_GAS_PER_BYTE: u64 = 16;

/// Linear floor on a deposit's gas limit, charging proportionally to the
/// derived-ledger execution cost so users cannot externalize unpriced work.
pub fn minimum_deposit_gas(data_len: usize) -> u64 {
    DEPOSIT_BASE_GAS + DEPOSIT_GAS_PER_BYTE * data_len as u64
}

/// Custody refused or failed to pull the fee asset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fee asset custody failed: {reason}")]
pub struct CustodyError {
    /// Why the pull failed.
    pub reason: String,
}

/// Rejected deposit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepositError {
    /// Contract-creation deposits must target the zero address.
    #[error("creation deposit must target the zero address, got {target}")]
    BadTarget {
        /// The offending target.
        target: Address,
    },
    /// Gas limit under the linear floor.
    #[error("gas limit {provided} under the floor {needed}")]
    SmallGasLimit {
        /// Floor for this calldata size.
        needed: u64,
        /// What the deposit declared.
        provided: u64,
    },
    /// Calldata over the fixed ceiling.
    #[error("calldata of {len} bytes exceeds the {max} byte ceiling")]
    LargeCalldata {
        /// Declared calldata size.
        len: usize,
        /// Configured ceiling.
        max: usize,
    },
    /// Fee-asset custody failure in custom-fee-asset mode.
    #[error(transparent)]
    Custody(#[from] CustodyError),
}

/// Where a deposit call came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositSource {
    /// The depositing caller.
    pub caller: Address,
    /// Whether the caller is itself a contract (not externally originated).
    /// Contract callers are aliased in the emitted record.
    pub is_contract: bool,
    /// Native value sent along with the call.
    pub native_value: U256,
}

/// A deposit request: value and calldata bound for the derived ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositRequest {
    /// Target on the derived ledger; must be zero for creations.
    pub to: Address,
    /// Fee-asset amount to mint on the derived ledger.
    pub mint: U256,
    /// Value the deposit declares on the derived ledger.
    pub value: U256,
    /// Gas limit for the derived-ledger execution.
    pub gas_limit: u64,
    /// Whether this deposit creates a contract.
    pub is_creation: bool,
    /// Calldata for the derived-ledger execution.
    pub data: Bytes,
}

/// Custody collaborator holding the fee asset in custom-fee-asset mode.
pub trait FeeAssetCustody {
    /// Pull `amount` of the fee asset from `from` into custody.
    fn pull(&mut self, from: Address, amount: U256) -> Result<(), CustodyError>;
}

/// Custody stub for deployments without a custom fee asset.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCustody;

impl FeeAssetCustody for NoCustody {
    fn pull(&mut self, _from: Address, amount: U256) -> Result<(), CustodyError> {
        if amount.is_zero() {
            Ok(())
        } else {
            Err(CustodyError {
                reason: "no fee asset configured".to_string(),
            })
        }
    }
}

/// Primary-ledger entry point for deposits.
#[derive(Debug, Clone)]
pub struct DepositGateway {
    config: PortalConfig,
    records: Vec<DepositRecord>,
}

impl DepositGateway {
    /// Gateway operating under `config`.
    pub const fn new(config: PortalConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
        }
    }

    /// Accept a deposit, validate its bounds, and emit the canonical record.
    ///
    /// In custom-fee-asset mode a non-zero mint is pulled from the caller
    /// into custody before the record is emitted. Any failure leaves the
    /// gateway untouched.
    pub fn deposit(
        &mut self,
        source: DepositSource,
        req: DepositRequest,
        custody: &mut dyn FeeAssetCustody,
    ) -> Result<DepositRecord, DepositError> {
        if req.is_creation && req.to != Address::ZERO {
            return Err(DepositError::BadTarget { target: req.to });
        }

        let floor = minimum_deposit_gas(req.data.len());
        if req.gas_limit < floor {
            return Err(DepositError::SmallGasLimit {
                needed: floor,
                provided: req.gas_limit,
            });
        }

        if req.data.len() > self.config.max_deposit_calldata {
            return Err(DepositError::LargeCalldata {
                len: req.data.len(),
                max: self.config.max_deposit_calldata,
            });
        }

        if self.config.custom_fee_asset && !req.mint.is_zero() {
            custody.pull(source.caller, req.mint)?;
        }

        let from = if source.is_contract {
            apply_alias(source.caller)
        } else {
            source.caller
        };

        let record = DepositRecord {
            from,
            to: req.to,
            version: DEPOSIT_RECORD_VERSION,
            opaque_data: encode_opaque_payload(
                source.native_value,
                req.value,
                req.gas_limit,
                req.is_creation,
                &req.data,
            ),
        };

        info!(
            from = %record.from,
            to = %record.to,
            gas_limit = req.gas_limit,
            data_len = req.data.len(),
            is_creation = req.is_creation,
            "Deposit accepted"
        );

        self.records.push(record.clone());
        Ok(record)
    }

    /// Emitted records in order, for off-ledger derivation.
    pub fn records(&self) -> &[DepositRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const PORTAL: Address = address!("0d83dab629f0e0F9d36c0Cbc89B69a489f0751bD");
    const GUARDIAN: Address = address!("00000000000000000000000000000000000000aa");
    const ALICE: Address = address!("0000000000000000000000000000000000000a11");

    fn gateway() -> DepositGateway {
        DepositGateway::new(PortalConfig::standard(PORTAL, GUARDIAN))
    }

    fn source() -> DepositSource {
        DepositSource {
            caller: ALICE,
            is_contract: false,
            native_value: U256::from(1),
        }
    }

    fn request(gas_limit: u64, data: Bytes) -> DepositRequest {
        DepositRequest {
            to: address!("00000000000000000000000000000000000000b2"),
            mint: U256::ZERO,
            value: U256::from(1),
            gas_limit,
            is_creation: false,
            data,
        }
    }

    #[test]
    fn test_gas_floor_exact_is_accepted() {
        let mut gateway = gateway();
        let record = gateway
            .deposit(source(), request(21_000, Bytes::new()), &mut NoCustody)
            .unwrap();
        assert_eq!(gateway.records(), &[record]);
    }

    #[test]
    fn test_gas_under_floor_is_rejected() {
        let mut gateway = gateway();
        let err = gateway
            .deposit(source(), request(10_000, Bytes::new()), &mut NoCustody)
            .unwrap_err();
        assert_eq!(
            err,
            DepositError::SmallGasLimit {
                needed: 21_000,
                provided: 10_000
            }
        );
        assert!(gateway.records().is_empty());
    }

    #[test]
    fn test_gas_floor_scales_with_calldata() {
        let data = Bytes::from(vec![0u8; 100]);
        let floor = minimum_deposit_gas(data.len());
        assert_eq!(floor, 21_000 + 16 * 100);

        let mut gateway = gateway();
        assert!(gateway
            .deposit(source(), request(floor - 1, data.clone()), &mut NoCustody)
            .is_err());
        assert!(gateway
            .deposit(source(), request(floor, data), &mut NoCustody)
            .is_ok());
    }

    #[test]
    fn test_creation_must_target_zero() {
        let mut gateway = gateway();
        let mut req = request(21_000, Bytes::new());
        req.is_creation = true;

        let err = gateway
            .deposit(source(), req.clone(), &mut NoCustody)
            .unwrap_err();
        assert!(matches!(err, DepositError::BadTarget { .. }));

        req.to = Address::ZERO;
        assert!(gateway.deposit(source(), req, &mut NoCustody).is_ok());
    }

    #[test]
    fn test_oversized_calldata_rejected() {
        let mut gateway = gateway();
        let data = Bytes::from(vec![0u8; 120_001]);
        let req = request(minimum_deposit_gas(data.len()), data);

        let err = gateway.deposit(source(), req, &mut NoCustody).unwrap_err();
        assert!(matches!(err, DepositError::LargeCalldata { len: 120_001, .. }));
    }

    #[test]
    fn test_contract_caller_is_aliased() {
        let mut gateway = gateway();
        let contract_source = DepositSource {
            caller: ALICE,
            is_contract: true,
            native_value: U256::ZERO,
        };

        let record = gateway
            .deposit(contract_source, request(21_000, Bytes::new()), &mut NoCustody)
            .unwrap();
        assert_eq!(record.from, crate::alias::apply_alias(ALICE));
    }

    #[test]
    fn test_custom_fee_asset_pulls_mint() {
        struct Vault {
            pulled: Vec<(Address, U256)>,
        }
        impl FeeAssetCustody for Vault {
            fn pull(&mut self, from: Address, amount: U256) -> Result<(), CustodyError> {
                self.pulled.push((from, amount));
                Ok(())
            }
        }

        let config = config::PortalConfigBuilder::standard(PORTAL, GUARDIAN)
            .custom_fee_asset(true)
            .build()
            .unwrap();
        let mut gateway = DepositGateway::new(config);
        let mut vault = Vault { pulled: vec![] };

        let mut req = request(21_000, Bytes::new());
        req.mint = U256::from(500);

        gateway.deposit(source(), req, &mut vault).unwrap();
        assert_eq!(vault.pulled, vec![(ALICE, U256::from(500))]);
    }

    #[test]
    fn test_custody_failure_emits_nothing() {
        let config = config::PortalConfigBuilder::standard(PORTAL, GUARDIAN)
            .custom_fee_asset(true)
            .build()
            .unwrap();
        let mut gateway = DepositGateway::new(config);

        let mut req = request(21_000, Bytes::new());
        req.mint = U256::from(500);

        let err = gateway.deposit(source(), req, &mut NoCustody).unwrap_err();
        assert!(matches!(err, DepositError::Custody(_)));
        assert!(gateway.records().is_empty());
    }
}
