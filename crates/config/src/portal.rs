//! Deployment parameters for the withdrawal portal and deposit gateway.
//!
//! All values here are fixed at deployment; nothing in this crate mutates at
//! runtime. The respected game type's *current* value lives in the portal
//! state, only its initial value is configured here.

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Canonical proof maturity delay: challengers get 7 days after a proof is
/// published before it can be acted on.
pub const PROOF_MATURITY_DELAY_SECONDS: u64 = 604_800;

/// Canonical finality air-gap: 3.5 days after a game resolves before proofs
/// against it may finalize, leaving room for manual intervention.
pub const DISPUTE_GAME_FINALITY_DELAY_SECONDS: u64 = 302_400;

/// Ceiling on deposit calldata size, bounding worst-case block propagation.
pub const DEPOSIT_CALLDATA_CEILING: usize = 120_000;

/// Designated gas-estimation probe address. A failed target call from this
/// caller aborts the finalize instead of recording the failure, so tooling
/// can binary-search the minimum gas without corrupting replay state.
pub const ESTIMATION_ADDRESS: Address = address!("0000000000000000000000000000000000000001");

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A time delay of zero would let proofs finalize in the same instant
    /// they are published.
    #[error("{name} must be non-zero")]
    ZeroDelay {
        /// Which delay was zero.
        name: &'static str,
    },
    /// The guardian must be a real account.
    #[error("guardian address must not be zero")]
    ZeroGuardian,
}

/// Complete deployment configuration for the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Address the bridge itself occupies on the primary ledger. Withdrawals
    /// targeting it are rejected at prove time.
    pub portal_address: Address,
    /// The single privileged role for game-type and blacklist mutations.
    pub guardian: Address,
    /// Initial respected game type.
    pub initial_respected_game_type: u32,
    /// Minimum wait after proving before finalization is permitted.
    pub proof_maturity_delay_secs: u64,
    /// Minimum wait after a game's resolution before finalization.
    pub finality_delay_secs: u64,
    /// Gas-estimation probe address.
    pub estimation_address: Address,
    /// Maximum deposit calldata size in bytes.
    pub max_deposit_calldata: usize,
    /// Whether deposits operate in custom-fee-asset mode and pull minted
    /// amounts into custody.
    pub custom_fee_asset: bool,
}

impl PortalConfig {
    /// Canonical parameters (7 day maturity, 3.5 day air-gap) for a bridge
    /// at `portal_address` guarded by `guardian`.
    pub const fn standard(portal_address: Address, guardian: Address) -> Self {
        Self {
            portal_address,
            guardian,
            initial_respected_game_type: 0,
            proof_maturity_delay_secs: PROOF_MATURITY_DELAY_SECONDS,
            finality_delay_secs: DISPUTE_GAME_FINALITY_DELAY_SECONDS,
            estimation_address: ESTIMATION_ADDRESS,
            max_deposit_calldata: DEPOSIT_CALLDATA_CEILING,
            custom_fee_asset: false,
        }
    }

    /// Load and validate a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;

        Ok(config)
    }

    /// Check invariants that hold for every usable deployment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.proof_maturity_delay_secs == 0 {
            return Err(ConfigError::ZeroDelay {
                name: "proof_maturity_delay_secs",
            });
        }
        if self.finality_delay_secs == 0 {
            return Err(ConfigError::ZeroDelay {
                name: "finality_delay_secs",
            });
        }
        if self.guardian.is_zero() {
            return Err(ConfigError::ZeroGuardian);
        }
        Ok(())
    }
}

/// Builder for custom deployments.
#[derive(Debug, Clone)]
pub struct PortalConfigBuilder {
    config: PortalConfig,
}

impl PortalConfigBuilder {
    /// Start from the canonical parameters.
    pub const fn standard(portal_address: Address, guardian: Address) -> Self {
        Self {
            config: PortalConfig::standard(portal_address, guardian),
        }
    }

    /// Override the initial respected game type.
    pub const fn respected_game_type(mut self, game_type: u32) -> Self {
        self.config.initial_respected_game_type = game_type;
        self
    }

    /// Override the proof maturity delay.
    pub const fn proof_maturity_delay_secs(mut self, secs: u64) -> Self {
        self.config.proof_maturity_delay_secs = secs;
        self
    }

    /// Override the finality air-gap.
    pub const fn finality_delay_secs(mut self, secs: u64) -> Self {
        self.config.finality_delay_secs = secs;
        self
    }

    /// Override the gas-estimation probe address.
    pub const fn estimation_address(mut self, address: Address) -> Self {
        self.config.estimation_address = address;
        self
    }

    /// Override the deposit calldata ceiling.
    pub const fn max_deposit_calldata(mut self, bytes: usize) -> Self {
        self.config.max_deposit_calldata = bytes;
        self
    }

    /// Enable custom-fee-asset mode for deposits.
    pub const fn custom_fee_asset(mut self, enabled: bool) -> Self {
        self.config.custom_fee_asset = enabled;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<PortalConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
