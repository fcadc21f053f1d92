//! Configuration for the settlement bridge.
//!
//! This crate provides:
//! - Deployment parameters fixed at bridge construction (delays, guardian,
//!   probe address, calldata ceiling)
//! - A builder for custom parameter sets
//! - Configuration loading and validation

pub mod portal;

pub use portal::{
    ConfigError, PortalConfig, PortalConfigBuilder, DEPOSIT_CALLDATA_CEILING,
    DISPUTE_GAME_FINALITY_DELAY_SECONDS, ESTIMATION_ADDRESS, PROOF_MATURITY_DELAY_SECONDS,
};
