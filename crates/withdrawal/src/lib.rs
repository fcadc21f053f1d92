//! Withdrawal identity and the multi-prover proof ledger.
//!
//! A withdrawal is identified by a content hash over its transaction tuple.
//! Proofs are recorded per (withdrawal, prover) so that one malicious prover
//! cannot block finalization for everyone else by proving against an invalid
//! game.

pub mod hash;
pub mod registry;
pub mod types;

pub use hash::hash_withdrawal;
pub use registry::ProofRegistry;
pub use types::{ProvenWithdrawal, WithdrawalHash, WithdrawalStatus, WithdrawalTransaction};
