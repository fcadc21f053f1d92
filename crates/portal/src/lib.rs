//! The withdrawal proving/finalization state machine.
//!
//! [`Portal`] gates execution of a cross-domain call behind an inclusion
//! proof, a pluggable dispute-resolution oracle, two independent time
//! delays, and replay/reentrancy/authorization guards. Every operation
//! either completes fully or leaves the portal untouched; the one external
//! call that can re-enter (the finalization target call) runs only after
//! all state mutations for the operation are done.

pub mod admin;
pub mod call;
pub mod check;
pub mod error;
pub mod events;
pub mod finalize;
pub mod prove;

pub use call::{CallContext, CallEnv, CallOutcome, CallRequest, TargetCaller};
pub use error::PortalError;
pub use events::{ProveReceipt, WithdrawalFinalized, WithdrawalProven, WithdrawalProvenSubmitter};

use alloy_primitives::Address;
use config::PortalConfig;
use game::{Blacklist, GameRef, GameType, RespectedGameType};
use std::collections::HashSet;
use withdrawal::{ProofRegistry, ProvenWithdrawal, WithdrawalHash, WithdrawalStatus};

/// The settlement bridge's primary-ledger state machine.
#[derive(Debug, Clone)]
pub struct Portal {
    config: PortalConfig,
    respected: RespectedGameType,
    blacklist: Blacklist,
    proofs: ProofRegistry,
    finalized: HashSet<WithdrawalHash>,
    active_call: CallContext,
}

impl Portal {
    /// Deploy a portal under `config` at ledger time `now`.
    ///
    /// `now` seeds the respected-game-type cutover: no game created at or
    /// before deployment is eligible.
    pub fn new(config: PortalConfig, now: u64) -> Self {
        let respected = RespectedGameType::new(config.initial_respected_game_type, now);
        Self {
            config,
            respected,
            blacklist: Blacklist::new(),
            proofs: ProofRegistry::new(),
            finalized: HashSet::new(),
            active_call: CallContext::Idle,
        }
    }

    /// Deployment configuration.
    pub const fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// The currently respected game type.
    pub const fn respected_game_type(&self) -> GameType {
        self.respected.current()
    }

    /// Ledger timestamp of the last cutover change.
    pub const fn respected_game_type_updated_at(&self) -> u64 {
        self.respected.updated_at()
    }

    /// Whether `game` has been blacklisted.
    pub fn is_blacklisted(&self, game: GameRef) -> bool {
        self.blacklist.contains(game)
    }

    /// Proof record for (withdrawal, prover), if any.
    pub fn proven_withdrawal(
        &self,
        hash: WithdrawalHash,
        prover: Address,
    ) -> Option<&ProvenWithdrawal> {
        self.proofs.get(hash, prover)
    }

    /// Whether `hash` has been settled. Settlement is permanent.
    pub fn is_finalized(&self, hash: WithdrawalHash) -> bool {
        self.finalized.contains(&hash)
    }

    /// Number of proof submissions recorded for `hash`.
    pub fn proof_submitter_count(&self, hash: WithdrawalHash) -> usize {
        self.proofs.submitter_count(hash)
    }

    /// Proof submitters for `hash` in submission order.
    pub fn proof_submitters(&self, hash: WithdrawalHash) -> &[Address] {
        self.proofs.submitters(hash)
    }

    /// Originating sender of the finalization currently executing its
    /// target call, `None` when no call is in progress.
    pub const fn active_sender(&self) -> Option<Address> {
        match self.active_call {
            CallContext::InCall(sender) => Some(sender),
            CallContext::Idle => None,
        }
    }

    /// Lifecycle of a withdrawal as recorded by this portal.
    pub fn withdrawal_status(&self, hash: WithdrawalHash, prover: Address) -> WithdrawalStatus {
        if self.is_finalized(hash) {
            return WithdrawalStatus::Finalized;
        }

        if let Some(proven) = self.proven_withdrawal(hash, prover) {
            return WithdrawalStatus::Proven {
                timestamp: proven.timestamp,
            };
        }

        WithdrawalStatus::Initiated
    }
}
