//! Notifications returned by successful portal operations.

use alloy_primitives::Address;
use withdrawal::WithdrawalHash;

/// A withdrawal was proven against a dispute game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalProven {
    /// Identity of the withdrawal.
    pub withdrawal_hash: WithdrawalHash,
    /// Originating sender on the derived ledger.
    pub from: Address,
    /// Call target on the primary ledger.
    pub to: Address,
}

/// Per-submitter companion to [`WithdrawalProven`], letting off-ledger
/// tooling pick which proof to finalize against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalProvenSubmitter {
    /// Identity of the withdrawal.
    pub withdrawal_hash: WithdrawalHash,
    /// Who recorded this proof.
    pub proof_submitter: Address,
}

/// Both notifications emitted by one successful prove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProveReceipt {
    /// The primary notification.
    pub proven: WithdrawalProven,
    /// The per-submitter notification.
    pub submitter: WithdrawalProvenSubmitter,
}

/// A withdrawal was settled. `success` records the target call's outcome;
/// settlement is durable either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalFinalized {
    /// Identity of the withdrawal.
    pub withdrawal_hash: WithdrawalHash,
    /// Whether the target call succeeded.
    pub success: bool,
}
