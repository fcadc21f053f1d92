use alloy_primitives::{Address, Bytes, B256, U256};
use game::GameRef;

/// Content hash identifying a withdrawal. Two transactions with identical
/// fields collide intentionally: they are the same withdrawal.
pub type WithdrawalHash = B256;

/// A request, originated on the derived ledger, to execute a call on the
/// primary ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalTransaction {
    /// Message nonce assigned on the derived ledger.
    pub nonce: U256,
    /// Originating address on the derived ledger.
    pub sender: Address,
    /// Call target on the primary ledger.
    pub target: Address,
    /// Value forwarded with the call.
    pub value: U256,
    /// Minimum execution budget the target call must receive.
    pub gas_limit: U256,
    /// Calldata forwarded to the target.
    pub data: Bytes,
}

/// Lifecycle of a withdrawal as seen from the primary ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalStatus {
    /// Initiated on the derived ledger, not yet proven here.
    Initiated,
    /// Proven against a dispute game, waiting out the maturity delay.
    Proven {
        /// Ledger timestamp of the proof record.
        timestamp: u64,
    },
    /// Settled. Terminal.
    Finalized,
}

/// Record of one prover's proof for one withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvenWithdrawal {
    /// The dispute game the withdrawal was proven against.
    pub game: GameRef,
    /// Ledger timestamp at which the proof was recorded. Never zero for a
    /// stored record; zero is the "unproven" sentinel on the read surface.
    pub timestamp: u64,
}
