//! Failure taxonomy of the portal.
//!
//! Every variant is a synchronous abort: a failed operation leaves all prior
//! state untouched. Only the finalization target call's outcome is surfaced
//! as data instead of an error.

use thiserror::Error;

/// Rejected portal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PortalError {
    /// The withdrawal targets the bridge itself and could spoof the bridge
    /// as message originator.
    #[error("withdrawal must not target the bridge")]
    BadTarget,

    /// No dispute game exists at the given index.
    #[error("no dispute game at the given index")]
    InvalidGameIndex,

    /// A recorded game reference no longer resolves in the directory.
    #[error("recorded dispute game cannot be resolved")]
    UnknownGame,

    /// Wrong game type, or the game was created at or before the cutover.
    #[error("dispute game is not of the respected type or predates the cutover")]
    InvalidGameType,

    /// The game predates the respected-at-creation probe; "can't answer" is
    /// reported distinctly from "wrong answer".
    #[error("dispute game does not support the respected-at-creation probe")]
    LegacyGame,

    /// The recomputed output root does not match the game's claim.
    #[error("output root proof does not match the game's root claim")]
    InvalidProof,

    /// The game already resolved against the claim.
    #[error("dispute game resolved against the claim")]
    InvalidDisputeGame,

    /// The inclusion proof does not place the withdrawal in the claimed
    /// state.
    #[error("withdrawal inclusion proof is invalid")]
    InvalidMerkleProof,

    /// The referenced game has been blacklisted.
    #[error("dispute game is blacklisted")]
    Blacklisted,

    /// No proof record exists for this (withdrawal, prover) pair.
    #[error("withdrawal has not been proven by this prover")]
    Unproven,

    /// The proof claims to predate its game's creation.
    #[error("proof timestamp does not postdate game creation")]
    InvalidTimestamp,

    /// The proof maturity delay has not elapsed.
    #[error("proof maturity delay has not elapsed")]
    ProofNotMature,

    /// The game has not resolved in favor of the claim.
    #[error("derived-ledger proposal has not been validated")]
    ProposalNotValidated,

    /// The post-resolution finality air-gap has not elapsed.
    #[error("dispute game finality delay has not elapsed")]
    FinalityNotElapsed,

    /// The withdrawal was already settled.
    #[error("withdrawal has already been finalized")]
    AlreadyFinalized,

    /// A finalization is already executing its target call.
    #[error("finalization already in progress")]
    NonReentrant,

    /// Deliberate abort: the target call failed under the gas-estimation
    /// probe caller, so the attempt must not be recorded.
    #[error("target call failed during gas estimation")]
    GasEstimation,
}
