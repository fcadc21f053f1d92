//! Side-effect-free finalization precondition check.

use crate::{error::PortalError, Portal};
use alloy_primitives::Address;
use game::{DisputeGame, GameDirectory, GameStatus, RespectedGameType, RespectedProbe};
use withdrawal::WithdrawalHash;

/// Validate the respected-at-creation probe and the cutover ordering.
///
/// Shared between proving and finalization: the respected type may change
/// between the two, so both re-run it. A probe failure is reported as
/// [`PortalError::LegacyGame`], never collapsed into "not respected".
pub(crate) fn validate_respected_at_creation(
    game: &dyn DisputeGame,
    respected: &RespectedGameType,
) -> Result<(), PortalError> {
    match game.respected_at_creation() {
        RespectedProbe::Unsupported => return Err(PortalError::LegacyGame),
        RespectedProbe::Supported(false) => return Err(PortalError::InvalidGameType),
        RespectedProbe::Supported(true) => {}
    }

    // Strict: a game created in the same instant as a cutover change is not
    // grandfathered in.
    if game.created_at() <= respected.updated_at() {
        return Err(PortalError::InvalidGameType);
    }

    Ok(())
}

impl Portal {
    /// Check every finalization precondition for (withdrawal, prover) at
    /// ledger time `now` without touching any state.
    ///
    /// Independently callable so off-ledger tooling can test readiness
    /// before submitting.
    pub fn check_withdrawal(
        &self,
        hash: WithdrawalHash,
        prover: Address,
        now: u64,
        games: &dyn GameDirectory,
    ) -> Result<(), PortalError> {
        let Some(proven) = self.proofs.get(hash, prover) else {
            return Err(PortalError::Unproven);
        };

        if self.blacklist.contains(proven.game) {
            return Err(PortalError::Blacklisted);
        }

        if proven.timestamp == 0 {
            return Err(PortalError::Unproven);
        }

        let game = games.get(proven.game).ok_or(PortalError::UnknownGame)?;

        // Ordering sanity: a proof cannot predate the game it refers to.
        if proven.timestamp <= game.created_at() {
            return Err(PortalError::InvalidTimestamp);
        }

        if now <= proven.timestamp + self.config.proof_maturity_delay_secs {
            return Err(PortalError::ProofNotMature);
        }

        if game.status() != GameStatus::DefenderWins {
            return Err(PortalError::ProposalNotValidated);
        }

        validate_respected_at_creation(game, &self.respected)?;

        let resolved_at = game.resolved_at();
        if resolved_at == 0 || now <= resolved_at + self.config.finality_delay_secs {
            return Err(PortalError::FinalityNotElapsed);
        }

        if self.finalized.contains(&hash) {
            return Err(PortalError::AlreadyFinalized);
        }

        Ok(())
    }
}
