//! Withdrawal proving.
//!
//! Ties a withdrawal to a claimed derived-ledger state via an inclusion
//! proof and records the (withdrawal, prover) pair against a dispute game.

use crate::{
    call::CallEnv,
    check::validate_respected_at_creation,
    error::PortalError,
    events::{ProveReceipt, WithdrawalProven, WithdrawalProvenSubmitter},
    Portal,
};
use alloy_primitives::Bytes;
use game::{GameDirectory, GameStatus};
use proof::{
    hash_output_root, withdrawal_storage_key, OutputRootProof, ProofVerifier, SENT_MESSAGE_VALUE,
};
use tracing::info;
use withdrawal::{hash_withdrawal, WithdrawalTransaction};

impl Portal {
    /// Prove that `tx` was initiated on the derived ledger state claimed by
    /// the dispute game at `game_index`.
    ///
    /// Re-proving by the same caller refreshes only that caller's record;
    /// other provers' records are never touched. Validation failures leave
    /// the portal untouched.
    pub fn prove_withdrawal(
        &mut self,
        env: CallEnv,
        tx: &WithdrawalTransaction,
        game_index: u64,
        output_root_proof: &OutputRootProof,
        inclusion_proof: &[Bytes],
        games: &dyn GameDirectory,
        verifier: &dyn ProofVerifier,
    ) -> Result<ProveReceipt, PortalError> {
        // A withdrawal targeting the bridge could spoof the bridge as the
        // message originator.
        if tx.target == self.config.portal_address {
            return Err(PortalError::BadTarget);
        }

        let game_ref = games.by_index(game_index).ok_or(PortalError::InvalidGameIndex)?;
        let game = games.get(game_ref).ok_or(PortalError::InvalidGameIndex)?;

        if game.game_type() != self.respected.current() {
            return Err(PortalError::InvalidGameType);
        }

        validate_respected_at_creation(game, &self.respected)?;

        if hash_output_root(output_root_proof) != game.root_claim() {
            return Err(PortalError::InvalidProof);
        }

        // No point proving against a losing claim.
        if game.status() == GameStatus::ChallengerWins {
            return Err(PortalError::InvalidDisputeGame);
        }

        let withdrawal_hash = hash_withdrawal(tx);
        let storage_key = withdrawal_storage_key(withdrawal_hash);

        if !verifier.verify_inclusion(
            output_root_proof.message_passer_storage_root,
            storage_key,
            &SENT_MESSAGE_VALUE,
            inclusion_proof,
        ) {
            return Err(PortalError::InvalidMerkleProof);
        }

        self.proofs
            .record(withdrawal_hash, env.caller, game_ref, env.timestamp);

        info!(
            withdrawal_hash = %withdrawal_hash,
            prover = %env.caller,
            game = %game_ref,
            game_index,
            timestamp = env.timestamp,
            "Withdrawal proven"
        );

        Ok(ProveReceipt {
            proven: WithdrawalProven {
                withdrawal_hash,
                from: tx.sender,
                to: tx.target,
            },
            submitter: WithdrawalProvenSubmitter {
                withdrawal_hash,
                proof_submitter: env.caller,
            },
        })
    }
}
