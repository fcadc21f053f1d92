//! Withdrawal finalization.
//!
//! Validates every precondition, settles the withdrawal exactly once, and
//! executes the target call with a minimum-gas guarantee. The target call is
//! the one place the portal can be re-entered, so all state mutations happen
//! before it and the call context is reset on every exit path.

use crate::{
    call::{CallContext, CallEnv, CallRequest, TargetCaller},
    error::PortalError,
    events::WithdrawalFinalized,
    Portal,
};
use alloy_primitives::Address;
use game::GameDirectory;
use tracing::{info, warn};
use withdrawal::{hash_withdrawal, WithdrawalTransaction};

impl Portal {
    /// Finalize a withdrawal against the caller's own proof record.
    pub fn finalize_withdrawal(
        &mut self,
        env: CallEnv,
        tx: &WithdrawalTransaction,
        games: &dyn GameDirectory,
        caller: &mut dyn TargetCaller,
    ) -> Result<WithdrawalFinalized, PortalError> {
        self.finalize_withdrawal_external(env, tx, env.caller, games, caller)
    }

    /// Finalize a withdrawal against an explicit prover's record.
    ///
    /// A successful finalization durably settles the withdrawal even when
    /// the target call itself fails: settlement records "attempted", not
    /// "target succeeded". The exception is the gas-estimation probe
    /// caller, for whom a failed target call aborts the whole operation so
    /// tooling can binary-search the minimum gas without corrupting replay
    /// state.
    pub fn finalize_withdrawal_external(
        &mut self,
        env: CallEnv,
        tx: &WithdrawalTransaction,
        prover: Address,
        games: &dyn GameDirectory,
        caller: &mut dyn TargetCaller,
    ) -> Result<WithdrawalFinalized, PortalError> {
        // Also rejects finalize attempts from within another finalization's
        // target call.
        if self.active_call != CallContext::Idle {
            return Err(PortalError::NonReentrant);
        }

        let withdrawal_hash = hash_withdrawal(tx);
        self.check_withdrawal(withdrawal_hash, prover, env.timestamp, games)?;

        // All validation done: mutate, then make the one re-entrant call.
        self.finalized.insert(withdrawal_hash);
        self.active_call = CallContext::InCall(tx.sender);

        let outcome = caller.call(
            self,
            CallRequest {
                target: tx.target,
                min_gas: tx.gas_limit,
                value: tx.value,
                data: tx.data.clone(),
            },
        );

        self.active_call = CallContext::Idle;

        if !outcome.success && env.caller == self.config.estimation_address {
            // Roll back the settlement: an estimation probe must leave the
            // portal exactly as it found it.
            self.finalized.remove(&withdrawal_hash);
            return Err(PortalError::GasEstimation);
        }

        if outcome.success {
            info!(
                withdrawal_hash = %withdrawal_hash,
                prover = %prover,
                "Withdrawal finalized"
            );
        } else {
            warn!(
                withdrawal_hash = %withdrawal_hash,
                prover = %prover,
                "Withdrawal finalized, target call failed"
            );
        }

        Ok(WithdrawalFinalized {
            withdrawal_hash,
            success: outcome.success,
        })
    }
}
