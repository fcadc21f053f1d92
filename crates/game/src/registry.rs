//! Respected game type registry.
//!
//! Tracks which class of dispute game the bridge currently trusts, together
//! with a cutover timestamp. Only games created strictly after the cutover
//! are eligible, so refreshing the cutover invalidates every game created at
//! or before it without touching per-withdrawal records.

use crate::{
    guardian::Guardian,
    oracle::GameType,
};
use tracing::info;

/// Sentinel game type. Passing it to [`RespectedGameType::set`] refreshes
/// only the cutover timestamp, leaving the trusted type unchanged.
pub const CUTOVER_REFRESH_TYPE: GameType = GameType::MAX;

/// The currently trusted game type and the cutover line for eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RespectedGameType {
    current: GameType,
    updated_at: u64,
}

impl RespectedGameType {
    /// Registry trusting `initial` with the cutover at `now`.
    pub const fn new(initial: GameType, now: u64) -> Self {
        Self {
            current: initial,
            updated_at: now,
        }
    }

    /// The trusted game type.
    pub const fn current(&self) -> GameType {
        self.current
    }

    /// Ledger timestamp of the last cutover change. Games created at or
    /// before this instant are never eligible.
    pub const fn updated_at(&self) -> u64 {
        self.updated_at
    }

    /// Guardian-only mutation.
    ///
    /// [`CUTOVER_REFRESH_TYPE`] moves only the cutover to `now`; any other
    /// value changes the trusted type and leaves the cutover untouched. The
    /// cutover never moves backwards.
    pub fn set(&mut self, guardian: &Guardian, new_type: GameType, now: u64) {
        if new_type == CUTOVER_REFRESH_TYPE {
            self.updated_at = self.updated_at.max(now);
            info!(
                guardian = %guardian.holder(),
                updated_at = self.updated_at,
                "Respected game type cutover refreshed"
            );
        } else {
            self.current = new_type;
            info!(
                guardian = %guardian.holder(),
                game_type = new_type,
                "Respected game type changed"
            );
        }
    }
}
