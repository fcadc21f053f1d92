//! The oracle contract a dispute game must satisfy.
//!
//! A dispute game is a time-bounded contest over one claimed output root.
//! The bridge never looks inside the contest; it only consumes the lifecycle
//! surface defined here.

use alloy_primitives::{Address, B256};

/// Class of dispute game. Versioned so the trusted implementation can be
/// upgraded without migrating old games.
pub type GameType = u32;

/// Opaque handle to a dispute game, resolvable through a [`GameDirectory`].
pub type GameRef = Address;

/// Lifecycle status of a dispute game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The contest has not resolved yet.
    InProgress,
    /// The contest resolved against the claimed root.
    ChallengerWins,
    /// The contest resolved in favor of the claimed root.
    DefenderWins,
}

/// Result of probing whether a game was created under the then-respected
/// game type.
///
/// Older game implementations do not support the probe at all. That is a
/// different answer than "no": callers must be able to distinguish "wrong
/// answer" from "can't answer".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespectedProbe {
    /// The game supports the probe and reports whether it was respected
    /// at creation.
    Supported(bool),
    /// The game predates the probe.
    Unsupported,
}

impl RespectedProbe {
    /// True only for a supported, affirmative probe. `Unsupported` is never
    /// treated as an answer.
    pub const fn is_respected(self) -> bool {
        matches!(self, Self::Supported(true))
    }
}

/// Read surface of one dispute game.
pub trait DisputeGame {
    /// Class of this game.
    fn game_type(&self) -> GameType;

    /// The output root this game contests.
    fn root_claim(&self) -> B256;

    /// Current lifecycle status.
    fn status(&self) -> GameStatus;

    /// Ledger timestamp at which the game was created.
    fn created_at(&self) -> u64;

    /// Ledger timestamp at which the game resolved, zero while in progress.
    fn resolved_at(&self) -> u64;

    /// Probe whether the game was created under the then-respected type.
    fn respected_at_creation(&self) -> RespectedProbe;
}

/// Ordered collection of dispute games, indexed by creation order.
pub trait GameDirectory {
    /// Resolve a game by its creation index.
    fn by_index(&self, index: u64) -> Option<GameRef>;

    /// Resolve a game handle to its oracle surface.
    fn get(&self, game: GameRef) -> Option<&dyn DisputeGame>;
}
