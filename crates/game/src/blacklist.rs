//! Blacklist override for compromised dispute games.
//!
//! A game found to be invalid after the fact can be denied here. The set is
//! append-only and overrides every other finalization check.

use crate::{guardian::Guardian, oracle::GameRef};
use std::collections::HashSet;
use tracing::warn;

/// Append-only set of games whose results must never be acted on.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    games: HashSet<GameRef>,
}

impl Blacklist {
    /// Empty blacklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Guardian-only, irreversible.
    pub fn insert(&mut self, guardian: &Guardian, game: GameRef) {
        self.games.insert(game);
        warn!(
            guardian = %guardian.holder(),
            game = %game,
            "Dispute game blacklisted"
        );
    }

    /// Whether `game` has been denied.
    pub fn contains(&self, game: GameRef) -> bool {
        self.games.contains(&game)
    }

    /// Number of denied games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether no game has been denied.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, Address};

    const GUARDIAN: Address = address!("00000000000000000000000000000000000000aa");

    #[test]
    fn test_insert_and_contains() {
        let guardian = Guardian::mint(GUARDIAN, GUARDIAN).unwrap();
        let game = address!("1111111111111111111111111111111111111111");

        let mut blacklist = Blacklist::new();
        assert!(!blacklist.contains(game));

        blacklist.insert(&guardian, game);
        assert!(blacklist.contains(game));
        assert_eq!(blacklist.len(), 1);
    }
}
