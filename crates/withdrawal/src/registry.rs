//! Multi-prover proof ledger.
//!
//! Explicit keyed store with a composite (withdrawal, prover) key plus an
//! insertion-ordered append-only submitter index per withdrawal. Re-proving
//! by the same prover overwrites only that prover's record.

use crate::types::{ProvenWithdrawal, WithdrawalHash};
use alloy_primitives::Address;
use game::GameRef;
use std::collections::HashMap;

/// Records, per (withdrawal, prover), which game a withdrawal was proven
/// against and when.
#[derive(Debug, Clone, Default)]
pub struct ProofRegistry {
    proven: HashMap<(WithdrawalHash, Address), ProvenWithdrawal>,
    submitters: HashMap<WithdrawalHash, Vec<Address>>,
}

impl ProofRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `prover`'s proof of `hash` against `game` at `now`.
    ///
    /// Overwrites only that prover's prior record; other provers' records
    /// are untouched. The prover is appended to the submitter index on
    /// every call, keeping the audit trail insertion-ordered.
    pub fn record(&mut self, hash: WithdrawalHash, prover: Address, game: GameRef, now: u64) {
        self.proven.insert((hash, prover), ProvenWithdrawal { game, timestamp: now });
        self.submitters.entry(hash).or_default().push(prover);
    }

    /// The proof record for (hash, prover), if any.
    pub fn get(&self, hash: WithdrawalHash, prover: Address) -> Option<&ProvenWithdrawal> {
        self.proven.get(&(hash, prover))
    }

    /// Number of proof submissions recorded for `hash`.
    pub fn submitter_count(&self, hash: WithdrawalHash) -> usize {
        self.submitters.get(&hash).map_or(0, Vec::len)
    }

    /// Submitters for `hash` in submission order.
    pub fn submitters(&self, hash: WithdrawalHash) -> &[Address] {
        self.submitters.get(&hash).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    const HASH: WithdrawalHash =
        b256!("1111111111111111111111111111111111111111111111111111111111111111");
    const GAME_A: GameRef = address!("00000000000000000000000000000000000000a1");
    const GAME_B: GameRef = address!("00000000000000000000000000000000000000b2");
    const ALICE: Address = address!("0000000000000000000000000000000000000a11");
    const BOB: Address = address!("0000000000000000000000000000000000000b0b");

    #[test]
    fn test_record_and_get() {
        let mut registry = ProofRegistry::new();
        registry.record(HASH, ALICE, GAME_A, 1_000);

        let proven = registry.get(HASH, ALICE).unwrap();
        assert_eq!(proven.game, GAME_A);
        assert_eq!(proven.timestamp, 1_000);
        assert!(registry.get(HASH, BOB).is_none());
    }

    #[test]
    fn test_reprove_overwrites_own_record_only() {
        let mut registry = ProofRegistry::new();
        registry.record(HASH, ALICE, GAME_A, 1_000);
        registry.record(HASH, BOB, GAME_A, 1_100);
        registry.record(HASH, ALICE, GAME_B, 2_000);

        let alice = registry.get(HASH, ALICE).unwrap();
        assert_eq!(alice.game, GAME_B);
        assert_eq!(alice.timestamp, 2_000);

        let bob = registry.get(HASH, BOB).unwrap();
        assert_eq!(bob.game, GAME_A);
        assert_eq!(bob.timestamp, 1_100);
    }

    #[test]
    fn test_submitter_index_is_insertion_ordered_and_append_only() {
        let mut registry = ProofRegistry::new();
        registry.record(HASH, ALICE, GAME_A, 1_000);
        registry.record(HASH, BOB, GAME_A, 1_100);
        registry.record(HASH, ALICE, GAME_B, 2_000);

        assert_eq!(registry.submitter_count(HASH), 3);
        assert_eq!(registry.submitters(HASH), &[ALICE, BOB, ALICE]);
    }

    #[test]
    fn test_unknown_hash_is_empty() {
        let registry = ProofRegistry::new();
        assert_eq!(registry.submitter_count(HASH), 0);
        assert!(registry.submitters(HASH).is_empty());
    }
}
