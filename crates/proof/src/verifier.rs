//! Inclusion-proof verifier contract.

use alloy_primitives::{Bytes, B256};

/// Canonical stored value for a sent withdrawal in the message-passer
/// mapping (`bool true`).
pub const SENT_MESSAGE_VALUE: [u8; 1] = [0x01];

/// Black-box inclusion verifier.
///
/// Given a claimed root, a key, a value, and a proof, deterministically
/// confirms or denies that the key holds the value under the root. The
/// bridge never interprets the proof nodes itself.
pub trait ProofVerifier {
    /// Whether `key = value` is included under `root` according to `proof`.
    fn verify_inclusion(&self, root: B256, key: B256, value: &[u8], proof: &[Bytes]) -> bool;
}
