//! Output-root proof bundle and deterministic derivations.

use alloy_primitives::{keccak256, B256};
use alloy_sol_types::SolValue;

/// Version tag of the v0 output-root preimage layout.
pub const OUTPUT_VERSION_V0: B256 = B256::ZERO;

/// Storage slot of the derived ledger's sent-withdrawals mapping.
pub const MESSAGE_PASSER_SLOT: B256 = B256::ZERO;

/// Preimage of a claimed output root.
///
/// The claimed root commits to the derived ledger's full state; the bridge
/// only needs the message-passer storage root out of it, so the proof bundle
/// carries the other components alongside to let the root be recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRootProof {
    /// Layout version of the preimage.
    pub version: B256,
    /// State root of the derived ledger block.
    pub state_root: B256,
    /// Storage root of the message-passer account within that state.
    pub message_passer_storage_root: B256,
    /// Hash of the derived ledger block itself.
    pub latest_blockhash: B256,
}

/// Recompute the output root committed to by a proof bundle.
///
/// `keccak256(abi.encode(version, stateRoot, messagePasserStorageRoot,
/// latestBlockhash))`, matching the derivation the dispute game's root claim
/// was produced under.
pub fn hash_output_root(proof: &OutputRootProof) -> B256 {
    let encoded = (
        proof.version,
        proof.state_root,
        proof.message_passer_storage_root,
        proof.latest_blockhash,
    )
        .abi_encode_sequence();

    keccak256(encoded)
}

/// Derive the storage key a withdrawal occupies in the message-passer
/// mapping.
///
/// Solidity mapping slot derivation: `keccak256(withdrawalHash || slot)`,
/// with the mapping at [`MESSAGE_PASSER_SLOT`].
pub fn withdrawal_storage_key(withdrawal_hash: B256) -> B256 {
    let mut data = [0u8; 64];
    data[0..32].copy_from_slice(withdrawal_hash.as_slice());
    data[32..64].copy_from_slice(MESSAGE_PASSER_SLOT.as_slice());
    keccak256(data)
}
