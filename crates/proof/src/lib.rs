//! Output-root reconstruction and the inclusion-proof verifier contract.
//!
//! The bridge consumes inclusion proofs as a black box: this crate defines
//! the verifier trait, the output-root proof bundle, and the deterministic
//! derivations (output root hash, withdrawal storage key) both sides of the
//! bridge must agree on.

pub mod output;
pub mod verifier;

pub use output::{
    hash_output_root, withdrawal_storage_key, OutputRootProof, MESSAGE_PASSER_SLOT,
    OUTPUT_VERSION_V0,
};
pub use verifier::{ProofVerifier, SENT_MESSAGE_VALUE};
