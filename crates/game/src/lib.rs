//! Dispute game oracle surface and game-type administration.
//!
//! This crate defines:
//! - The contract the bridge requires from a dispute game (`DisputeGame`) and
//!   from the collection of games (`GameDirectory`)
//! - The respected game type registry with its cutover timestamp
//! - The blacklist override for compromised games
//! - The guardian capability that authorizes both

pub mod blacklist;
pub mod guardian;
pub mod oracle;
pub mod registry;

pub use blacklist::Blacklist;
pub use guardian::{Guardian, Unauthorized};
pub use oracle::{DisputeGame, GameDirectory, GameRef, GameStatus, GameType, RespectedProbe};
pub use registry::{RespectedGameType, CUTOVER_REFRESH_TYPE};
