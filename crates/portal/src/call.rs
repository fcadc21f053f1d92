//! Call-scoped context and the bounded-cost target-call substrate.

use crate::Portal;
use alloy_primitives::{Address, Bytes, U256};

/// Ambient facts about one top-level portal call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallEnv {
    /// The immediate caller of the portal operation.
    pub caller: Address,
    /// The ledger's current timestamp. Monotonic, coarse, adversarially
    /// influenced within small bounds.
    pub timestamp: u64,
}

/// Guard state machine around the finalization target call.
///
/// Non-idle only strictly inside one finalization's target call; doubles as
/// the originating-sender slot for that call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallContext {
    /// No finalization in flight.
    #[default]
    Idle,
    /// A target call is executing on behalf of this derived-ledger sender.
    InCall(Address),
}

/// A finalization's outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRequest {
    /// Call target.
    pub target: Address,
    /// Minimum execution budget the callee must receive.
    pub min_gas: U256,
    /// Value forwarded with the call.
    pub value: U256,
    /// Calldata forwarded to the target.
    pub data: Bytes,
}

/// Result of the outbound call. Return data is deliberately not carried:
/// the callee must not be able to force cost on the portal by returning
/// large data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallOutcome {
    /// Whether the call completed successfully.
    pub success: bool,
}

/// Host execution substrate for the finalization target call.
///
/// Implementations must grant the callee at least `request.min_gas` of
/// execution budget and cap any response-size-driven cost. The callee may
/// call back into the portal through the `portal` handle; the portal's
/// reentrancy guard rejects nested finalizations.
pub trait TargetCaller {
    /// Execute the call and report its outcome.
    fn call(&mut self, portal: &mut Portal, request: CallRequest) -> CallOutcome;
}
