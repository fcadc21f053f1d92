//! Guardian capability for privileged bridge mutations.
//!
//! Admin operations take an explicit [`Guardian`] value instead of checking
//! ambient caller identity at each call site. The capability is minted once
//! per call by matching the caller against the configured guardian address.

use alloy_primitives::Address;
use thiserror::Error;

/// Caller is not the guardian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("caller {caller} is not the guardian")]
pub struct Unauthorized {
    /// The rejected caller.
    pub caller: Address,
}

/// Proof of guardian authority for one admin operation.
#[derive(Debug, Clone, Copy)]
pub struct Guardian {
    holder: Address,
}

impl Guardian {
    /// Mint the capability if `caller` is the configured guardian.
    pub fn mint(configured: Address, caller: Address) -> Result<Self, Unauthorized> {
        if caller == configured {
            Ok(Self { holder: caller })
        } else {
            Err(Unauthorized { caller })
        }
    }

    /// Address holding the capability.
    pub const fn holder(&self) -> Address {
        self.holder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const GUARDIAN: Address = address!("00000000000000000000000000000000000000aa");

    #[test]
    fn test_mint_for_guardian() {
        let cap = Guardian::mint(GUARDIAN, GUARDIAN).unwrap();
        assert_eq!(cap.holder(), GUARDIAN);
    }

    #[test]
    fn test_mint_rejects_other_caller() {
        let other = address!("00000000000000000000000000000000000000bb");
        let err = Guardian::mint(GUARDIAN, other).unwrap_err();
        assert_eq!(err.caller, other);
    }
}
