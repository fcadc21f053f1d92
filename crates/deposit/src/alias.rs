//! One-way address aliasing for contract depositors.
//!
//! A contract on the primary ledger and a contract on the derived ledger can
//! occupy the same address with different code. Deposits originated by a
//! contract therefore carry an aliased sender so the two identities cannot
//! collide.

use alloy_primitives::{Address, U160};

/// Offset added (mod 2^160) to a contract caller's address.
pub const ALIAS_OFFSET: Address = Address::new([
    0x11, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x11, 0x11,
]);

/// Alias a contract caller's address for the derived ledger.
pub fn apply_alias(address: Address) -> Address {
    let aliased = to_u160(address).wrapping_add(to_u160(ALIAS_OFFSET));
    Address::from(aliased.to_be_bytes::<20>())
}

/// Recover the primary-ledger address behind an alias.
pub fn undo_alias(address: Address) -> Address {
    let original = to_u160(address).wrapping_sub(to_u160(ALIAS_OFFSET));
    Address::from(original.to_be_bytes::<20>())
}

fn to_u160(address: Address) -> U160 {
    U160::from_be_bytes::<20>(address.into_array())
}
