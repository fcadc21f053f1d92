//! Guardian-gated administration.

use crate::Portal;
use alloy_primitives::Address;
use game::{GameRef, GameType, Guardian, Unauthorized};

impl Portal {
    /// Mint the guardian capability for `caller`.
    ///
    /// Admin operations take the capability rather than re-checking caller
    /// identity themselves.
    pub fn guardian(&self, caller: Address) -> Result<Guardian, Unauthorized> {
        Guardian::mint(self.config.guardian, caller)
    }

    /// Change the respected game type, or refresh only the cutover when
    /// passed [`game::CUTOVER_REFRESH_TYPE`].
    pub fn set_respected_game_type(
        &mut self,
        guardian: &Guardian,
        new_type: GameType,
        now: u64,
    ) {
        self.respected.set(guardian, new_type, now);
    }

    /// Irreversibly deny a dispute game. Every withdrawal proven against it
    /// becomes permanently unfinalizable.
    pub fn blacklist_game(&mut self, guardian: &Guardian, game: GameRef) {
        self.blacklist.insert(guardian, game);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use config::PortalConfig;

    const PORTAL: Address = address!("0d83dab629f0e0F9d36c0Cbc89B69a489f0751bD");
    const GUARDIAN: Address = address!("00000000000000000000000000000000000000aa");

    fn portal() -> Portal {
        Portal::new(PortalConfig::standard(PORTAL, GUARDIAN), 1_000)
    }

    #[test]
    fn test_guardian_minting() {
        let portal = portal();
        assert!(portal.guardian(GUARDIAN).is_ok());

        let err = portal
            .guardian(address!("00000000000000000000000000000000000000bb"))
            .unwrap_err();
        assert_eq!(err.caller, address!("00000000000000000000000000000000000000bb"));
    }

    #[test]
    fn test_set_respected_game_type() {
        let mut portal = portal();
        let guardian = portal.guardian(GUARDIAN).unwrap();

        portal.set_respected_game_type(&guardian, 2, 5_000);
        assert_eq!(portal.respected_game_type(), 2);
        // Type change leaves the cutover untouched.
        assert_eq!(portal.respected_game_type_updated_at(), 1_000);

        portal.set_respected_game_type(&guardian, game::CUTOVER_REFRESH_TYPE, 6_000);
        assert_eq!(portal.respected_game_type(), 2);
        assert_eq!(portal.respected_game_type_updated_at(), 6_000);
    }

    #[test]
    fn test_blacklist_game() {
        let mut portal = portal();
        let guardian = portal.guardian(GUARDIAN).unwrap();
        let game = address!("1111111111111111111111111111111111111111");

        assert!(!portal.is_blacklisted(game));
        portal.blacklist_game(&guardian, game);
        assert!(portal.is_blacklisted(game));
    }
}
