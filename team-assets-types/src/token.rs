use core::fmt;

use serde::{Deserialize, Serialize};

/// Unsigned token identifier for players and teams.
pub type TokenId = u64;

/// Opaque 32-byte content identifier referencing off-chain metadata.
///
/// Never decoded or validated by this workspace; the core only passes it
/// through and binds it into journal digests.
pub type ContentId = [u8; 32];

/// A 20-byte account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; 20]);
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn address_displays_as_hex() {
        let mut bytes = [0u8; 20];
        bytes[0] = 0xca;
        bytes[19] = 0x0f;
        let address = Address(bytes);
        assert_eq!(
            address.to_string(),
            "0xca0000000000000000000000000000000000000f"
        );
    }
}
