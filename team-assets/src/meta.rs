//! Off-chain player and team metadata with content-addressed hashing.
//!
//! Only the 32-byte content hash of a metadata value is minted on the
//! ledger; the JSON itself stays off-chain. The hash is SHA-256 over the
//! canonical JSON encoding, which matches what the player claim guest
//! computes over the same bytes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use team_assets_types::token::ContentId;

/// Off-chain player metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub jersey_number: u8,
    pub description: String,
    pub external_url: String,
    pub image: String,
    pub tier: u8,
    pub overall_rating: f64,
    pub skill_multiplier: f64,
    pub skill: Skill,
    pub attributes: Vec<Attribute>,
}

/// Skill ratings for a player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Skill {
    pub speed: u8,
    pub shooting: u8,
    pub passing: u8,
    pub dribbling: u8,
    pub defense: u8,
    pub physical: u8,
    pub goal_tending: u8,
}

/// A display attribute attached to player metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Attribute {
    pub display_type: String,
    pub trait_type: String,
    pub value: f64,
}

/// Off-chain team metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub description: String,
    pub badge: String,
}

/// Content hashing for any serializable metadata value.
pub trait ContentAddressed: Serialize {
    /// Canonical JSON bytes of the value; the hash preimage.
    fn canonical_bytes(&self) -> serde_json::Result<Vec<u8>>;

    /// SHA-256 content hash of the canonical bytes.
    fn content_hash(&self) -> serde_json::Result<ContentId>;
}

impl<T> ContentAddressed for T
where
    T: Serialize,
{
    fn canonical_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    fn content_hash(&self) -> serde_json::Result<ContentId> {
        let bytes = self.canonical_bytes()?;
        Ok(Sha256::digest(&bytes).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_player() -> Player {
        Player {
            name: "Nadia Keller".to_string(),
            jersey_number: 10,
            description: "Attacking midfielder and set-piece specialist.".to_string(),
            external_url: "https://example.com/players/nadia-keller".to_string(),
            image: "https://example.com/players/nadia-keller.jpg".to_string(),
            tier: 1,
            overall_rating: 88.0,
            skill_multiplier: 1.0,
            skill: Skill {
                speed: 84,
                shooting: 86,
                passing: 91,
                dribbling: 89,
                defense: 41,
                physical: 66,
                goal_tending: 0,
            },
            attributes: vec![Attribute {
                display_type: "Physical".to_string(),
                trait_type: "Height".to_string(),
                value: 173.0,
            }],
        }
    }

    #[test]
    fn content_hash_is_stable() {
        let player = sample_player();
        assert_eq!(player.content_hash().unwrap(), player.content_hash().unwrap());
        assert_eq!(
            player.content_hash().unwrap(),
            sample_player().content_hash().unwrap()
        );
    }

    #[test]
    fn content_hash_tracks_field_changes() {
        let player = sample_player();
        let mut changed = sample_player();
        changed.jersey_number = 7;
        assert_ne!(
            player.content_hash().unwrap(),
            changed.content_hash().unwrap()
        );
    }

    #[test]
    fn hash_matches_manual_sha256_of_canonical_bytes() {
        let team = Team {
            name: "Harbor Lights FC".to_string(),
            description: "Eleven proven regulars.".to_string(),
            badge: "https://example.com/badge.svg".to_string(),
        };
        let bytes = team.canonical_bytes().unwrap();
        let expected: ContentId = Sha256::digest(&bytes).into();
        assert_eq!(team.content_hash().unwrap(), expected);
    }
}
