//! Canonical journal codec for attested team rosters.
//!
//! The journal is the contract between the roster guest program and any
//! verifier: the guest commits exactly these bytes, and the verifier
//! recomputes their digest before checking the seal. Any divergence breaks
//! soundness for every future proof, so the encoding is fixed-width
//! ABI-style words with no reordering, deduplication, or normalization of
//! roster entries.

use risc0_zkvm::sha::{Impl as Sha256Impl, Sha256};
use serde::{Deserialize, Serialize};
use team_assets_types::roster::{Roster, TEAM_SIZE};
use team_assets_types::token::{ContentId, TokenId};

/// Encoded journal length: one 32-byte word for the content id plus one per
/// roster entry.
pub const JOURNAL_LEN: usize = 32 * (1 + TEAM_SIZE);

/// The claimed composition of a team: content id plus ordered roster.
///
/// Ephemeral: exists only during proving and verification, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamJournal {
    /// Opaque content identifier for the team metadata.
    pub team_cid: ContentId,
    /// Ordered player token ids. Duplicate entries are not rejected here.
    pub roster: Roster,
}

impl TeamJournal {
    /// Encodes the journal as fixed-width words.
    ///
    /// Layout: `team_cid || id[0] .. id[10]`, each id left-padded to a
    /// 32-byte big-endian word. Roster order is preserved verbatim.
    pub fn encode(&self) -> [u8; JOURNAL_LEN] {
        let mut bytes = [0u8; JOURNAL_LEN];
        bytes[..32].copy_from_slice(&self.team_cid);
        for (slot, id) in self.roster.iter().enumerate() {
            let start = 32 * (1 + slot);
            bytes[start..start + 32].copy_from_slice(&abi_word(*id));
        }
        bytes
    }

    /// SHA-256 digest of the encoded journal.
    ///
    /// Hashed with the zkVM SHA implementation so the guest and host derive
    /// identical digests from identical journals.
    pub fn digest(&self) -> [u8; 32] {
        Sha256Impl::hash_bytes(&self.encode())
            .as_bytes()
            .try_into()
            .unwrap()
    }
}

/// Left-pads a token id into a 32-byte big-endian word.
fn abi_word(id: TokenId) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&id.to_be_bytes());
    word
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn sample_journal() -> TeamJournal {
        TeamJournal {
            team_cid: [0xaa; 32],
            roster: [3, 1, 4, 1, 5, 9, 2, 6, 53, 58, 97],
        }
    }

    #[test]
    fn digest_is_deterministic() {
        let journal = sample_journal();
        assert_eq!(journal.digest(), journal.digest());
        assert_eq!(journal.digest(), sample_journal().digest());
    }

    #[test]
    fn encoding_layout_is_fixed_width_words() {
        let journal = sample_journal();
        let bytes = journal.encode();

        assert_eq!(bytes.len(), JOURNAL_LEN);
        assert_eq!(&bytes[..32], &journal.team_cid);

        // Word for roster slot 5 (id 9): 24 zero bytes then the id in
        // big-endian.
        let word = &bytes[32 * 6..32 * 7];
        assert_eq!(&word[..24], &[0u8; 24]);
        assert_eq!(&word[24..], &9u64.to_be_bytes());
    }

    #[test]
    fn swapping_roster_entries_changes_digest() {
        let journal = sample_journal();
        let mut permuted = journal;
        permuted.roster.swap(0, 1);

        // Same set of ids, different order: a different claim.
        assert_ne!(journal.digest(), permuted.digest());
    }

    #[test]
    fn single_entry_change_changes_digest() {
        let journal = sample_journal();
        let mut changed = journal;
        changed.roster[10] = 98;
        assert_ne!(journal.digest(), changed.digest());
    }

    #[test]
    fn content_id_change_changes_digest() {
        let journal = sample_journal();
        let mut changed = journal;
        changed.team_cid[31] ^= 0x01;
        assert_ne!(journal.digest(), changed.digest());
    }
}
