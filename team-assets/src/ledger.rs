//! In-memory token ledgers backing the core registry traits.
//!
//! Mutating operations take `&mut self`; the embedding environment must
//! serialize state-mutating calls (a single lock or an actor per ledger) so
//! that no authorization check observes a mid-transfer state.

use std::collections::{BTreeMap, BTreeSet};

use team_assets_core::{PlayerRegistry, TeamRegistry};
use team_assets_types::error::{Error, Result};
use team_assets_types::roster::Roster;
use team_assets_types::token::{Address, ContentId, TokenId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlayerRecord {
    owner: Address,
    content_hash: ContentId,
}

/// Ledger of player tokens and the blanket delegation relation.
#[derive(Debug, Default)]
pub struct PlayerLedger {
    tokens: BTreeMap<TokenId, PlayerRecord>,
    approvals: BTreeSet<(Address, Address)>,
}

impl PlayerLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints `token_id` for `caller` with the given content hash.
    ///
    /// Ids are caller-supplied; anyone may mint any unused id. Fails with
    /// `TokenAlreadyMinted` on collision.
    pub fn mint(
        &mut self,
        caller: Address,
        token_id: TokenId,
        content_hash: ContentId,
    ) -> Result<()> {
        if self.tokens.contains_key(&token_id) {
            return Err(Error::TokenAlreadyMinted(token_id));
        }
        self.tokens.insert(
            token_id,
            PlayerRecord {
                owner: caller,
                content_hash,
            },
        );
        log::debug!("minted player token {token_id} for {caller}");
        Ok(())
    }

    /// Transfers `token_id` to `to`.
    ///
    /// The caller must be the owner or hold blanket approval from the owner.
    pub fn transfer(&mut self, caller: Address, to: Address, token_id: TokenId) -> Result<()> {
        let record = self
            .tokens
            .get_mut(&token_id)
            .ok_or(Error::TokenNotFound(token_id))?;
        let owner = record.owner;
        if caller != owner && !self.approvals.contains(&(owner, caller)) {
            return Err(Error::TransferForbidden(token_id));
        }
        record.owner = to;
        log::debug!("transferred player token {token_id} from {owner} to {to}");
        Ok(())
    }

    /// Grants or revokes blanket approval from `owner` to `operator`.
    pub fn set_approval_for_all(&mut self, owner: Address, operator: Address, approved: bool) {
        if approved {
            self.approvals.insert((owner, operator));
        } else {
            self.approvals.remove(&(owner, operator));
        }
    }

    /// Content hash recorded for a token at mint time.
    pub fn content_hash_of(&self, token_id: TokenId) -> Result<ContentId> {
        self.tokens
            .get(&token_id)
            .map(|record| record.content_hash)
            .ok_or(Error::TokenNotFound(token_id))
    }

    /// Metadata URI for a token: the content hash rendered as a hash URI.
    ///
    /// The hash itself stays opaque; resolution is an off-chain concern.
    pub fn token_uri(&self, token_id: TokenId) -> Result<String> {
        let content_hash = self.content_hash_of(token_id)?;
        Ok(format!("sha256:{}", hex::encode(content_hash)))
    }

    /// Ids owned by `owner`, in ascending order.
    pub fn tokens_of(&self, owner: Address) -> Vec<TokenId> {
        self.tokens
            .iter()
            .filter(|(_, record)| record.owner == owner)
            .map(|(token_id, _)| *token_id)
            .collect()
    }

    /// Number of minted player tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no player tokens have been minted.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl PlayerRegistry for PlayerLedger {
    fn owner_of(&self, token_id: TokenId) -> Result<Address> {
        self.tokens
            .get(&token_id)
            .map(|record| record.owner)
            .ok_or(Error::TokenNotFound(token_id))
    }

    fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool {
        self.approvals.contains(&(owner, operator))
    }
}

/// An attested team token record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamRecord {
    /// Owner the team was minted for.
    pub owner: Address,
    /// The exact roster that was proven. Never re-validated after minting.
    pub roster: Roster,
    /// Opaque team content identifier.
    pub team_cid: ContentId,
}

/// Ledger of attested team tokens with ledger-assigned sequential ids.
#[derive(Debug, Default)]
pub struct TeamLedger {
    teams: BTreeMap<TokenId, TeamRecord>,
    next_id: TokenId,
}

impl TeamLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the owner of a team token.
    pub fn owner_of(&self, token_id: TokenId) -> Result<Address> {
        self.get(token_id).map(|record| record.owner)
    }

    /// Returns the attested roster of a team token.
    pub fn roster_of(&self, token_id: TokenId) -> Result<Roster> {
        self.get(token_id).map(|record| record.roster)
    }

    /// Returns the content id of a team token.
    pub fn content_id_of(&self, token_id: TokenId) -> Result<ContentId> {
        self.get(token_id).map(|record| record.team_cid)
    }

    /// Full record for a team token.
    pub fn get(&self, token_id: TokenId) -> Result<TeamRecord> {
        self.teams
            .get(&token_id)
            .copied()
            .ok_or(Error::TokenNotFound(token_id))
    }

    /// Number of minted team tokens.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Whether no team tokens have been minted.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl TeamRegistry for TeamLedger {
    fn mint_team(&mut self, owner: Address, roster: Roster, team_cid: ContentId) -> Result<TokenId> {
        let token_id = self.next_id;
        self.next_id += 1;
        self.teams.insert(
            token_id,
            TeamRecord {
                owner,
                roster,
                team_cid,
            },
        );
        log::debug!("minted team token {token_id} for {owner}");
        Ok(token_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: Address = Address([0x01; 20]);
    const BOB: Address = Address([0x02; 20]);
    const CAROL: Address = Address([0x03; 20]);

    #[test]
    fn mint_collision_fails_second_attempt() {
        let mut ledger = PlayerLedger::new();
        ledger.mint(ALICE, 1, [0u8; 32]).unwrap();
        assert_eq!(
            ledger.mint(BOB, 1, [1u8; 32]),
            Err(Error::TokenAlreadyMinted(1))
        );
        // The first record is untouched.
        assert_eq!(ledger.owner_of(1), Ok(ALICE));
        assert_eq!(ledger.content_hash_of(1), Ok([0u8; 32]));
    }

    #[test]
    fn distinct_ids_assign_independent_ownership() {
        let mut ledger = PlayerLedger::new();
        ledger.mint(ALICE, 1, [0u8; 32]).unwrap();
        ledger.mint(BOB, 2, [0u8; 32]).unwrap();
        assert_eq!(ledger.owner_of(1), Ok(ALICE));
        assert_eq!(ledger.owner_of(2), Ok(BOB));
    }

    #[test]
    fn owner_can_transfer() {
        let mut ledger = PlayerLedger::new();
        ledger.mint(ALICE, 1, [0u8; 32]).unwrap();
        ledger.transfer(ALICE, BOB, 1).unwrap();
        assert_eq!(ledger.owner_of(1), Ok(BOB));
    }

    #[test]
    fn blanket_delegate_can_transfer() {
        let mut ledger = PlayerLedger::new();
        ledger.mint(ALICE, 1, [0u8; 32]).unwrap();
        ledger.set_approval_for_all(ALICE, BOB, true);
        ledger.transfer(BOB, CAROL, 1).unwrap();
        assert_eq!(ledger.owner_of(1), Ok(CAROL));
    }

    #[test]
    fn stranger_cannot_transfer() {
        let mut ledger = PlayerLedger::new();
        ledger.mint(ALICE, 1, [0u8; 32]).unwrap();
        assert_eq!(
            ledger.transfer(BOB, CAROL, 1),
            Err(Error::TransferForbidden(1))
        );
        assert_eq!(ledger.owner_of(1), Ok(ALICE));
    }

    #[test]
    fn approval_revocation_is_effective() {
        let mut ledger = PlayerLedger::new();
        ledger.mint(ALICE, 1, [0u8; 32]).unwrap();
        ledger.set_approval_for_all(ALICE, BOB, true);
        assert!(ledger.is_approved_for_all(ALICE, BOB));
        ledger.set_approval_for_all(ALICE, BOB, false);
        assert!(!ledger.is_approved_for_all(ALICE, BOB));
        assert_eq!(
            ledger.transfer(BOB, CAROL, 1),
            Err(Error::TransferForbidden(1))
        );
    }

    #[test]
    fn enumerates_tokens_by_owner() {
        let mut ledger = PlayerLedger::new();
        ledger.mint(ALICE, 5, [0u8; 32]).unwrap();
        ledger.mint(BOB, 3, [0u8; 32]).unwrap();
        ledger.mint(ALICE, 1, [0u8; 32]).unwrap();
        assert_eq!(ledger.tokens_of(ALICE), [1, 5]);
        assert_eq!(ledger.tokens_of(BOB), [3]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn token_uri_renders_content_hash() {
        let mut ledger = PlayerLedger::new();
        let mut hash = [0u8; 32];
        hash[0] = 0xab;
        ledger.mint(ALICE, 1, hash).unwrap();
        let uri = ledger.token_uri(1).unwrap();
        assert!(uri.starts_with("sha256:ab00"));
        assert_eq!(ledger.token_uri(2), Err(Error::TokenNotFound(2)));
    }

    #[test]
    fn team_ledger_assigns_sequential_ids() {
        let mut ledger = TeamLedger::new();
        let roster: Roster = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        assert_eq!(ledger.mint_team(ALICE, roster, [0u8; 32]), Ok(0));
        assert_eq!(ledger.mint_team(BOB, roster, [1u8; 32]), Ok(1));
        assert_eq!(ledger.roster_of(0), Ok(roster));
        assert_eq!(ledger.owner_of(1), Ok(BOB));
        assert_eq!(ledger.content_id_of(1), Ok([1u8; 32]));
        assert_eq!(ledger.get(2), Err(Error::TokenNotFound(2)));
    }
}
