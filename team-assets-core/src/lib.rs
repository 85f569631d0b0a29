#![no_std]

extern crate alloc;

use team_assets_types::error::Result;
use team_assets_types::roster::Roster;
use team_assets_types::token::{Address, ContentId, TokenId};

/// 32-byte identifier of the exact roster guest build a seal must attest.
pub type ProgramId = [u8; 32];

/// Read access to the player token registry.
///
/// The ownership mapping and the blanket delegation relation are owned
/// entirely by the registry; the core reads them and never writes. Backends
/// must present a consistent snapshot for the duration of a call.
pub trait PlayerRegistry {
    /// Returns the owner of a player token, failing with `TokenNotFound` for
    /// ids that were never minted.
    fn owner_of(&self, token_id: TokenId) -> Result<Address>;

    /// Whether `operator` holds blanket approval over all of `owner`'s
    /// player tokens.
    fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool;
}

/// Recording side of the team token registry.
pub trait TeamRegistry {
    /// Mints a team token for `owner` with the attested roster and content
    /// id, returning the new token id.
    fn mint_team(&mut self, owner: Address, roster: Roster, team_cid: ContentId)
        -> Result<TokenId>;
}

/// The proof acceptance function.
///
/// A pure decision over (seal, program id, digest): implementations either
/// accept or fail with `ProofRejected`. The core never inspects seal bytes.
pub trait SealVerifier {
    /// Checks that `seal` proves an execution of `program_id` whose journal
    /// hashes to `digest`.
    fn verify(&self, seal: &[u8], program_id: &ProgramId, digest: &[u8; 32]) -> Result<()>;
}

/// The team assembly orchestrator.
pub mod assemble;
/// Per-token and blanket authorization checks.
pub mod authorize;
