//! Receipt composition types shared by the roster guest and the host prover.

use alloc::vec::Vec;

use risc0_zkvm::ReceiptClaim;
use serde::{Deserialize, Serialize};
use team_assets_types::token::{Address, ContentId, TokenId};

/// Journal committed by the player claim guest for a single roster slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerClaim {
    /// Player token id the claim binds.
    pub token_id: TokenId,
    /// Owner the claim was produced for.
    pub owner: Address,
    /// SHA-256 content hash of the player metadata bytes.
    pub content_hash: ContentId,
}

/// Host input for the player claim guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerClaimInput {
    /// Player token id to bind.
    pub token_id: TokenId,
    /// Owner to bind.
    pub owner: Address,
    /// Serialized player metadata; hashed inside the guest.
    pub meta: Vec<u8>,
}

/// Receipt claim wrapper used for assumption composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptClaimInput {
    /// Receipt claim for a player claim guest execution.
    pub claim: ReceiptClaim,
}

/// Input payload for the roster guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterInput {
    /// Owner every player claim must have been produced for.
    pub owner: Address,
    /// Opaque team content identifier committed into the journal.
    pub team_cid: ContentId,
    /// One verified player claim per roster slot, in roster order.
    pub player_claims: Vec<ReceiptClaimInput>,
}
