//! -----------------------------------------------------
//! Guest program (RISC Zero) that verifies eleven player claim receipts and
//! commits the canonical team journal.
//!
//! • Expects a single `RosterInput` from the host
//! • Verifies each player claim receipt via `env::verify_integrity`
//! • Requires every claim to carry the submitted owner
//! • Commits the ABI-encoded `TeamJournal` bytes
//!
//! Build (nightly toolchain with riscv target):
//!   cargo +nightly risczero build \
//!       -p team-roster-prover --release \
//!       --target riscv32im-risc0-zkvm-elf
//! -----------------------------------------------------

#![no_std]
#![no_main]

extern crate alloc;

use risc0_zkvm::guest::{entry, env};
use risc0_zkvm::serde::from_slice;
use risc0_zkvm::ReceiptClaim;
use team_assets_types::roster::{Roster, TEAM_SIZE};
use team_assets_zk_core::claims::{PlayerClaim, RosterInput};
use team_assets_zk_core::journal::TeamJournal;

entry!(main);

fn main() {
    let input: RosterInput = env::read();

    if input.player_claims.len() != TEAM_SIZE {
        panic!("expected {} player claims", TEAM_SIZE);
    }

    // Verify each player claim receipt and collect roster ids in claim
    // order.
    let mut roster: Roster = [0; TEAM_SIZE];
    for (slot, claim) in input.player_claims.iter().enumerate() {
        env::verify_integrity(&claim.claim).expect("player claim integrity failed");
        let player: PlayerClaim =
            decode_journal(&claim.claim).expect("player claim decode failed");
        if player.owner != input.owner {
            panic!("player claim owner mismatch");
        }
        roster[slot] = player.token_id;
    }

    let journal = TeamJournal {
        team_cid: input.team_cid,
        roster,
    };
    env::commit_slice(&journal.encode());
}

/// Decodes the journal from a receipt claim.
fn decode_journal<T: serde::de::DeserializeOwned>(claim: &ReceiptClaim) -> Option<T> {
    let output = claim.output.as_value().ok()?;
    let output = output.as_ref()?;
    let journal = output.journal.as_value().ok()?;
    from_slice::<T, u8>(journal).ok()
}
