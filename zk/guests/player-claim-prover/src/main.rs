//! -----------------------------------------------------
//! Guest program (RISC Zero) that binds a player token id and owner to the
//! SHA-256 content hash of the player's metadata bytes.
//!
//! • Expects a single `PlayerClaimInput` from the host
//! • Commits a `PlayerClaim` journal
//!
//! Build (nightly toolchain with riscv target):
//!   cargo +nightly risczero build \
//!       -p player-claim-prover --release \
//!       --target riscv32im-risc0-zkvm-elf
//! -----------------------------------------------------

#![no_std]
#![no_main]

extern crate alloc;

use risc0_zkvm::guest::{entry, env};
use risc0_zkvm::sha::{Impl as Sha256Impl, Sha256};
use team_assets_zk_core::claims::{PlayerClaim, PlayerClaimInput};

entry!(main);

fn main() {
    let input: PlayerClaimInput = env::read();

    // Hash the metadata bytes with the zkVM SHA gadget.
    let content_hash: [u8; 32] = Sha256Impl::hash_bytes(&input.meta)
        .as_bytes()
        .try_into()
        .unwrap();

    env::commit(&PlayerClaim {
        token_id: input.token_id,
        owner: input.owner,
        content_hash,
    });
}
