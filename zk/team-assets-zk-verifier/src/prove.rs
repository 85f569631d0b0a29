//! Proving pipeline: per-player claim proofs composed into a roster proof.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use risc0_zkvm::{compute_image_id, ExecutorEnv, Receipt};
use team_assets_core::ProgramId;
use team_assets_types::roster::{Roster, TEAM_SIZE};
use team_assets_types::token::{Address, ContentId, TokenId};
use team_assets_zk_core::claims::{PlayerClaimInput, ReceiptClaimInput, RosterInput};
use team_assets_zk_core::journal::{TeamJournal, JOURNAL_LEN};

/// ELF bundle for the roster proving pipeline.
#[derive(Debug, Clone)]
pub struct RosterElfs {
    pub player_claim: Vec<u8>,
    pub team_roster: Vec<u8>,
}

impl RosterElfs {
    /// Loads guest ELF binaries from the default target directory.
    pub fn load_default() -> Result<Self> {
        Self::load_from_dir(&default_elf_dir())
    }

    /// Loads guest ELF binaries from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let player_claim = read_elf(dir, "player-claim-prover.bin")?;
        let team_roster = read_elf(dir, "team-roster-prover.bin")?;
        Ok(Self {
            player_claim,
            team_roster,
        })
    }

    /// Image id of the roster guest build; the protocol's program
    /// identifier.
    pub fn roster_program_id(&self) -> Result<ProgramId> {
        let digest = compute_image_id(&self.team_roster)
            .context("failed to compute roster guest image id")?;
        let mut program_id = [0u8; 32];
        program_id.copy_from_slice(digest.as_bytes());
        Ok(program_id)
    }
}

/// Returns the default ELF directory relative to the workspace root.
pub fn default_elf_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/riscv32im-risc0-zkvm-elf/docker")
}

/// Result of proving a team roster.
#[derive(Debug, Clone)]
pub struct TeamProof {
    /// Journal the roster guest committed.
    pub journal: TeamJournal,
    /// Roster guest receipt; encode with `encode_seal_blob` for submission.
    pub receipt: Receipt,
}

/// Proves one player claim per roster slot and composes the receipts into a
/// roster proof whose journal is the canonical team journal.
///
/// `metas[slot]` holds the serialized metadata for `token_ids[slot]`.
pub fn prove_team(
    prover: &dyn risc0_zkvm::Prover,
    elfs: &RosterElfs,
    owner: Address,
    token_ids: &Roster,
    metas: &[Vec<u8>; TEAM_SIZE],
    team_cid: ContentId,
) -> Result<TeamProof> {
    let mut player_claims = Vec::with_capacity(TEAM_SIZE);
    let mut player_receipts = Vec::with_capacity(TEAM_SIZE);

    // Prove each roster slot's player claim.
    for (slot, token_id) in token_ids.iter().enumerate() {
        let input = PlayerClaimInput {
            token_id: *token_id,
            owner,
            meta: metas[slot].clone(),
        };
        let receipt = prove(prover, &elfs.player_claim, &input)
            .with_context(|| format!("failed to prove player claim for slot {slot}"))?;
        player_claims.push(receipt_claim_input(&receipt, "player claim")?);
        player_receipts.push(receipt);
    }

    // Compose the claims into the roster guest.
    let roster_input = RosterInput {
        owner,
        team_cid,
        player_claims,
    };
    let mut env = ExecutorEnv::builder();
    env.write(&roster_input)?;
    for receipt in player_receipts {
        env.add_assumption(receipt);
    }
    let env = env.build()?;
    let receipt = prover.prove(env, &elfs.team_roster)?.receipt;

    let journal = decode_team_journal(&receipt.journal.bytes)?;
    log::debug!(
        "proved roster journal with digest {}",
        hex::encode(journal.digest())
    );
    Ok(TeamProof { journal, receipt })
}

/// Decodes the fixed-width journal bytes committed by the roster guest.
pub fn decode_team_journal(bytes: &[u8]) -> Result<TeamJournal> {
    if bytes.len() != JOURNAL_LEN {
        return Err(anyhow!(
            "journal length mismatch: expected {JOURNAL_LEN}, got {}",
            bytes.len()
        ));
    }

    let mut team_cid: ContentId = [0u8; 32];
    team_cid.copy_from_slice(&bytes[..32]);

    let mut roster: Roster = [0; TEAM_SIZE];
    for (slot, entry) in roster.iter_mut().enumerate() {
        let word = &bytes[32 * (1 + slot)..32 * (2 + slot)];
        if word[..24].iter().any(|byte| *byte != 0) {
            return Err(anyhow!("journal word {slot} exceeds the token id range"));
        }
        let mut id = [0u8; 8];
        id.copy_from_slice(&word[24..]);
        *entry = TokenId::from_be_bytes(id);
    }

    Ok(TeamJournal { team_cid, roster })
}

fn prove<T: serde::Serialize>(
    prover: &dyn risc0_zkvm::Prover,
    elf: &[u8],
    input: &T,
) -> Result<Receipt> {
    let env = ExecutorEnv::builder().write(input)?.build()?;
    Ok(prover.prove(env, elf)?.receipt)
}

fn receipt_claim_input(receipt: &Receipt, label: &'static str) -> Result<ReceiptClaimInput> {
    let claim = receipt
        .claim()?
        .value()
        .with_context(|| format!("{label} claim is pruned"))?;
    Ok(ReceiptClaimInput { claim })
}

fn read_elf(dir: &Path, file: &str) -> Result<Vec<u8>> {
    let path = dir.join(file);
    std::fs::read(&path).with_context(|| format!("failed to read ELF {}", path.display()))
}
