use anyhow::Result;
use risc0_zkvm::default_prover;
use team_assets::ledger::{PlayerLedger, TeamLedger};
use team_assets::meta::{Attribute, ContentAddressed, Player, Skill, Team};
use team_assets_core::assemble::{AssemblyConfig, TeamAssembly};
use team_assets_types::roster::{Roster, TEAM_SIZE};
use team_assets_types::token::Address;
use team_assets_zk_verifier::prove::{default_elf_dir, prove_team, RosterElfs};
use team_assets_zk_verifier::seal::{encode_seal_blob, Risc0SealVerifier};

/// Mints a demo squad, proves its roster, and assembles the team end to end.
fn main() -> Result<()> {
    env_logger::init();

    let caller = Address([0x11; 20]);
    let operator = Address([0x22; 20]);

    // Mint eleven players for the caller and grant the operator blanket
    // approval.
    let mut players = PlayerLedger::new();
    let mut token_ids: Roster = [0; TEAM_SIZE];
    let mut metas = Vec::with_capacity(TEAM_SIZE);
    for slot in 0..TEAM_SIZE {
        let player = demo_player(slot);
        let meta = player.canonical_bytes()?;
        let content_hash = player.content_hash()?;
        players.mint(caller, slot as u64, content_hash)?;
        token_ids[slot] = slot as u64;
        metas.push(meta);
    }
    players.set_approval_for_all(caller, operator, true);
    println!("minted {} player tokens for {caller}", players.len());

    let team_cid = Team {
        name: "Harbor Lights FC".to_string(),
        description: "Demo squad for the roster prover.".to_string(),
        badge: "https://example.com/badge.svg".to_string(),
    }
    .content_hash()?;

    // Prove the roster.
    let elfs = RosterElfs::load_from_dir(&default_elf_dir())?;
    let program_id = elfs.roster_program_id()?;
    println!("roster program id: {}", hex::encode(program_id));

    let metas: [Vec<u8>; TEAM_SIZE] = metas.try_into().expect("eleven metadata entries");
    let prover = default_prover();
    println!("proving player claims and roster composition...");
    let proof = prove_team(prover.as_ref(), &elfs, caller, &token_ids, &metas, team_cid)?;
    let seal = encode_seal_blob(&proof.receipt)?;

    // Assemble the team through the full acceptance protocol.
    let config = AssemblyConfig {
        operator,
        roster_program_id: program_id,
    };
    let mut assembly = TeamAssembly::new(config, players, TeamLedger::new(), Risc0SealVerifier);
    let team_id = assembly.build_team(caller, token_ids, team_cid, &seal)?;

    let record = assembly.teams().get(team_id)?;
    println!("\nTeam assembled!");
    println!("  team_id:        {team_id}");
    println!("  owner:          {}", record.owner);
    println!("  roster:         {:?}", record.roster);
    println!("  team_cid:       {}", hex::encode(record.team_cid));
    println!("  journal_digest: {}", hex::encode(proof.journal.digest()));
    println!("  seal_size:      {} bytes", seal.len());

    Ok(())
}

fn demo_player(slot: usize) -> Player {
    Player {
        name: format!("Demo Player {slot}"),
        jersey_number: slot as u8 + 1,
        description: format!("Squad slot {slot} for the roster prover demo."),
        external_url: format!("https://example.com/players/{slot}"),
        image: format!("https://example.com/players/{slot}.jpg"),
        tier: 2,
        overall_rating: 75.0,
        skill_multiplier: 1.0,
        skill: Skill {
            speed: 70,
            shooting: 68,
            passing: 72,
            dribbling: 71,
            defense: 65,
            physical: 69,
            goal_tending: if slot == 0 { 80 } else { 0 },
        },
        attributes: vec![Attribute {
            display_type: "Physical".to_string(),
            trait_type: "Height".to_string(),
            value: 180.0,
        }],
    }
}
