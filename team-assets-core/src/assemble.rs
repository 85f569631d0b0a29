//! Team assembly: the acceptance protocol for externally proven rosters.

use team_assets_types::error::{Error, Result};
use team_assets_types::roster::Roster;
use team_assets_types::token::{Address, ContentId, TokenId};
use team_assets_zk_core::journal::TeamJournal;

use crate::authorize::{check_operator_approval, is_authorized};
use crate::{PlayerRegistry, ProgramId, SealVerifier, TeamRegistry};

/// Immutable configuration for a [`TeamAssembly`] instance.
///
/// Fixed at construction for the orchestrator's lifetime; there is no
/// ambient or global lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyConfig {
    /// Registry identity of the assembly operator. Callers must
    /// blanket-approve this address in the player registry before building
    /// teams.
    pub operator: Address,
    /// Image id of the roster guest build accepted by the proof gate.
    /// Changing the guest build is a protocol break.
    pub roster_program_id: ProgramId,
}

/// Orchestrates roster authorization and proof acceptance.
///
/// The registries and verifier are injected capabilities, which keeps the
/// protocol testable against mock backends. The orchestrator itself holds no
/// mutable protocol state.
pub struct TeamAssembly<P, T, V> {
    config: AssemblyConfig,
    players: P,
    teams: T,
    verifier: V,
}

impl<P, T, V> TeamAssembly<P, T, V>
where
    P: PlayerRegistry,
    T: TeamRegistry,
    V: SealVerifier,
{
    /// Creates an orchestrator over the given backends.
    pub fn new(config: AssemblyConfig, players: P, teams: T, verifier: V) -> Self {
        Self {
            config,
            players,
            teams,
            verifier,
        }
    }

    /// The configuration this orchestrator was constructed with.
    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Read access to the player registry backend.
    pub fn players(&self) -> &P {
        &self.players
    }

    /// Read access to the team registry backend.
    pub fn teams(&self) -> &T {
        &self.teams
    }

    /// Verifies a claimed roster and mints the team token.
    ///
    /// Three gates run in order, cheapest first, and the first failure
    /// aborts the call with nothing recorded:
    ///
    /// 1. `caller` must have blanket-approved the operator in the player
    ///    registry (`PlayerApprovalRequired`);
    /// 2. every roster entry, in roster order, must be owned by or delegated
    ///    to `caller` (`Unauthorized` carrying the first failing id,
    ///    `TokenNotFound` propagated);
    /// 3. the seal must prove the roster guest committed exactly the journal
    ///    derived from (`roster`, `team_cid`) (`ProofRejected`).
    ///
    /// Duplicate roster entries are not rejected; the same id is checked
    /// twice with the same outcome.
    pub fn build_team(
        &mut self,
        caller: Address,
        roster: Roster,
        team_cid: ContentId,
        seal: &[u8],
    ) -> Result<TokenId> {
        check_operator_approval(&self.players, caller, self.config.operator)?;

        for token_id in roster {
            if !is_authorized(&self.players, token_id, caller)? {
                return Err(Error::Unauthorized(token_id));
            }
        }

        let journal = TeamJournal { team_cid, roster };
        self.verifier
            .verify(seal, &self.config.roster_program_id, &journal.digest())?;

        self.teams.mint_team(caller, roster, team_cid)
    }
}
