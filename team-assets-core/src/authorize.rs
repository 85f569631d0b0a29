//! Authorization checks over the player registry.

use team_assets_types::error::{Error, Result};
use team_assets_types::token::{Address, TokenId};

use crate::PlayerRegistry;

/// Whether `caller` may use `token_id` when forming a team.
///
/// True iff the caller owns the token or holds blanket approval from its
/// owner. Fails with `TokenNotFound` when the id was never minted; callers
/// treat that as not authorized. Pure read-composition over two registry
/// queries.
pub fn is_authorized<R: PlayerRegistry + ?Sized>(
    registry: &R,
    token_id: TokenId,
    caller: Address,
) -> Result<bool> {
    let owner = registry.owner_of(token_id)?;
    Ok(owner == caller || registry.is_approved_for_all(owner, caller))
}

/// Requires that `operator` holds blanket approval from `caller`.
///
/// Distinct from per-token authorization: this keeps the assembly operator
/// from holding or moving the caller's player tokens without explicit
/// consent, independent of who is authorized on each individual id.
pub fn check_operator_approval<R: PlayerRegistry + ?Sized>(
    registry: &R,
    caller: Address,
    operator: Address,
) -> Result<()> {
    if registry.is_approved_for_all(caller, operator) {
        Ok(())
    } else {
        Err(Error::PlayerApprovalRequired(caller))
    }
}
