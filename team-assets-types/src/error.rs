use crate::alloc::string::String; // For no_std compatibility
use crate::token::{Address, TokenId};
use thiserror::Error;

/// Errors surfaced by ledgers and the team assembly protocol.
///
/// Every variant is terminal for the request that produced it: nothing is
/// partially committed and nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The referenced token id was never minted.
    #[error("token {0} does not exist")]
    TokenNotFound(TokenId),

    /// A mint collided with an existing token id.
    #[error("token {0} is already minted")]
    TokenAlreadyMinted(TokenId),

    /// The assembly operator lacks blanket approval from the caller.
    #[error("player approval required from owner {0}")]
    PlayerApprovalRequired(Address),

    /// The caller neither owns nor is delegated for a roster entry.
    #[error("caller is not authorized for token {0}")]
    Unauthorized(TokenId),

    /// The supplied seal did not verify against the derived journal digest.
    #[error("proof rejected: {0}")]
    ProofRejected(String),

    /// A transfer was attempted by a party without rights over the token.
    #[error("transfer of token {0} forbidden")]
    TransferForbidden(TokenId),
}

/// Result type for protocol operations.
pub type Result<T> = core::result::Result<T, Error>;
