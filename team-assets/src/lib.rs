//! High-level API for the team-assets protocol.
//!
//! Re-exports the protocol crates and provides in-memory ledger backends for
//! the core registry traits plus the off-chain player metadata model.

/// Re-export of the protocol core.
pub use team_assets_core as core;

/// Re-export of the domain types.
pub use team_assets_types as types;

/// Re-export of the journal codec and claim types.
pub use team_assets_zk_core as zk_core;

/// In-memory player and team ledgers.
pub mod ledger;
/// Player metadata model and content hashing.
pub mod meta;
