#![no_std]

extern crate alloc;

/// Error taxonomy shared across the workspace.
pub mod error;
/// Fixed-size team roster type.
pub mod roster;
/// Account, token, and content identifier types.
pub mod token;
