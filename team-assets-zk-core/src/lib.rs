#![no_std]

extern crate alloc;

/// Shared types for composing player claim receipts into a roster proof.
pub mod claims;
/// Canonical team journal codec and digest helpers.
pub mod journal;
