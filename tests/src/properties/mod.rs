//! Property-based invariants.

pub mod crypto;
pub mod signing;
