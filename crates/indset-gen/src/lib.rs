//! `indset-gen` — random grid generation.
//!
//! Builds valid initial configurations for the alignment simulator by
//! rejection sampling: place a particle at a random vacant interior cell,
//! re-run the engine's grid validation, and roll the placement back if the
//! independent-set precondition broke.  Placement retries are bounded; a
//! grid too dense to host the requested count fails with
//! [`GenError::Exhausted`] instead of looping.

pub mod error;
pub mod randgen;

#[cfg(test)]
mod tests;

pub use error::{GenError, GenResult};
pub use randgen::{generate_random_alignment_grid, generate_random_grid};
