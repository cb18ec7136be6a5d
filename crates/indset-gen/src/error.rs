//! Error types for indset-gen.

use indset_grid::GridError;
use indset_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("at least 1 particle needs to be generated")]
    NoParticles,

    #[error("at least one weighted kind is required, with positive total weight")]
    BadWeights,

    /// The grid cannot host the requested particle count: the placement
    /// loop ran out of attempts without finding a valid configuration.
    #[error("could not place particle {placed} of {requested} after {attempts} attempts")]
    Exhausted {
        placed:    usize,
        requested: usize,
        attempts:  usize,
    },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Sim(#[from] SimError),
}

/// Alias for `Result<T, GenError>`.
pub type GenResult<T> = Result<T, GenError>;
