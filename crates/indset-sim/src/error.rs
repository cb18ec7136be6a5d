//! Error types for indset-sim.

use indset_core::AxialCoord;
use indset_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The initial independent-set precondition (or another constructor
    /// input) is violated.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A proposed destination had zero prospective neighbors, which is
    /// arithmetically impossible for a unit step — the mover itself is
    /// always adjacent to its destination.  Indicates a corrupted grid;
    /// aborts the run rather than silently permitting the move.
    #[error("broken invariant: destination {coord} counts no neighbors, not even the mover")]
    BrokenInvariant { coord: AxialCoord },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;
