//! Error types for indset-grid.

use indset_core::{AxialCoord, ParticleId};
use thiserror::Error;

/// Failures of grid construction and mutation.
///
/// All variants are synchronous, local failures returned at the point of
/// detection; every mutating operation either fully succeeds or leaves the
/// grid unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size {0}x{1} must be even in both dimensions")]
    OddSize(u32, u32),

    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(AxialCoord),

    #[error("cell {0} is already occupied")]
    Occupied(AxialCoord),

    #[error("no particle at {0}")]
    NotFound(AxialCoord),

    #[error("particle {0} is already registered")]
    Duplicate(ParticleId),

    #[error("particle {0} is not registered")]
    UnknownParticle(ParticleId),

    /// The offset computation left the spatial index's backing array.
    /// Never reachable through `Grid`, whose bounds checks run first.
    #[error("coordinate {0} maps outside the spatial index")]
    CoordOutOfRange(AxialCoord),
}

/// Alias for `Result<T, GridError>`.
pub type GridResult<T> = Result<T, GridError>;
