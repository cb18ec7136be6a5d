//! `indset-core` — foundational types for the `indset` particle simulator.
//!
//! This crate is a dependency of every other `indset-*` crate.  It
//! intentionally has no `indset-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `ParticleId`, `ParticleKind`                          |
//! | [`coord`]    | `AxialCoord`, `Direction`                             |
//! | [`particle`] | `Particle`, `KindDescriptor`, `KindTable`             |
//! | [`rng`]      | `SimRng` (deterministic, seedable)                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod coord;
pub mod ids;
pub mod particle;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::{AxialCoord, Direction};
pub use ids::{ParticleId, ParticleKind};
pub use particle::{KindDescriptor, KindTable, Particle};
pub use rng::SimRng;
