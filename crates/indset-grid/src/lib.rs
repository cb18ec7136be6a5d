//! `indset-grid` — the particle state store for the indset simulator.
//!
//! # Layered design
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`index`]    | `CellMap` — dense coordinate → particle-id index          |
//! | [`registry`] | `ParticleRegistry` — identity set + per-kind buckets      |
//! | [`grid`]     | `Grid` — bounds, mutation, neighbor/connectivity queries  |
//! | [`error`]    | `GridError`, `GridResult`                                 |
//!
//! `CellMap` and `ParticleRegistry` always describe the same particle set:
//! a particle is registered if and only if it is indexed at its own
//! coordinate.  `Grid`'s mutating operations are the *only* way to change
//! either structure — neither is exposed for independent mutation.

pub mod error;
pub mod grid;
pub mod index;
pub mod registry;


pub use error::{GridError, GridResult};
pub use grid::{Grid, KindFilter};
pub use index::CellMap;
pub use registry::ParticleRegistry;
