//! `indset-sim` — the Monte-Carlo alignment engine.
//!
//! # The model
//!
//! Particles occupy cells of a bounded grid under a hard structural
//! invariant: no two particles may ever be cardinal neighbors (an
//! independent set).  Each step proposes moving one random particle one
//! cell in a random direction and accepts or rejects the proposal so that
//! the invariant holds after every single step:
//!
//! ```text
//! ① new = old + direction          reject if out of bounds or occupied
//! ② n   = neighbor_count(new)      n == 1 → only the mover itself is
//!                                  adjacent; n > 1 → some other particle
//!                                  is → reject; n == 0 → corrupted state
//! ③ P   = bias ^ (sdn(new) − sdn(old))   second-degree neighbor counts
//! ④ accept iff u < P               u is a uniform draw from [0, 1)
//! ```
//!
//! The engine is single-threaded and fully synchronous; a step is a small
//! indivisible sequence of reads plus at most one grid mutation.  Parallelism
//! belongs to the caller: independent (grid, bias) runs share no state.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut sim = AlignmentSimulator::new(grid, 4.0, seed)?;
//! let accepted = sim.run_iterations(1_000_000, None)?;
//! println!("{accepted} moves accepted over {} rounds", sim.rounds());
//! ```

pub mod error;
pub mod metrics;
pub mod sim;


pub use error::{SimError, SimResult};
pub use metrics::{Metric, MetricValue};
pub use sim::{AlignmentSimulator, RejectReason, StepOutcome};
