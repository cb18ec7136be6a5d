//! `indset-io` — file formats for the indset simulator.
//!
//! Two surfaces:
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`gridtxt`] | Grid text format loader/saver                             |
//! | [`metrics`] | Semicolon-delimited metrics CSV, appended between batches |
//!
//! # Grid text format
//!
//! ```text
//! <width> <height>
//! <particle_count>
//! <x> <y> [<kind_index>]
//! ...
//! ```
//!
//! `width` and `height` must both be even (the grid is centered at the
//! origin with symmetric bounds); `kind_index` defaults to 0 when omitted
//! and indexes a caller-supplied [`indset_core::KindTable`].

pub mod error;
pub mod gridtxt;
pub mod metrics;

#[cfg(test)]
mod tests;

pub use error::{IoError, IoResult};
pub use gridtxt::{load_grid, load_grid_path, save_grid, save_grid_path};
pub use metrics::MetricsWriter;
