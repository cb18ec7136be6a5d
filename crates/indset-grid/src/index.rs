//! `CellMap` — dense spatial index from coordinates to particle IDs.
//!
//! # Why a flat array
//!
//! The domain is a small, fixed, origin-centered rectangle: every coordinate
//! in `[-w/2, w/2] × [-h/2, h/2]` maps to exactly one slot of a
//! `(w + 1) × (h + 1)` backing vector after an offset shift.  Lookup,
//! insert, and clear are O(1) with no hashing, and the whole index for a
//! 100×100 grid fits in ~80 KB.
//!
//! The boundary ring (coordinates equal to `±w/2` / `±h/2`) is representable
//! here but structurally unusable — `Grid`'s strict-interior bounds test
//! keeps particles off it.  `CellMap` itself only rejects coordinates that
//! fall outside the backing array.

use indset_core::{AxialCoord, ParticleId};

use crate::{GridError, GridResult};

/// O(1) coordinate → particle-id index over a signed, origin-centered range.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellMap {
    /// Columns per row: `width + 1`.
    cols:     i32,
    /// Rows: `height + 1`.
    rows:     i32,
    x_offset: i32,
    y_offset: i32,
    cells:    Vec<Option<ParticleId>>,
}

impl CellMap {
    /// Create an empty index covering `[-width/2, width/2] × [-height/2, height/2]`.
    pub fn new(width: u32, height: u32) -> Self {
        let cols = width as i32 + 1;
        let rows = height as i32 + 1;
        Self {
            cols,
            rows,
            x_offset: width as i32 / 2,
            y_offset: height as i32 / 2,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    /// Offset-shift `coord` into a backing-array slot.
    ///
    /// Fails with [`GridError::CoordOutOfRange`] if the shifted coordinate
    /// leaves the array on either axis.
    fn slot(&self, coord: AxialCoord) -> GridResult<usize> {
        let x = coord.x + self.x_offset;
        let y = coord.y + self.y_offset;

        if x < 0 || y < 0 || x >= self.cols || y >= self.rows {
            return Err(GridError::CoordOutOfRange(coord));
        }

        Ok(y as usize * self.cols as usize + x as usize)
    }

    /// The particle id indexed at `coord`, if any.
    pub fn get(&self, coord: AxialCoord) -> GridResult<Option<ParticleId>> {
        Ok(self.cells[self.slot(coord)?])
    }

    /// Index `id` at `coord`, replacing any previous occupant.
    ///
    /// Occupancy conflicts are `Grid`'s responsibility; the index itself
    /// overwrites blindly.
    pub fn set(&mut self, coord: AxialCoord, id: ParticleId) -> GridResult<()> {
        let slot = self.slot(coord)?;
        self.cells[slot] = Some(id);
        Ok(())
    }

    /// Empty the cell at `coord`, returning the previous occupant.
    pub fn clear(&mut self, coord: AxialCoord) -> GridResult<Option<ParticleId>> {
        let slot = self.slot(coord)?;
        Ok(self.cells[slot].take())
    }

    /// `true` if `coord` maps into the backing array at all (boundary ring
    /// included).
    pub fn covers(&self, coord: AxialCoord) -> bool {
        self.slot(coord).is_ok()
    }
}
