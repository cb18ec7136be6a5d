//! Grid coordinates and cardinal directions.
//!
//! `AxialCoord` is a plain Cartesian integer pair — the "axial" name is
//! historical, the basis is not hexagonal.  Coordinates are signed: the grid
//! is centered at the origin with symmetric bounds, so positions range over
//! `[-width/2, width/2] × [-height/2, height/2]`.

use std::fmt;
use std::ops::Add;

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four cardinal unit vectors, enumerated counterclockwise from
/// east.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    East  = 0,
    North = 1,
    West  = 2,
    South = 3,
}

impl Direction {
    /// All four directions in enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// The unit vector of this direction.
    #[inline]
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::East  => (1, 0),
            Direction::North => (0, 1),
            Direction::West  => (-1, 0),
            Direction::South => (0, -1),
        }
    }

    /// Enumeration index (0–3).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotate counterclockwise by `by` quarter turns (negative = clockwise).
    ///
    /// Defined for any signed offset: the result is taken modulo 4.
    #[inline]
    pub fn rotated(self, by: i8) -> Direction {
        // Widened before adding: discriminant + offset can exceed i8::MAX.
        let idx = (self as i32 + i32::from(by)).rem_euclid(4) as usize;
        Direction::ALL[idx]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::East  => "E",
            Direction::North => "N",
            Direction::West  => "W",
            Direction::South => "S",
        };
        f.write_str(name)
    }
}

// ── AxialCoord ────────────────────────────────────────────────────────────────

/// An integer position on the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxialCoord {
    pub x: i32,
    pub y: i32,
}

impl AxialCoord {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one unit step away in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> AxialCoord {
        let (dx, dy) = direction.vector();
        AxialCoord::new(self.x + dx, self.y + dy)
    }

    /// The four cardinally adjacent coordinates, in [`Direction::ALL`] order.
    ///
    /// Purely arithmetic — may yield positions outside any particular grid.
    #[inline]
    pub fn neighbor_positions(self) -> [AxialCoord; 4] {
        [
            self.step(Direction::East),
            self.step(Direction::North),
            self.step(Direction::West),
            self.step(Direction::South),
        ]
    }

    /// `true` if `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: AxialCoord) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl Add<(i32, i32)> for AxialCoord {
    type Output = AxialCoord;
    #[inline]
    fn add(self, (dx, dy): (i32, i32)) -> AxialCoord {
        AxialCoord::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for AxialCoord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        AxialCoord::new(x, y)
    }
}

impl fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
