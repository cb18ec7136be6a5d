//! The grid text format.
//!
//! Particle ids are assigned sequentially from 0 in file order on load, so a
//! loaded grid is reproducible from its file alone.  The saver writes
//! particles sorted by id and omits the kind column (the single-implicit-kind
//! scope of this format); width, height, and coordinates round-trip exactly.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use indset_core::{AxialCoord, KindTable, Particle, ParticleId, ParticleKind};
use indset_grid::Grid;

use crate::{IoError, IoResult};

/// Parse a grid from `reader`.  Kind indices are validated against `kinds`.
pub fn load_grid<R: BufRead>(reader: R, kinds: &KindTable) -> IoResult<Grid> {
    let mut lines = reader.lines().enumerate();

    let (line_no, header) = next_line(&mut lines)?;
    let fields = parse_ints(&header, line_no)?;
    let [width, height] = fields.as_slice() else {
        return Err(IoError::Parse {
            line:    line_no,
            message: format!("expected `<width> <height>`, got {} fields", fields.len()),
        });
    };
    let (width, height) = dimensions(*width, *height, line_no)?;
    let mut grid = Grid::new(width, height)?;

    let (line_no, count_line) = next_line(&mut lines)?;
    let count: usize = count_line.trim().parse().map_err(|_| IoError::Parse {
        line:    line_no,
        message: format!("expected a particle count, got {count_line:?}"),
    })?;

    for n in 0..count {
        let (line_no, entry) = next_line(&mut lines)?;
        let fields = parse_ints(&entry, line_no)?;
        let (coord, kind) = match fields.as_slice() {
            [x, y] => (coordinate(*x, *y, line_no)?, ParticleKind::BASE),
            [x, y, k] => {
                let kind = ParticleKind(u16::try_from(*k).map_err(|_| IoError::Parse {
                    line:    line_no,
                    message: format!("kind index {k} is not a valid tag"),
                })?);
                (coordinate(*x, *y, line_no)?, kind)
            }
            _ => {
                return Err(IoError::Parse {
                    line:    line_no,
                    message: format!(
                        "expected `<x> <y> [<kind>]`, got {} fields",
                        fields.len()
                    ),
                });
            }
        };

        if !kinds.contains(kind) {
            return Err(IoError::UnknownKind { line: line_no, kind: kind.0 });
        }

        grid.add_particle(Particle::new(ParticleId(n as u32), kind, coord))?;
    }

    Ok(grid)
}

/// Load a grid from the file at `path`.
pub fn load_grid_path(path: impl AsRef<Path>, kinds: &KindTable) -> IoResult<Grid> {
    load_grid(BufReader::new(File::open(path)?), kinds)
}

/// Write `grid` to `writer` in the text format.
pub fn save_grid<W: Write>(mut writer: W, grid: &Grid) -> IoResult<()> {
    let (width, height) = grid.size();
    writeln!(writer, "{width} {height}")?;
    writeln!(writer, "{}", grid.particle_count())?;

    let mut particles: Vec<_> = grid.particles().collect();
    particles.sort_by_key(|p| p.id);
    for particle in particles {
        let coord = particle.coord();
        writeln!(writer, "{} {}", coord.x, coord.y)?;
    }

    Ok(())
}

/// Save `grid` to the file at `path`, creating or truncating it.
pub fn save_grid_path(path: impl AsRef<Path>, grid: &Grid) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    save_grid(&mut writer, grid)?;
    writer.flush()?;
    Ok(())
}

// ── Parsing helpers ───────────────────────────────────────────────────────────

fn next_line<I>(lines: &mut I) -> IoResult<(usize, String)>
where
    I: Iterator<Item = (usize, std::io::Result<String>)>,
{
    match lines.next() {
        Some((idx, line)) => Ok((idx + 1, line?)),
        None => Err(IoError::Parse {
            line:    0,
            message: "unexpected end of file".into(),
        }),
    }
}

fn parse_ints(line: &str, line_no: usize) -> IoResult<Vec<i64>> {
    line.split_whitespace()
        .map(|field| {
            field.parse().map_err(|_| IoError::Parse {
                line:    line_no,
                message: format!("{field:?} is not an integer"),
            })
        })
        .collect()
}

fn coordinate(x: i64, y: i64, line_no: usize) -> IoResult<AxialCoord> {
    let axis = |v: i64| {
        i32::try_from(v).map_err(|_| IoError::Parse {
            line:    line_no,
            message: format!("coordinate {v} does not fit a grid axis"),
        })
    };
    Ok(AxialCoord::new(axis(x)?, axis(y)?))
}

fn dimensions(width: i64, height: i64, line_no: usize) -> IoResult<(u32, u32)> {
    let as_u32 = |v: i64| {
        u32::try_from(v).map_err(|_| IoError::Parse {
            line:    line_no,
            message: format!("grid dimension {v} is not a positive integer"),
        })
    };
    Ok((as_u32(width)?, as_u32(height)?))
}
