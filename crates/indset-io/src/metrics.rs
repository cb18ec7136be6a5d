//! Semicolon-delimited metrics CSV, sampled between iteration batches.
//!
//! One header row `Iterations;<metric name>;…`, then one row per call to
//! [`MetricsWriter::append`] with the iteration count and each metric's
//! formatted value.  The file stays open for append-style sequential writes
//! for the life of a run; [`finish`](MetricsWriter::finish) flushes and is
//! idempotent.

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use indset_sim::AlignmentSimulator;

use crate::IoResult;

/// Appends simulator metric snapshots to a `;`-delimited CSV file.
pub struct MetricsWriter {
    writer:   Writer<File>,
    finished: bool,
}

impl MetricsWriter {
    /// Create (or truncate) the CSV at `path` and write the header row from
    /// `sim`'s metric names.
    pub fn create(path: impl AsRef<Path>, sim: &AlignmentSimulator) -> IoResult<Self> {
        let mut writer = WriterBuilder::new().delimiter(b';').from_path(path)?;

        let mut header = vec!["Iterations".to_string()];
        header.extend(sim.metrics().iter().map(|m| m.name.to_string()));
        writer.write_record(&header)?;

        Ok(Self { writer, finished: false })
    }

    /// Append one sample row: the current iteration count followed by each
    /// metric's formatted value.  Read-only with respect to `sim`.
    pub fn append(&mut self, sim: &AlignmentSimulator) -> IoResult<()> {
        let mut row = vec![sim.iterations_run().to_string()];
        row.extend(sim.metrics().iter().map(|m| m.value.to_string()));
        self.writer.write_record(&row)?;
        Ok(())
    }

    /// Flush the underlying file.  Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> IoResult<()> {
        if self.finished {
            return Ok(());
        }
        self.writer.flush()?;
        self.finished = true;
        Ok(())
    }
}
