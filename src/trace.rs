//! # SearchTrace
//!
//! The append-only progress record of a run: one `(iteration, best cost)` entry
//! per iteration or generation. It can be written out as the whitespace
//! separated progress log that external plotting tools read:
//!
//! ```text
//! 0 14
//! 1 12
//! 2 12
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, ResultExt};

/// One line of the progress log.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceEntry {
    pub iteration: usize,
    pub best_cost: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchTrace {
    entries: Vec<TraceEntry>,
}

impl SearchTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, iteration: usize, best_cost: f64) {
        self.entries.push(TraceEntry {
            iteration,
            best_cost,
        });
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TraceEntry> {
        self.entries.last()
    }

    /// Best costs in recording order.
    pub fn costs(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|entry| entry.best_cost)
    }

    /// Lowest cost ever recorded.
    pub fn min_cost(&self) -> Option<f64> {
        self.costs().reduce(f64::min)
    }

    /// `true` if no entry is worse than the one before it.
    pub fn is_non_increasing(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[1].best_cost <= pair[0].best_cost)
    }

    /// Writes the progress log, one `<iteration> <best_cost>` line per entry.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for entry in &self.entries {
            writeln!(writer, "{} {}", entry.iteration, entry.best_cost)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes the progress log to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .context(format!("Failed to create progress log {}", path.display()))?;
        self.write_to(BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_format() {
        let mut trace = SearchTrace::new();
        trace.record(0, 12.0);
        trace.record(1, 9.5);

        let mut out = Vec::new();
        trace.write_to(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0 12\n1 9.5\n");
    }

    #[test]
    fn test_monotonicity_and_min() {
        let mut trace = SearchTrace::with_capacity(3);
        assert!(trace.is_non_increasing());
        assert_eq!(trace.min_cost(), None);

        trace.record(0, 5.0);
        trace.record(1, 5.0);
        trace.record(2, 3.0);
        assert!(trace.is_non_increasing());
        assert_eq!(trace.min_cost(), Some(3.0));

        trace.record(3, 4.0);
        assert!(!trace.is_non_increasing());
        assert_eq!(trace.last().map(|e| e.iteration), Some(3));
    }

    #[test]
    fn test_save_to_file() {
        let path =
            std::env::temp_dir().join(format!("metasearch-trace-{}.txt", std::process::id()));
        let mut trace = SearchTrace::new();
        trace.record(0, 4.0);
        trace.save(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0 4\n");
        std::fs::remove_file(&path).unwrap();
    }
}
