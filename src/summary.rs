//! Summary log of a finished run.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{LoadError, Result};
use crate::types::RunCounters;

/// Write Summary
///
/// Write the three-line counts block to `wtr`.
pub fn write_summary<W: Write>(wtr: &mut W, counters: &RunCounters) -> std::io::Result<()> {
	write!(
		wtr,
		"Received   : {}\nSuccessful : {}\nFailed     : {}\n",
		counters.total(),
		counters.success(),
		counters.failure()
	)
}

/// Append Summary
///
/// Append the counts block to the log file at `path`, creating it if absent. Earlier runs'
/// blocks are left in place.
pub fn append_summary(path: &Path, counters: &RunCounters) -> Result<()> {
	let to_err = |source| LoadError::LogWrite {
		path: path.to_path_buf(),
		source,
	};
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.map_err(to_err)?;
	let mut buffered = BufWriter::new(file);
	write_summary(&mut buffered, counters).map_err(to_err)?;
	buffered.flush().map_err(to_err)
}
