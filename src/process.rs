//! Line routing: each classified line goes either to the store or to the rejects file.

use std::io::{self, BufRead, Write};

use crate::classify::classify;
use crate::store::RecordStore;
use crate::types::{Classification, Outcome, RunCounters, PROGRESS_INTERVAL};

/// Which sink refused a routed line.
#[derive(Debug)]
pub enum RouteError {
	Insert(rusqlite::Error),
	Rejects(io::Error),
}

/// Why `process_lines` stopped early.
#[derive(Debug)]
pub enum LineError {
	Read(io::Error),
	/// `line` is 1-based.
	Route { line: u64, source: RouteError },
}

/// Route Line
///
/// Classify `line` and hand it to exactly one sink: valid lines are inserted into `store`,
/// anything else is copied verbatim (plus a newline) to `rejects`.
pub fn route_line<S: RecordStore, W: Write>(
	line: &str,
	store: &mut S,
	rejects: &mut W,
) -> Result<Outcome, RouteError> {
	match classify(line) {
		Classification::Valid(fields) => {
			store.insert(&fields).map_err(RouteError::Insert)?;
			Ok(Outcome::Inserted)
		}
		Classification::Invalid(reason) => {
			writeln!(rejects, "{}", line).map_err(RouteError::Rejects)?;
			Ok(Outcome::Rejected(reason))
		}
	}
}

/// Process Lines
///
/// Route every line of `input` in order, tallying outcomes and writing a progress line to
/// `console` every `PROGRESS_INTERVAL` lines. The first read or sink failure stops the run;
/// lines already inserted stay inserted. Progress output that cannot be written is only
/// logged.
pub fn process_lines<R: BufRead, S: RecordStore, W: Write, C: Write>(
	input: R,
	store: &mut S,
	rejects: &mut W,
	console: &mut C,
) -> Result<RunCounters, LineError> {
	let mut counters = RunCounters::new();
	for line in input.lines() {
		let line = line.map_err(LineError::Read)?;
		let line_no = counters.total() + 1;

		let outcome = route_line(&line, store, rejects).map_err(|source| LineError::Route {
			line: line_no,
			source,
		})?;
		match outcome {
			Outcome::Inserted => log::debug!("Line {} inserted", line_no),
			Outcome::Rejected(reason) => log::debug!("Line {} rejected: {}", line_no, reason),
		}

		counters.record(&outcome);
		if counters.total() % PROGRESS_INTERVAL == 0 {
			if let Err(err) = writeln!(console, "\t{}...", counters.total()) {
				log::warn!("Could not write progress at line {}: {}", line_no, err);
			}
		}
	}
	Ok(counters)
}
