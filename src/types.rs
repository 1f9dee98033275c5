//! Global type definitions.

use std::fmt;

/// Number of columns every valid record carries.
pub const NUM_COLUMNS: usize = 10;

/// Column names of the target table, in insert order.
pub static COLUMNS: [&str; NUM_COLUMNS] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

pub const DELIMITER: char = ',';
pub const QUOTE: char = '"';

/// A progress line is printed each time this many lines have been processed.
pub const PROGRESS_INTERVAL: u64 = 1000;

/// The values of one valid line, one per column and in column order. Values are borrowed
/// straight from the raw line: quotes are kept and nothing is trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVector<'a>([&'a str; NUM_COLUMNS]);

impl<'a> FieldVector<'a> {
	/// Build from split fields, handing the fields back if there are not exactly
	/// `NUM_COLUMNS` of them.
	pub fn from_fields(fields: Vec<&'a str>) -> Result<Self, Vec<&'a str>> {
		<[&'a str; NUM_COLUMNS]>::try_from(fields).map(Self)
	}

	pub fn values(&self) -> &[&'a str; NUM_COLUMNS] {
		&self.0
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
	/// The raw line contains two delimiters next to each other, quoted or not.
	ConsecutiveDelimiters,
	/// The quote-aware split produced the wrong number of fields.
	FieldCount { found: usize },
}

impl fmt::Display for InvalidReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			InvalidReason::ConsecutiveDelimiters => write!(f, "consecutive delimiters"),
			InvalidReason::FieldCount { found } => {
				write!(f, "expected {} fields, found {}", NUM_COLUMNS, found)
			}
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
	Valid(FieldVector<'a>),
	Invalid(InvalidReason),
}

/// What happened to a single line once it was routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Inserted,
	Rejected(InvalidReason),
}

/// Per-run tallies. `total` is derived, so `total == success + failure` cannot drift.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunCounters {
	success: u64,
	failure: u64,
}

impl RunCounters {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn record(&mut self, outcome: &Outcome) {
		match outcome {
			Outcome::Inserted => self.success += 1,
			Outcome::Rejected(_) => self.failure += 1,
		}
	}

	pub fn total(&self) -> u64 {
		self.success + self.failure
	}

	pub fn success(&self) -> u64 {
		self.success
	}

	pub fn failure(&self) -> u64 {
		self.failure
	}
}
