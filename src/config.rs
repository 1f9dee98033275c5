//! Run configuration derived from the command-line filename.

use std::path::PathBuf;

use crate::error::{LoadError, Result};

/// Length of the extension stripped from the argument, dot included (`.csv`).
const EXTENSION_LEN: usize = 4;

/// Files touched by one run, all sharing the argument's base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
	pub base: String,
	pub database: PathBuf,
	pub input: PathBuf,
	pub rejects: PathBuf,
	pub log: PathBuf,
}

impl RunPaths {
	/// From Argument
	///
	/// Drop the last four characters of `arg`, whatever they are, and derive the companion
	/// paths from what remains. The input is always read from `<base>.csv`. A bare `.csv`
	/// leaves an empty base, giving `.db`, `.csv`, `-bad.csv` and `.log`.
	pub fn from_argument(arg: &str) -> Result<Self> {
		let cut = arg
			.char_indices()
			.rev()
			.nth(EXTENSION_LEN - 1)
			.map(|(idx, _)| idx)
			.ok_or_else(|| LoadError::InvalidFilename(arg.to_string()))?;
		Ok(Self::from_base(&arg[..cut]))
	}

	pub fn from_base(base: &str) -> Self {
		Self {
			base: base.to_string(),
			database: PathBuf::from(format!("{}.db", base)),
			input: PathBuf::from(format!("{}.csv", base)),
			rejects: PathBuf::from(format!("{}-bad.csv", base)),
			log: PathBuf::from(format!("{}.log", base)),
		}
	}
}
