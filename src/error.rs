//! Error taxonomy for a load run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

/// Every failure a run can hit. All of them except `LogWrite` end the run.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("Required arguments: filename")]
	MissingArgument,

	#[error("Invalid filename '{0}': expected a name ending in a 4-character extension")]
	InvalidFilename(String),

	#[error("Failed to create {}: {source}", path.display())]
	RejectsCreate { path: PathBuf, source: io::Error },

	#[error("Failed to create new database, {}: {source}", path.display())]
	Database {
		path: PathBuf,
		source: rusqlite::Error,
	},

	#[error("Unable to create table: {0}")]
	CreateTable(#[source] rusqlite::Error),

	#[error("Failed to read from file, {}: {source}", path.display())]
	Read { path: PathBuf, source: io::Error },

	/// `line` is 1-based.
	#[error("Unable to insert line {line} into table: {source}")]
	Insert { line: u64, source: rusqlite::Error },

	#[error("Failed to write to {}: {source}", path.display())]
	RejectsWrite { path: PathBuf, source: io::Error },

	#[error("Failed to print to log file {}: {source}", path.display())]
	LogWrite { path: PathBuf, source: io::Error },
}
