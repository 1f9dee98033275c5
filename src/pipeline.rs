//! A whole run, from setup to summary.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};

use crate::config::RunPaths;
use crate::error::{LoadError, Result};
use crate::process::{process_lines, LineError, RouteError};
use crate::store::{RecordStore, SqliteStore, TABLE};
use crate::summary::append_summary;
use crate::types::{RunCounters, COLUMNS};

/// Result of a run that got through every line.
#[derive(Debug)]
pub struct RunReport {
	pub counters: RunCounters,
	/// Set when the summary log could not be written. The data itself was still loaded.
	pub log_error: Option<LoadError>,
}

/// Run
///
/// Load `paths.input` into the database at `paths.database`, sending rejected lines to
/// `paths.rejects`, then append the counts to `paths.log`. Progress messages go to `console`.
///
/// Setup happens in a fixed order (rejects file, database, table, input) and the first
/// failure ends the run. The rejects writer and database connection are dropped on every
/// path, which flushes and closes them.
pub fn run<C: Write>(paths: &RunPaths, console: &mut C) -> Result<RunReport> {
	let rejects_file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&paths.rejects)
		.map_err(|source| LoadError::RejectsCreate {
			path: paths.rejects.clone(),
			source,
		})?;
	let mut rejects = BufWriter::new(rejects_file);

	let mut store = SqliteStore::open(&paths.database).map_err(|source| LoadError::Database {
		path: paths.database.clone(),
		source,
	})?;
	log::info!("Opened database {}", paths.database.display());
	say(
		console,
		format_args!("New database, {}, successfully created.", paths.database.display()),
	);

	store.create_table().map_err(LoadError::CreateTable)?;
	log::info!("Table {} ready", TABLE);
	say(
		console,
		format_args!("Table, {}({}), successfully created.", TABLE, COLUMNS.join(", ")),
	);

	say(console, format_args!("Processing data:"));
	let input = File::open(&paths.input).map_err(|source| LoadError::Read {
		path: paths.input.clone(),
		source,
	})?;
	let counters = process_lines(BufReader::new(input), &mut store, &mut rejects, console)
		.map_err(|err| match err {
			LineError::Read(source) => LoadError::Read {
				path: paths.input.clone(),
				source,
			},
			LineError::Route {
				line,
				source: RouteError::Insert(source),
			} => LoadError::Insert { line, source },
			LineError::Route {
				source: RouteError::Rejects(source),
				..
			} => LoadError::RejectsWrite {
				path: paths.rejects.clone(),
				source,
			},
		})?;
	rejects.flush().map_err(|source| LoadError::RejectsWrite {
		path: paths.rejects.clone(),
		source,
	})?;
	log::info!(
		"Processed {} lines: {} inserted, {} rejected",
		counters.total(),
		counters.success(),
		counters.failure()
	);

	let log_error = append_summary(&paths.log, &counters).err();
	say(console, format_args!("Finished processing."));
	Ok(RunReport {
		counters,
		log_error,
	})
}

/// Console messages never stop a load.
fn say<C: Write>(console: &mut C, msg: std::fmt::Arguments) {
	if let Err(err) = writeln!(console, "{}", msg) {
		log::warn!("Could not write console message '{}': {}", msg, err);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use std::fs;
	use std::io;
	use tempfile::TempDir;

	/// Stands in for stdout piped into a reader that has gone away.
	struct ClosedPipe;

	impl Write for ClosedPipe {
		fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
			Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	fn assert_stopped_before_processing(console: Vec<u8>, paths: &RunPaths) {
		let console = String::from_utf8(console).unwrap();
		assert!(!console.contains("Processing data:"));
		assert!(!paths.log.exists());
	}

	fn workspace(input: Option<&str>) -> (TempDir, RunPaths) {
		let dir = tempfile::tempdir().unwrap();
		let paths = RunPaths::from_base(dir.path().join("data").to_str().unwrap());
		if let Some(text) = input {
			fs::write(&paths.input, text).unwrap();
		}
		(dir, paths)
	}

	#[test]
	fn console_messages_follow_setup_order() {
		let (_dir, paths) = workspace(Some("a,b,c,d,e,f,g,h,i,j\n"));
		let mut console = Vec::new();
		let report = run(&paths, &mut console).unwrap();
		assert!(report.log_error.is_none());

		let expected = format!(
			"New database, {}, successfully created.\n\
			 Table, tbl(A, B, C, D, E, F, G, H, I, J), successfully created.\n\
			 Processing data:\n\
			 Finished processing.\n",
			paths.database.display()
		);
		assert_eq!(String::from_utf8(console).unwrap(), expected);
	}

	#[test]
	fn missing_input_fails_after_creating_outputs_but_before_the_log() {
		let (_dir, paths) = workspace(None);
		let result = run(&paths, &mut Vec::<u8>::new());
		assert!(matches!(result, Err(LoadError::Read { .. })));
		assert!(paths.rejects.exists());
		assert!(paths.database.exists());
		assert!(!paths.log.exists());
	}

	#[test]
	fn unusable_rejects_path_fails_before_the_database() {
		let (_dir, mut paths) = workspace(Some(""));
		paths.rejects = paths.rejects.with_file_name("no-such-dir").join("data-bad.csv");
		let result = run(&paths, &mut Vec::<u8>::new());
		assert!(matches!(result, Err(LoadError::RejectsCreate { .. })));
		assert!(!paths.database.exists());
	}

	#[test]
	fn log_failure_does_not_fail_the_run() {
		let (_dir, mut paths) = workspace(Some("a,b\n"));
		paths.log = paths.log.with_file_name("no-such-dir").join("data.log");
		let report = run(&paths, &mut Vec::<u8>::new()).unwrap();
		assert_eq!(report.counters.failure(), 1);
		assert!(matches!(report.log_error, Some(LoadError::LogWrite { .. })));
	}

	#[test]
	fn database_path_that_is_a_directory_fails_to_open() {
		let (_dir, paths) = workspace(Some("a,b,c,d,e,f,g,h,i,j\n"));
		fs::create_dir(&paths.database).unwrap();
		let mut console = Vec::new();
		let result = run(&paths, &mut console);
		assert!(matches!(result, Err(LoadError::Database { .. })));
		assert_stopped_before_processing(console, &paths);
	}

	#[test]
	fn database_file_with_foreign_content_fails_table_creation() {
		let (_dir, paths) = workspace(Some("a,b,c,d,e,f,g,h,i,j\n"));
		fs::write(&paths.database, "this is not an sqlite file\n".repeat(200)).unwrap();
		let mut console = Vec::new();
		let result = run(&paths, &mut console);
		assert!(matches!(result, Err(LoadError::CreateTable(_))));
		assert_stopped_before_processing(console, &paths);
	}

	#[test]
	fn broken_console_does_not_stop_the_run() {
		let text: String = (1..=2500)
			.map(|i| format!("{},b,c,d,e,f,g,h,i,j\n", i))
			.collect();
		let (_dir, paths) = workspace(Some(text.as_str()));
		let report = run(&paths, &mut ClosedPipe).unwrap();
		assert_eq!(report.counters.success(), 2500);
		assert!(paths.log.exists());
	}
}
