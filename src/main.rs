//! Program entrypoint and argument parsing.

use std::env;
use std::ffi::OsString;
use std::io;
use std::process;

use anyhow::Result;

use csv_loader::config::RunPaths;
use csv_loader::error::LoadError;
use csv_loader::pipeline;

/// Parse Arg
///
/// Take the first positional argument (the input filename). Anything after it is ignored.
/// A filename that is not valid UTF-8 is reported rather than panicking.
fn parse_arg<I: IntoIterator<Item = OsString>>(args: I) -> Result<String, LoadError> {
	let arg = args
		.into_iter()
		.nth(1)
		.ok_or(LoadError::MissingArgument)?;
	arg.into_string()
		.map_err(|arg| LoadError::InvalidFilename(arg.to_string_lossy().into_owned()))
}

fn try_main() -> Result<()> {
	let arg = parse_arg(env::args_os())?;
	let paths = RunPaths::from_argument(&arg)?;
	let mut stdout = io::stdout().lock();
	let report = pipeline::run(&paths, &mut stdout)?;
	if let Some(err) = report.log_error {
		eprintln!("[ERROR] {}", err);
	}
	Ok(())
}

fn main() {
	env_logger::init();
	if let Err(err) = try_main() {
		eprintln!("[ERROR] {}", err);
		process::exit(1);
	}
}
