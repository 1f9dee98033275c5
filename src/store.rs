//! Storage of valid records in an SQLite table.

use std::path::Path;

use rusqlite::{params_from_iter, Connection};

use crate::types::FieldVector;

pub const TABLE: &str = "tbl";

const CREATE_TABLE: &str = r#"
	CREATE TABLE IF NOT EXISTS tbl(
		A text,
		B text,
		C text,
		D text,
		E text,
		F text,
		G text,
		H text,
		I text,
		J text
	)
"#;

const INSERT_INTO: &str =
	"INSERT INTO tbl(A, B, C, D, E, F, G, H, I, J) VALUES(?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

/// Record Store
///
/// Anything that can hold the fixed ten-column table: create it if missing, then take one
/// parameterized insert per valid record.
pub trait RecordStore {
	fn create_table(&mut self) -> rusqlite::Result<()>;
	fn insert(&mut self, fields: &FieldVector) -> rusqlite::Result<()>;
}

pub struct SqliteStore {
	conn: Connection,
}

impl SqliteStore {
	/// Open (creating if absent) the database file at `path`.
	pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
		Ok(Self::from_connection(Connection::open(path)?))
	}

	pub fn open_in_memory() -> rusqlite::Result<Self> {
		Ok(Self::from_connection(Connection::open_in_memory()?))
	}

	pub fn from_connection(conn: Connection) -> Self {
		Self { conn }
	}

	pub fn connection(&self) -> &Connection {
		&self.conn
	}
}

impl RecordStore for SqliteStore {
	fn create_table(&mut self) -> rusqlite::Result<()> {
		self.conn.execute(CREATE_TABLE, [])?;
		Ok(())
	}

	fn insert(&mut self, fields: &FieldVector) -> rusqlite::Result<()> {
		// Every statement autocommits, so rows already inserted survive a later failure.
		let mut stmt = self.conn.prepare_cached(INSERT_INTO)?;
		stmt.execute(params_from_iter(fields.values().iter()))?;
		Ok(())
	}
}
