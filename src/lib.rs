//! Load a delimited text file into an SQLite table, diverting malformed lines to a rejects file.

pub mod classify;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod process;
pub mod store;
pub mod summary;
pub mod types;
