//! Error types for session I/O.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load the initial file content.
///
/// A missing file is not an error; see [`crate::file::read_or_empty`].
#[derive(Debug, Error)]
pub enum LoadError {
	/// The file exists but could not be read.
	#[error("failed to read {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The file is not valid UTF-8 and cannot be edited as text.
	#[error("{path} is not valid UTF-8 (invalid byte at offset {offset})")]
	NotUtf8 { path: PathBuf, offset: usize },
}

/// Failure to persist the buffer on save.
#[derive(Debug, Error)]
#[error("failed to write {path}: {source}")]
pub struct SaveError {
	pub path: PathBuf,
	#[source]
	pub source: io::Error,
}
