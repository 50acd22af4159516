//! File access boundary.
//!
//! The session never touches the filesystem directly; it goes through
//! [`FileAccess`] so the save and quit paths can be driven by test doubles.

use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::Path;

/// Byte-level file operations used by the session.
pub trait FileAccess {
	/// Reads the whole file.
	fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

	/// Returns the file size in bytes, or 0 if it cannot be determined.
	fn size(&self, path: &Path) -> u64;

	/// Replaces the file's content with `bytes`, creating it if needed.
	fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// Reads `path`, treating a missing file as empty content.
pub fn read_or_empty<F: FileAccess + ?Sized>(files: &F, path: &Path) -> io::Result<Vec<u8>> {
	match files.read(path) {
		Ok(bytes) => Ok(bytes),
		Err(e) if e.kind() == io::ErrorKind::NotFound => {
			tracing::debug!(path = %path.display(), "file does not exist, starting empty");
			Ok(Vec::new())
		}
		Err(e) => Err(e),
	}
}

/// Permission bits for newly created files.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// [`FileAccess`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFiles;

impl FileAccess for DiskFiles {
	fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
		fs::read(path)
	}

	fn size(&self, path: &Path) -> u64 {
		fs::metadata(path).map(|m| m.len()).unwrap_or(0)
	}

	fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
		let mut options = OpenOptions::new();
		options.write(true).create(true).truncate(true);
		#[cfg(unix)]
		{
			use std::os::unix::fs::OpenOptionsExt as _;
			options.mode(NEW_FILE_MODE);
		}
		let mut file = options.open(path)?;
		file.write_all(bytes)?;
		file.flush()
	}
}
