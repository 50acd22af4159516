//! Tracing setup.
//!
//! The editor owns the terminal, so nothing may be logged to stdout or
//! stderr while it runs. Logs go to a file only when `DWORD_LOG_DIR` is set.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Directory for log files. Unset disables logging.
pub const LOG_DIR_ENV: &str = "DWORD_LOG_DIR";

/// Default filter directives when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> &'static str {
	if verbose { "dword=debug,dword_editor=debug,info" } else { "info" }
}

/// Log file for this process inside `dir`.
pub fn log_path(dir: &Path) -> PathBuf {
	dir.join(format!("dword.{}.log", std::process::id()))
}

/// Installs a file subscriber if `DWORD_LOG_DIR` is set and writable.
///
/// Returns the log file path when logging is active.
pub fn setup_tracing(verbose: bool) -> Option<PathBuf> {
	let log_dir = std::env::var_os(LOG_DIR_ENV).map(PathBuf::from)?;
	std::fs::create_dir_all(&log_dir).ok()?;

	let path = log_path(&log_dir);
	let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
	let file_layer = tracing_subscriber::fmt::layer()
		.with_writer(file)
		.with_ansi(false)
		.with_target(true);

	tracing_subscriber::registry().with(filter).with(file_layer).init();
	tracing::info!(path = ?path, "tracing initialized");
	Some(path)
}
