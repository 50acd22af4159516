//! CLI schema for the dword binary.

use std::path::PathBuf;

use clap::Parser;

/// Printed when no file is given.
pub const USAGE: &str = "Usage: dword <filename>";

#[derive(Parser, Debug)]
#[command(name = "dword")]
#[command(about = "A minimal full-screen text editor")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// File to edit. Created on save if it does not exist.
	pub file: Option<PathBuf>,

	/// Config file to load instead of the default location
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Log more detail when DWORD_LOG_DIR is set
	#[arg(long, short = 'v')]
	pub verbose: bool,
}
