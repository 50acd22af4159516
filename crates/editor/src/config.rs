//! User configuration.
//!
//! Loaded once at startup from `$XDG_CONFIG_HOME/dword/config.toml` (or an
//! explicit path) and never reloaded. A missing file at the default location
//! yields the defaults; a missing explicit path is an error.
//!
//! ```toml
//! [theme]
//! title = { fg = "230", bg = "62" }
//! border = { fg = "#5f5f87" }
//!
//! [keys]
//! save = ["ctrl-s"]
//! quit = ["ctrl-q", "esc"]
//!
//! [editor]
//! tab_width = 4
//! blink_interval_ms = 530
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::bindings::Bindings;
use crate::textarea::DEFAULT_TAB_WIDTH;
use crate::theme::{Theme, ThemeConfig};

/// Errors raised while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("I/O error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("invalid config {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

/// `[editor]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorOptions {
	/// Spaces inserted for Tab.
	pub tab_width: usize,
	/// Cursor blink half-period. Zero disables blinking.
	pub blink_interval_ms: u64,
}

impl Default for EditorOptions {
	fn default() -> Self {
		Self {
			tab_width: DEFAULT_TAB_WIDTH,
			blink_interval_ms: 530,
		}
	}
}

impl EditorOptions {
	/// Blink timer period, if blinking is enabled.
	pub fn blink_interval(&self) -> Option<Duration> {
		(self.blink_interval_ms > 0).then(|| Duration::from_millis(self.blink_interval_ms))
	}
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub theme: ThemeConfig,
	pub keys: Bindings,
	pub editor: EditorOptions,
}

impl Config {
	/// Platform config file location, if a config directory exists.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("dword").join("config.toml"))
	}

	/// Parses config text. `path` is only used for error messages.
	pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
		toml::from_str(text).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Loads `path`, returning defaults when the file does not exist.
	///
	/// Used for the implicit per-user location.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		match Self::read(path) {
			Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
				tracing::debug!(path = %path.display(), "no config file, using defaults");
				Ok(Self::default())
			}
			result => result,
		}
	}

	/// Loads a file named on the command line. A missing file is an error.
	pub fn load_explicit(path: &Path) -> Result<Self, ConfigError> {
		Self::read(path)
	}

	fn read(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let config = Self::parse(&text, path)?;
		tracing::info!(path = %path.display(), "loaded config");
		Ok(config)
	}

	/// Resolved theme.
	pub fn theme(&self) -> Theme {
		Theme::from_config(&self.theme)
	}
}

#[cfg(test)]
mod tests {
	use ratatui::style::Color;

	use super::*;
	use crate::key::{Key, KeyCode};

	fn parse(text: &str) -> Result<Config, ConfigError> {
		Config::parse(text, Path::new("config.toml"))
	}

	#[test]
	fn empty_file_is_default() {
		assert_eq!(parse("").unwrap(), Config::default());
	}

	#[test]
	fn full_config() {
		let config = parse(
			r##"
			[theme]
			title = { fg = "#102030", bg = "17" }

			[keys]
			save = ["ctrl-w"]
			quit = ["ctrl-x", "esc"]

			[editor]
			tab_width = 2
			blink_interval_ms = 0
			"##,
		)
		.unwrap();

		let theme = config.theme();
		assert_eq!(theme.title.fg, Some(Color::Rgb(0x10, 0x20, 0x30)));
		assert_eq!(theme.title.bg, Some(Color::Indexed(17)));
		assert_eq!(config.keys.save, vec![Key::ctrl('w')]);
		assert_eq!(config.keys.quit, vec![Key::ctrl('x'), Key::plain(KeyCode::Esc)]);
		assert_eq!(config.editor.tab_width, 2);
		assert_eq!(config.editor.blink_interval(), None);
	}

	#[test]
	fn partial_keys_keep_other_defaults() {
		let config = parse("[keys]\nsave = [\"ctrl-w\"]\n").unwrap();
		assert_eq!(config.keys.quit, Bindings::default().quit);
		assert_eq!(config.editor, EditorOptions::default());
	}

	#[test]
	fn bad_values_are_rejected() {
		assert!(matches!(parse("[keys]\nsave = [\"hyper-s\"]"), Err(ConfigError::Parse { .. })));
		assert!(matches!(parse("[theme]\ntitle = { fg = \"purple\" }"), Err(ConfigError::Parse { .. })));
		assert!(matches!(parse("[nope]\n"), Err(ConfigError::Parse { .. })));
	}

	#[test]
	fn missing_file_loads_defaults() {
		let dir = tempfile::tempdir().expect("temp dir should exist");
		let config = Config::load(&dir.path().join("config.toml")).unwrap();
		assert_eq!(config, Config::default());
	}

	#[test]
	fn load_reads_file() {
		let dir = tempfile::tempdir().expect("temp dir should exist");
		let path = dir.path().join("config.toml");
		std::fs::write(&path, "[editor]\ntab_width = 8\n").unwrap();
		assert_eq!(Config::load(&path).unwrap().editor.tab_width, 8);
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let dir = tempfile::tempdir().expect("temp dir should exist");
		let path = dir.path().join("typo.toml");
		match Config::load_explicit(&path) {
			Err(ConfigError::Io { path: reported, source }) => {
				assert_eq!(reported, path);
				assert_eq!(source.kind(), io::ErrorKind::NotFound);
			}
			other => panic!("expected a missing-file error, got {other:?}"),
		}
	}

	#[test]
	fn explicit_file_is_parsed() {
		let dir = tempfile::tempdir().expect("temp dir should exist");
		let path = dir.path().join("custom.toml");
		std::fs::write(&path, "[editor]\nblink_interval_ms = 0\n").unwrap();
		let config = Config::load_explicit(&path).unwrap();
		assert_eq!(config.editor.blink_interval(), None);
	}
}
