//! Session-level key bindings.

use serde::Deserialize;

use crate::key::{Key, KeyCode};

/// What a key does at the session level, before widgets see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
	/// Write the buffer to disk, then exit.
	Save,
	/// Exit without writing.
	Quit,
}

/// Keys bound to session commands. Everything else goes to the widgets.
///
/// Plain Escape always quits, whatever the configured lists say.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Bindings {
	pub save: Vec<Key>,
	pub quit: Vec<Key>,
}

const ESCAPE: Key = Key::plain(KeyCode::Esc);

impl Default for Bindings {
	fn default() -> Self {
		Self {
			save: vec![Key::ctrl('s')],
			quit: vec![Key::ctrl('q'), ESCAPE],
		}
	}
}

impl Bindings {
	/// Resolves `key` to a command. Save wins if a key is bound to both.
	pub fn lookup(&self, key: &Key) -> Option<Command> {
		if self.save.iter().any(|k| k.matches(key)) {
			Some(Command::Save)
		} else if ESCAPE.matches(key) || self.quit.iter().any(|k| k.matches(key)) {
			Some(Command::Quit)
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_bindings() {
		let bindings = Bindings::default();
		assert_eq!(bindings.lookup(&Key::ctrl('s')), Some(Command::Save));
		assert_eq!(bindings.lookup(&Key::ctrl('q')), Some(Command::Quit));
		assert_eq!(bindings.lookup(&Key::plain(KeyCode::Esc)), Some(Command::Quit));
		assert_eq!(bindings.lookup(&Key::char('s')), None);
		assert_eq!(bindings.lookup(&Key::ctrl('x')), None);
	}

	#[test]
	fn save_takes_precedence() {
		let bindings = Bindings {
			save: vec![Key::ctrl('x')],
			quit: vec![Key::ctrl('x')],
		};
		assert_eq!(bindings.lookup(&Key::ctrl('x')), Some(Command::Save));
	}

	#[test]
	fn escape_quits_without_being_listed() {
		let bindings = Bindings {
			save: vec![Key::ctrl('w')],
			quit: vec![Key::ctrl('x')],
		};
		assert_eq!(bindings.lookup(&Key::plain(KeyCode::Esc)), Some(Command::Quit));
		assert_eq!(bindings.lookup(&Key::ctrl('q')), None);
	}
}
