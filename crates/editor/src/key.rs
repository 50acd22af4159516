//! Key and terminal event types.
//!
//! These are frontend-neutral: the terminal driver translates its backend's
//! events into [`Event`] before handing them to the session.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Key modifiers (Ctrl, Alt, Shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};

	/// Only Ctrl pressed.
	pub const CTRL: Self = Self {
		ctrl: true,
		alt: false,
		shift: false,
	};

	/// Only Alt pressed.
	pub const ALT: Self = Self {
		ctrl: false,
		alt: true,
		shift: false,
	};

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift
	}
}

/// Physical key identity, independent of modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	Char(char),
	Enter,
	Tab,
	Backspace,
	Delete,
	Left,
	Right,
	Up,
	Down,
	Home,
	End,
	PageUp,
	PageDown,
	Esc,
}

/// A key press with its modifiers.
///
/// Deserializes from the textual notation accepted by [`Key::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	/// A key with no modifiers.
	pub const fn plain(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// A printable character with no modifiers.
	pub const fn char(ch: char) -> Self {
		Self::plain(KeyCode::Char(ch))
	}

	/// `ctrl` plus a character.
	pub const fn ctrl(ch: char) -> Self {
		Self {
			code: KeyCode::Char(ch),
			modifiers: Modifiers::CTRL,
		}
	}

	/// Returns the character this key inserts into text, if any.
	///
	/// Shift is folded into the character by the terminal, so only Ctrl and
	/// Alt suppress insertion.
	pub fn text_char(&self) -> Option<char> {
		match self.code {
			KeyCode::Char(ch) if !self.modifiers.ctrl && !self.modifiers.alt => Some(ch),
			_ => None,
		}
	}

	/// Compares two keys for binding purposes.
	///
	/// Character keys match case-insensitively when Ctrl is held, since
	/// terminals report `ctrl-S` and `ctrl-s` inconsistently.
	pub fn matches(&self, other: &Key) -> bool {
		if self.modifiers.ctrl != other.modifiers.ctrl || self.modifiers.alt != other.modifiers.alt {
			return false;
		}
		match (self.code, other.code) {
			(KeyCode::Char(a), KeyCode::Char(b)) if self.modifiers.ctrl => a.eq_ignore_ascii_case(&b),
			(a, b) => a == b && self.modifiers.shift == other.modifiers.shift,
		}
	}
}

impl From<KeyCode> for Key {
	fn from(code: KeyCode) -> Self {
		Self::plain(code)
	}
}

/// Separator between modifiers and key in textual key notation.
const KEY_SEP: char = '-';

/// Error returned when a key string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
	#[error("empty key")]
	Empty,
	#[error("unknown modifier '{0}'")]
	UnknownModifier(String),
	#[error("unknown key '{0}'")]
	UnknownKey(String),
}

impl FromStr for Key {
	type Err = KeyParseError;

	/// Parses `ctrl-s`, `alt-shift-x`, `esc`, `pagedown`, `-` and similar.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if s.is_empty() {
			return Err(KeyParseError::Empty);
		}

		// A trailing separator means the key itself is the separator (`ctrl--`).
		let (prefix, key) = match s.strip_suffix(KEY_SEP) {
			Some(rest) if rest.is_empty() || rest.ends_with(KEY_SEP) => {
				(rest.strip_suffix(KEY_SEP).unwrap_or(rest), "-")
			}
			_ => match s.rsplit_once(KEY_SEP) {
				Some((prefix, key)) => (prefix, key),
				None => ("", s),
			},
		};

		let mut modifiers = Modifiers::NONE;
		for part in prefix.split(KEY_SEP).filter(|p| !p.is_empty()) {
			match part.to_ascii_lowercase().as_str() {
				"ctrl" | "c" => modifiers.ctrl = true,
				"alt" | "a" => modifiers.alt = true,
				"shift" | "s" => modifiers.shift = true,
				other => return Err(KeyParseError::UnknownModifier(other.to_string())),
			}
		}

		let code = parse_code(key)?;
		Ok(Self { code, modifiers })
	}
}

impl TryFrom<String> for Key {
	type Error = KeyParseError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

fn parse_code(key: &str) -> Result<KeyCode, KeyParseError> {
	let mut chars = key.chars();
	if let (Some(ch), None) = (chars.next(), chars.next()) {
		return Ok(KeyCode::Char(ch));
	}

	let code = match key.to_ascii_lowercase().as_str() {
		"" => return Err(KeyParseError::Empty),
		"enter" | "ret" | "return" => KeyCode::Enter,
		"tab" => KeyCode::Tab,
		"backspace" | "bs" => KeyCode::Backspace,
		"delete" | "del" => KeyCode::Delete,
		"left" => KeyCode::Left,
		"right" => KeyCode::Right,
		"up" => KeyCode::Up,
		"down" => KeyCode::Down,
		"home" => KeyCode::Home,
		"end" => KeyCode::End,
		"pageup" | "pgup" => KeyCode::PageUp,
		"pagedown" | "pgdown" => KeyCode::PageDown,
		"esc" | "escape" => KeyCode::Esc,
		"space" => KeyCode::Char(' '),
		_ => return Err(KeyParseError::UnknownKey(key.to_string())),
	};
	Ok(code)
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.modifiers.ctrl {
			write!(f, "ctrl-")?;
		}
		if self.modifiers.alt {
			write!(f, "alt-")?;
		}
		if self.modifiers.shift {
			write!(f, "shift-")?;
		}
		match self.code {
			KeyCode::Char(' ') => write!(f, "space"),
			KeyCode::Char(ch) => write!(f, "{ch}"),
			KeyCode::Enter => write!(f, "enter"),
			KeyCode::Tab => write!(f, "tab"),
			KeyCode::Backspace => write!(f, "backspace"),
			KeyCode::Delete => write!(f, "del"),
			KeyCode::Left => write!(f, "left"),
			KeyCode::Right => write!(f, "right"),
			KeyCode::Up => write!(f, "up"),
			KeyCode::Down => write!(f, "down"),
			KeyCode::Home => write!(f, "home"),
			KeyCode::End => write!(f, "end"),
			KeyCode::PageUp => write!(f, "pageup"),
			KeyCode::PageDown => write!(f, "pagedown"),
			KeyCode::Esc => write!(f, "esc"),
		}
	}
}

/// A terminal event delivered to the session, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
	/// A key press.
	Key(Key),
	/// The terminal was resized (or its size was first reported).
	Resize { width: u16, height: u16 },
	/// Periodic wake from the cursor-blink timer.
	Tick,
	/// Bracketed paste. Inserted verbatim, never matched against bindings.
	Paste(String),
}

impl From<Key> for Event {
	fn from(key: Key) -> Self {
		Event::Key(key)
	}
}
