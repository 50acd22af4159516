//! Translation from crossterm events to editor events.

use crossterm::event::{self as ct, KeyEventKind, KeyModifiers};
use dword_editor::{Event, Key, KeyCode, Modifiers};

/// Converts a terminal event. Events the editor has no use for yield `None`.
///
/// Only key presses are forwarded; release and repeat reports are ignored.
pub fn convert_event(event: ct::Event) -> Option<Event> {
	match event {
		ct::Event::Key(key) if key.kind == KeyEventKind::Press => convert_key(key).map(Event::Key),
		ct::Event::Resize(width, height) => Some(Event::Resize { width, height }),
		ct::Event::Paste(text) => Some(Event::Paste(text)),
		_ => None,
	}
}

fn convert_key(key: ct::KeyEvent) -> Option<Key> {
	let code = match key.code {
		ct::KeyCode::Char(ch) => KeyCode::Char(ch),
		ct::KeyCode::Enter => KeyCode::Enter,
		ct::KeyCode::Tab => KeyCode::Tab,
		ct::KeyCode::Backspace => KeyCode::Backspace,
		ct::KeyCode::Delete => KeyCode::Delete,
		ct::KeyCode::Left => KeyCode::Left,
		ct::KeyCode::Right => KeyCode::Right,
		ct::KeyCode::Up => KeyCode::Up,
		ct::KeyCode::Down => KeyCode::Down,
		ct::KeyCode::Home => KeyCode::Home,
		ct::KeyCode::End => KeyCode::End,
		ct::KeyCode::PageUp => KeyCode::PageUp,
		ct::KeyCode::PageDown => KeyCode::PageDown,
		ct::KeyCode::Esc => KeyCode::Esc,
		_ => return None,
	};
	Some(Key {
		code,
		modifiers: convert_modifiers(key.modifiers),
	})
}

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
	Modifiers {
		ctrl: mods.contains(KeyModifiers::CONTROL),
		alt: mods.contains(KeyModifiers::ALT),
		shift: mods.contains(KeyModifiers::SHIFT),
	}
}
