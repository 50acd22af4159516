//! Terminal event loop.

use std::io::{self, Stdout, Write};
use std::panic;
use std::sync::Once;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute};
use dword_editor::{EditorSession, Event, ExitReason, FileAccess, Reaction, Theme};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, error};

use crate::input::convert_event;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode and alternate screen, undone on drop and on panic.
pub struct TerminalGuard {
	terminal: Tui,
}

impl TerminalGuard {
	pub fn enter() -> io::Result<Self> {
		install_panic_hook();
		terminal::enable_raw_mode()?;
		Self::setup().inspect_err(|_| {
			let _ = restore_terminal();
		})
	}

	fn setup() -> io::Result<Self> {
		execute!(
			io::stdout(),
			terminal::EnterAlternateScreen,
			EnableBracketedPaste,
			cursor::Hide,
			terminal::Clear(ClearType::All)
		)?;
		let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
		Ok(Self { terminal })
	}
}

impl Drop for TerminalGuard {
	fn drop(&mut self) {
		let _ = restore_terminal();
	}
}

/// Writes the sequences that undo [`TerminalGuard::enter`].
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
	execute!(
		out,
		DisableBracketedPaste,
		terminal::LeaveAlternateScreen,
		cursor::Show
	)
}

/// Puts the terminal back in cooked mode on the main screen. Safe to call
/// more than once.
pub fn restore_terminal() -> io::Result<()> {
	let screen = leave_screen(&mut io::stdout());
	let raw = terminal::disable_raw_mode();
	screen.and(raw)
}

static PANIC_HOOK: Once = Once::new();

/// Restores the terminal before the panic message is printed, so the
/// message is readable and the shell is usable afterwards.
fn install_panic_hook() {
	PANIC_HOOK.call_once(|| {
		let previous = panic::take_hook();
		panic::set_hook(Box::new(move |info| {
			let _ = restore_terminal();
			previous(info);
		}));
	});
}

/// What the loop does after one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
	Continue { redraw: bool },
	Exit(ExitReason),
}

/// Feeds one event to the session.
///
/// A failed save is logged and shown in the status bar; the session stays
/// open so the user can retry or quit.
pub fn dispatch<F: FileAccess>(session: &mut EditorSession<F>, event: Event) -> Step {
	match session.handle(event) {
		Ok(Reaction::Continue { redraw }) => Step::Continue { redraw },
		Ok(Reaction::Exit(reason)) => Step::Exit(reason),
		Err(err) => {
			error!(error = %err, "save failed");
			session.show_error(&err);
			Step::Continue { redraw: true }
		}
	}
}

/// Blink timer with a fixed cadence that is not reset by input.
struct Ticker {
	interval: Duration,
	next: Instant,
}

impl Ticker {
	fn new(interval: Duration) -> Self {
		Self {
			interval,
			next: Instant::now() + interval,
		}
	}

	fn timeout(&self) -> Duration {
		self.next.saturating_duration_since(Instant::now())
	}

	fn fire(&mut self) {
		let now = Instant::now();
		self.next += self.interval;
		if self.next < now {
			self.next = now + self.interval;
		}
	}
}

/// Blocks until the next editor event: terminal input or a blink tick.
fn next_event(ticker: Option<&mut Ticker>) -> io::Result<Option<Event>> {
	match ticker {
		Some(ticker) => {
			if event::poll(ticker.timeout())? {
				Ok(convert_event(event::read()?))
			} else {
				ticker.fire();
				Ok(Some(Event::Tick))
			}
		}
		None => Ok(convert_event(event::read()?)),
	}
}

fn paint<F: FileAccess>(terminal: &mut Tui, session: &EditorSession<F>, theme: &Theme) -> io::Result<()> {
	terminal.draw(|frame| session.render(frame, theme))?;
	Ok(())
}

/// Runs the session on the real terminal until it exits.
pub fn run<F: FileAccess>(
	session: &mut EditorSession<F>,
	theme: &Theme,
	blink: Option<Duration>,
) -> anyhow::Result<ExitReason> {
	let mut guard = TerminalGuard::enter().context("failed to set up terminal")?;
	let (width, height) = terminal::size().context("failed to query terminal size")?;
	let mut ticker = blink.map(Ticker::new);

	paint(&mut guard.terminal, session, theme)?;
	let mut pending = Some(Event::Resize { width, height });

	loop {
		let event = match pending.take() {
			Some(event) => event,
			None => match next_event(ticker.as_mut())? {
				Some(event) => event,
				None => continue,
			},
		};
		if let Event::Resize { width, height } = event {
			debug!(width, height, "terminal resized");
		}

		match dispatch(session, event) {
			Step::Exit(reason) => return Ok(reason),
			Step::Continue { redraw: true } => paint(&mut guard.terminal, session, theme)?,
			Step::Continue { redraw: false } => {}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io;
	use std::path::Path;

	use dword_editor::{Key, TextArea};
	use pretty_assertions::assert_eq;
	use ratatui::backend::TestBackend;

	use super::*;

	/// Serves fixed content and rejects every write.
	struct ReadOnly;

	impl FileAccess for ReadOnly {
		fn read(&self, _: &Path) -> io::Result<Vec<u8>> {
			Ok(b"text".to_vec())
		}

		fn size(&self, _: &Path) -> u64 {
			4
		}

		fn write(&mut self, _: &Path, _: &[u8]) -> io::Result<()> {
			Err(io::Error::from(io::ErrorKind::PermissionDenied))
		}
	}

	fn session() -> EditorSession<ReadOnly> {
		EditorSession::open("ro.txt", ReadOnly, TextArea::default()).expect("read-only file should load")
	}

	#[test]
	fn failed_save_shows_notice_and_continues() {
		let mut s = session();
		let step = dispatch(&mut s, Event::Key(Key::ctrl('s')));
		assert_eq!(step, Step::Continue { redraw: true });
		assert!(s.notice().is_some_and(|n| n.contains("ro.txt")));

		assert_eq!(dispatch(&mut s, Event::Key(Key::ctrl('q'))), Step::Exit(ExitReason::Quit));
	}

	#[test]
	fn notice_is_painted_in_status_bar() {
		let mut s = session();
		dispatch(&mut s, Event::Resize { width: 120, height: 12 });
		dispatch(&mut s, Event::Key(Key::ctrl('s')));

		let mut terminal = Terminal::new(TestBackend::new(120, 12)).expect("test terminal");
		terminal
			.draw(|frame| s.render(frame, &Theme::default()))
			.expect("drawing to a test backend cannot fail");
		let buf = terminal.backend().buffer();
		let status: String = (0..120).map(|x| buf[(x, 8)].symbol()).collect();
		assert!(status.contains("failed to write ro.txt"), "{status}");
	}

	#[test]
	fn leaving_restores_screen_modes() {
		let mut out = Vec::new();
		leave_screen(&mut out).expect("writing to a Vec cannot fail");
		let out = String::from_utf8(out).expect("escape sequences are utf-8");
		assert!(out.contains("\x1b[?2004l"), "bracketed paste off: {out:?}");
		assert!(out.contains("\x1b[?1049l"), "main screen: {out:?}");
		assert!(out.contains("\x1b[?25h"), "cursor shown: {out:?}");
	}

	#[test]
	fn panic_hook_installs_once() {
		install_panic_hook();
		install_panic_hook();
		assert!(PANIC_HOOK.is_completed());
	}

	#[test]
	fn ticker_keeps_cadence() {
		let mut ticker = Ticker::new(Duration::from_millis(500));
		assert!(ticker.timeout() <= Duration::from_millis(500));
		let before = ticker.next;
		ticker.fire();
		assert!(ticker.next >= before);
	}
}
