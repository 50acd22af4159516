//! Layout engine: draws the session into a ratatui [`Buffer`].
//!
//! The screen is four regions stacked top to bottom and left-aligned:
//!
//! ```text
//!  dword v0.1.0  notes.txt (1.2 KiB)               Line: 3/40   <- title
//!  [L]oad  [S]ave  [F]ind  [R]eplace ...                        <- menu
//! ╭────────────────────────────────────────────────────────────╮
//! │  1 first line                                              │ <- editing box
//! ╰────────────────────────────────────────────────────────────╯
//!  STATUS: 40 lines | 38 unique                                 <- status
//! ```
//!
//! Region sizes come from [`Layout`](crate::chrome::Layout), not from the
//! area handed to the widget; anything past the area's edge is clipped.
//! Rendering is a pure function of the session and the [`Theme`].

mod bars;


use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Widget};

pub use self::bars::{MENU_ITEMS, product_label};
use crate::file::FileAccess;
use crate::session::EditorSession;
use crate::theme::Theme;
use crate::widget::{TextBuffer, Viewport};

/// Shown instead of the frame until the terminal size is known.
pub const PLACEHOLDER: &str = "Initializing...";

/// Widget drawing one session with one theme.
pub struct Screen<'a, F, B, V> {
	session: &'a EditorSession<F, B, V>,
	theme: &'a Theme,
}

impl<F, B, V> EditorSession<F, B, V>
where
	F: FileAccess,
	B: TextBuffer,
	V: Viewport,
{
	/// The widget for the next frame.
	pub fn screen<'a>(&'a self, theme: &'a Theme) -> Screen<'a, F, B, V> {
		Screen { session: self, theme }
	}

	/// Draws the session over the whole frame.
	pub fn render(&self, frame: &mut Frame, theme: &Theme) {
		frame.render_widget(self.screen(theme), frame.area());
	}
}

/// `height` rows starting `y` rows below the top of `area`, clipped to it.
fn band(area: Rect, y: u16, width: u16, height: u16) -> Rect {
	Rect {
		x: area.x,
		y: area.y.saturating_add(y),
		width,
		height,
	}
	.intersection(area)
}

impl<F, B, V> Widget for Screen<'_, F, B, V>
where
	F: FileAccess,
	B: TextBuffer,
	V: Viewport,
{
	fn render(self, area: Rect, buf: &mut Buffer) {
		let session = self.session;
		let theme = self.theme;
		let (Some(layout), Some(viewport)) = (session.layout(), session.viewport()) else {
			Line::raw(PLACEHOLDER).render(area, buf);
			return;
		};

		let buffer = session.buffer();
		let width = layout.terminal_width;
		let total_lines = buffer.line_count();

		bars::title_bar(
			usize::from(width),
			session.filename(),
			session.file_size(),
			buffer.cursor_line() + 1,
			total_lines,
			theme,
		)
		.render(band(area, 0, width, 1), buf);
		bars::menu_bar(theme).render(band(area, 1, width, 1), buf);

		let box_area = band(
			area,
			2,
			layout.box_width.saturating_add(2),
			layout.box_height.saturating_add(2),
		);
		let block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(theme.border);
		let inner = block.inner(box_area);
		block.render(box_area, buf);
		viewport.render(inner, buf);

		let status_y = layout.box_height.saturating_add(4);
		bars::status_bar(total_lines, buffer.unique_line_count(), session.notice(), theme)
			.render(band(area, status_y, width, 1), buf);
	}
}
