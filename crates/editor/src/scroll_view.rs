//! Scrollable window over pre-rendered lines.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Widget};

use crate::key::{Event, KeyCode};
use crate::widget::Viewport;

/// Vertical scroll window with a fixed size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollView {
	width: u16,
	height: u16,
	content: Text<'static>,
	/// Index of the first visible content line.
	offset: usize,
}

impl ScrollView {
	pub fn offset(&self) -> usize {
		self.offset
	}

	fn max_offset(&self) -> usize {
		self.content.height().saturating_sub(usize::from(self.height))
	}

	/// Scrolls by `delta` lines, clamped to the content. Returns true if moved.
	pub fn scroll_by(&mut self, delta: isize) -> bool {
		let next = self.offset.saturating_add_signed(delta).min(self.max_offset());
		let moved = next != self.offset;
		self.offset = next;
		moved
	}

	fn clamp_offset(&mut self) {
		self.offset = self.offset.min(self.max_offset());
	}

	fn page(&self) -> isize {
		isize::try_from(self.height.max(1)).unwrap_or(isize::MAX)
	}
}

impl Viewport for ScrollView {
	fn with_size(width: u16, height: u16) -> Self {
		Self {
			width,
			height,
			..Self::default()
		}
	}

	fn set_width(&mut self, width: u16) {
		self.width = width;
	}

	fn set_height(&mut self, height: u16) {
		self.height = height;
		self.clamp_offset();
	}

	fn width(&self) -> u16 {
		self.width
	}

	fn height(&self) -> u16 {
		self.height
	}

	fn set_content(&mut self, content: Text<'static>) {
		self.content = content;
		self.clamp_offset();
	}

	fn handle_event(&mut self, event: &Event) -> bool {
		match event {
			Event::Key(key) if key.modifiers.is_empty() => match key.code {
				KeyCode::PageUp => self.scroll_by(-self.page()),
				KeyCode::PageDown => self.scroll_by(self.page()),
				_ => false,
			},
			_ => false,
		}
	}

	fn view(&self) -> Text<'static> {
		Text::from(
			self.content
				.lines
				.iter()
				.skip(self.offset)
				.take(usize::from(self.height))
				.cloned()
				.collect::<Vec<_>>(),
		)
	}

	fn render(&self, area: Rect, buf: &mut Buffer) {
		let area = Rect {
			width: area.width.min(self.width),
			height: area.height.min(self.height),
			..area
		};
		let offset = u16::try_from(self.offset).unwrap_or(u16::MAX);
		Paragraph::new(self.content.clone())
			.scroll((offset, 0))
			.render(area, buf);
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use ratatui::text::Line;

	use super::*;
	use crate::key::Key;

	fn numbered(n: usize) -> Text<'static> {
		Text::from((0..n).map(|i| Line::from(i.to_string())).collect::<Vec<_>>())
	}

	fn rendered(view: &ScrollView, width: u16, height: u16) -> Buffer {
		let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
		view.render(buf.area, &mut buf);
		buf
	}

	#[test]
	fn view_is_window_over_content() {
		let mut view = ScrollView::with_size(10, 3);
		view.set_content(numbered(10));
		assert_eq!(view.view().to_string(), "0\n1\n2");
	}

	#[test]
	fn page_keys_scroll_and_clamp() {
		let mut view = ScrollView::with_size(10, 3);
		view.set_content(numbered(5));
		assert!(view.handle_event(&Event::Key(Key::plain(KeyCode::PageDown))));
		assert_eq!(view.offset(), 2);
		assert!(!view.handle_event(&Event::Key(Key::plain(KeyCode::PageDown))));
		assert!(view.handle_event(&Event::Key(Key::plain(KeyCode::PageUp))));
		assert_eq!(view.offset(), 0);
	}

	#[test]
	fn content_that_fits_does_not_scroll() {
		let mut view = ScrollView::with_size(10, 14);
		view.set_content(numbered(3));
		assert!(!view.handle_event(&Event::Key(Key::plain(KeyCode::PageDown))));
	}

	#[test]
	fn shrinking_content_clamps_offset() {
		let mut view = ScrollView::with_size(10, 2);
		view.set_content(numbered(6));
		view.scroll_by(4);
		view.set_content(numbered(3));
		assert_eq!(view.offset(), 1);
	}

	#[test]
	fn render_cuts_lines_to_width() {
		let mut view = ScrollView::with_size(3, 1);
		view.set_content(Text::raw("abcdef"));
		assert_eq!(rendered(&view, 3, 1), Buffer::with_lines(["abc"]));
	}

	#[test]
	fn render_follows_scroll_offset() {
		let mut view = ScrollView::with_size(5, 2);
		view.set_content(numbered(5));
		view.handle_event(&Event::Key(Key::plain(KeyCode::PageDown)));
		assert_eq!(rendered(&view, 5, 2), Buffer::with_lines(["2    ", "3    "]));
	}

	#[test]
	fn render_stays_inside_own_size() {
		let mut view = ScrollView::with_size(5, 2);
		view.set_content(Text::raw("one\ntwo\nthree"));
		assert_eq!(
			rendered(&view, 6, 3),
			Buffer::with_lines(["one   ", "two   ", "      "])
		);
	}

	#[test]
	fn zero_height_shows_nothing() {
		let mut view = ScrollView::with_size(10, 0);
		view.set_content(numbered(3));
		assert!(view.view().lines.is_empty());
	}
}
