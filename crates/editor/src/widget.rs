//! Narrow interfaces to the widgets the session drives.
//!
//! The session only supplies content and geometry and reads rendered views
//! back; the widgets own their internal models. Default implementations are
//! [`crate::TextArea`] and [`crate::ScrollView`].

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::{Paragraph, Widget};

use crate::key::Event;

/// An editable text buffer.
pub trait TextBuffer {
	/// Replaces the whole content.
	fn set_value(&mut self, content: &str);

	/// Returns the full current content.
	fn value(&self) -> String;

	fn set_width(&mut self, width: u16);

	fn set_height(&mut self, height: u16);

	/// Number of lines, counting the empty line after a trailing newline.
	fn line_count(&self) -> usize;

	/// Number of distinct lines, compared without their line endings.
	fn unique_line_count(&self) -> usize;

	/// Zero-based line holding the cursor.
	fn cursor_line(&self) -> usize;

	/// Reacts to an event. Returns true if the view changed.
	fn handle_event(&mut self, event: &Event) -> bool;

	/// Renders the visible portion of the buffer.
	fn view(&self) -> Text<'static>;
}

/// A scrollable window over pre-rendered content.
pub trait Viewport {
	/// Creates a viewport with the given dimensions and no content.
	fn with_size(width: u16, height: u16) -> Self
	where
		Self: Sized;

	fn set_width(&mut self, width: u16);

	fn set_height(&mut self, height: u16);

	fn width(&self) -> u16;

	fn height(&self) -> u16;

	/// Replaces the content shown through the window.
	fn set_content(&mut self, content: Text<'static>);

	/// Reacts to an event. Returns true if the view changed.
	fn handle_event(&mut self, event: &Event) -> bool;

	/// The content lines inside the visible window.
	fn view(&self) -> Text<'static>;

	/// Draws the visible window into `area`, cutting lines at its width.
	fn render(&self, area: Rect, buf: &mut Buffer) {
		Paragraph::new(self.view()).render(area, buf);
	}
}
