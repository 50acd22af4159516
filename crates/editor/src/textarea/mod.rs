//! Rope-backed multi-line text area.
//!
//! Holds the document, a single cursor and a scroll anchor over
//! soft-wrapped rows. Lines are drawn behind a right-aligned line number
//! gutter; the cursor cell is drawn reversed while the blink phase is on.
//!
//! Only the lines between the anchor and the cursor, or the rows on screen,
//! are ever wrapped, so the cost of an event does not grow with the document.

mod distinct;
mod wrap;


use std::ops::Range;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ropey::Rope;

use self::distinct::{LineSet, content};
use self::wrap::{Row, cell_width, ending_len, wrap_line};
use crate::key::{Event, Key, KeyCode};
use crate::widget::TextBuffer;

/// Width before the first resize is reported.
pub const DEFAULT_WIDTH: u16 = 100;
/// Height before the first resize is reported.
pub const DEFAULT_HEIGHT: u16 = 20;
/// Spaces inserted for the Tab key.
pub const DEFAULT_TAB_WIDTH: usize = 4;
/// Minimum digits reserved for line numbers.
const MIN_GUTTER_DIGITS: usize = 3;

/// Styles used when drawing the text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAreaStyles {
	pub text: Style,
	pub gutter: Style,
	pub cursor: Style,
}

impl Default for TextAreaStyles {
	fn default() -> Self {
		Self {
			text: Style::new(),
			gutter: Style::new(),
			cursor: Style::new().add_modifier(Modifier::REVERSED),
		}
	}
}

/// Cursor position as (line, column), column counted in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
	pub line: usize,
	pub col: usize,
}

/// First visual row on screen: a document line and a wrapped row within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
struct Anchor {
	line: usize,
	row: usize,
}

/// Editable text widget.
#[derive(Debug, Clone)]
pub struct TextArea {
	doc: Rope,
	cursor: Cursor,
	/// Column Up/Down try to return to.
	goal_col: Option<usize>,
	width: u16,
	height: u16,
	top: Anchor,
	line_set: LineSet,
	tab_width: usize,
	cursor_visible: bool,
	styles: TextAreaStyles,
}

impl Default for TextArea {
	fn default() -> Self {
		Self::new("")
	}
}

impl TextArea {
	/// Creates a text area holding `content` with the cursor at the start.
	pub fn new(content: &str) -> Self {
		let doc = Rope::from_str(content);
		Self {
			line_set: LineSet::from_rope(&doc),
			doc,
			cursor: Cursor::default(),
			goal_col: None,
			width: DEFAULT_WIDTH,
			height: DEFAULT_HEIGHT,
			top: Anchor::default(),
			tab_width: DEFAULT_TAB_WIDTH,
			cursor_visible: true,
			styles: TextAreaStyles::default(),
		}
	}

	pub fn with_tab_width(mut self, tab_width: usize) -> Self {
		self.tab_width = tab_width.max(1);
		self
	}

	pub fn with_styles(mut self, styles: TextAreaStyles) -> Self {
		self.styles = styles;
		self
	}

	pub fn cursor(&self) -> Cursor {
		self.cursor
	}

	pub fn width(&self) -> u16 {
		self.width
	}

	pub fn height(&self) -> u16 {
		self.height
	}

	/// Whether the cursor is in the visible blink phase.
	pub fn cursor_visible(&self) -> bool {
		self.cursor_visible
	}

	/// Moves the cursor, clamping to the document.
	pub fn set_cursor(&mut self, line: usize, col: usize) {
		let line = line.min(self.last_line());
		self.cursor = Cursor {
			line,
			col: col.min(self.line_len(line)),
		};
		self.goal_col = None;
		self.scroll_to_cursor();
	}

	fn last_line(&self) -> usize {
		self.doc.len_lines().saturating_sub(1)
	}

	/// Length of `line` in chars, excluding its line ending.
	fn line_len(&self, line: usize) -> usize {
		let slice = self.doc.line(line);
		slice.len_chars() - ending_len(slice)
	}

	fn line_chars(&self, line: usize) -> Vec<char> {
		let slice = self.doc.line(line);
		let len = slice.len_chars() - ending_len(slice);
		slice.chars().take(len).collect()
	}

	fn cursor_char_idx(&self) -> usize {
		self.doc.line_to_char(self.cursor.line) + self.cursor.col
	}

	fn place_cursor_at_char(&mut self, idx: usize) {
		let idx = idx.min(self.doc.len_chars());
		let line = self.doc.char_to_line(idx);
		let col = (idx - self.doc.line_to_char(line)).min(self.line_len(line));
		self.cursor = Cursor { line, col };
	}

	fn gutter_digits(&self) -> usize {
		self.doc.len_lines().to_string().len().max(MIN_GUTTER_DIGITS)
	}

	/// Gutter width including its trailing separator space.
	fn gutter_width(&self) -> usize {
		self.gutter_digits() + 1
	}

	fn text_width(&self) -> usize {
		usize::from(self.width).saturating_sub(self.gutter_width())
	}

	fn line_rows(&self, line: usize) -> Vec<Row> {
		wrap_line(line, &self.line_chars(line), self.text_width(), self.tab_width)
	}

	fn cursor_anchor(&self) -> Anchor {
		let row = self
			.line_rows(self.cursor.line)
			.iter()
			.position(|r| r.holds_cursor(self.cursor.line, self.cursor.col))
			.unwrap_or(0);
		Anchor {
			line: self.cursor.line,
			row,
		}
	}

	/// Pulls the anchor back inside the document after edits or a width change.
	fn clamp_top(&mut self) {
		if self.top.line > self.last_line() {
			self.top = Anchor {
				line: self.last_line(),
				row: 0,
			};
		}
		let rows = self.line_rows(self.top.line).len();
		self.top.row = self.top.row.min(rows.saturating_sub(1));
	}

	/// Whether `target`, at or after the anchor, is among the first `height` rows.
	fn within_view(&self, target: Anchor, height: usize) -> bool {
		let mut seen = 0;
		let mut line = self.top.line;
		let mut skip = self.top.row;
		loop {
			if line == target.line {
				return seen + (target.row - skip) < height;
			}
			seen += self.line_rows(line).len().saturating_sub(skip);
			if seen >= height {
				return false;
			}
			line += 1;
			skip = 0;
		}
	}

	/// The position `n` visual rows above `at`, stopping at the first row.
	fn rows_above(&self, mut at: Anchor, mut n: usize) -> Anchor {
		while n > 0 {
			if at.row >= n {
				at.row -= n;
				break;
			}
			if at.line == 0 {
				at.row = 0;
				break;
			}
			n -= at.row + 1;
			at.line -= 1;
			at.row = self.line_rows(at.line).len().saturating_sub(1);
		}
		at
	}

	fn scroll_to_cursor(&mut self) {
		self.clamp_top();
		let cursor = self.cursor_anchor();
		let height = usize::from(self.height);
		if height == 0 || cursor < self.top {
			self.top = cursor;
		} else if !self.within_view(cursor, height) {
			self.top = self.rows_above(cursor, height - 1);
		}
	}

	/// Replaces the chars in `range` with `text`, keeping the line set in step.
	///
	/// The line before the edit is re-counted too, since joining a lone `\r`
	/// with a following `\n` changes where it ends.
	fn replace(&mut self, range: Range<usize>, text: &str) {
		let first = self.doc.char_to_line(range.start).saturating_sub(1);
		let last = self.doc.char_to_line(range.end);
		for line in first..=last {
			let old = content(self.doc.line(line));
			self.line_set.remove(&old);
		}

		self.doc.remove(range.clone());
		self.doc.insert(range.start, text);

		let end = self.doc.char_to_line(range.start + text.chars().count()).max(first);
		for line in first..=end {
			self.line_set.insert(content(self.doc.line(line)));
		}
	}

	/// Inserts `text` at the cursor and moves the cursor past it.
	pub fn insert_str(&mut self, text: &str) {
		if text.is_empty() {
			return;
		}
		let idx = self.cursor_char_idx();
		self.replace(idx..idx, text);
		self.place_cursor_at_char(idx + text.chars().count());
		self.goal_col = None;
	}

	fn backspace(&mut self) -> bool {
		let idx = self.cursor_char_idx();
		if idx == 0 {
			return false;
		}
		if self.cursor.col == 0 {
			let prev = self.cursor.line - 1;
			let prev_len = self.line_len(prev);
			let start = self.doc.line_to_char(prev) + prev_len;
			self.replace(start..idx, "");
			self.cursor = Cursor {
				line: prev,
				col: prev_len,
			};
		} else {
			self.replace(idx - 1..idx, "");
			self.cursor.col -= 1;
		}
		true
	}

	fn delete(&mut self) -> bool {
		let idx = self.cursor_char_idx();
		let line = self.cursor.line;
		if self.cursor.col < self.line_len(line) {
			self.replace(idx..idx + 1, "");
			return true;
		}
		let ending = ending_len(self.doc.line(line));
		if ending == 0 {
			return false;
		}
		self.replace(idx..idx + ending, "");
		true
	}

	fn move_left(&mut self) -> bool {
		if self.cursor.col > 0 {
			self.cursor.col -= 1;
		} else if self.cursor.line > 0 {
			self.cursor.line -= 1;
			self.cursor.col = self.line_len(self.cursor.line);
		} else {
			return false;
		}
		true
	}

	fn move_right(&mut self) -> bool {
		if self.cursor.col < self.line_len(self.cursor.line) {
			self.cursor.col += 1;
		} else if self.cursor.line < self.last_line() {
			self.cursor.line += 1;
			self.cursor.col = 0;
		} else {
			return false;
		}
		true
	}

	/// Moves by `delta` lines, keeping the goal column.
	fn move_vertical(&mut self, delta: isize) -> bool {
		let target = self
			.cursor
			.line
			.saturating_add_signed(delta)
			.min(self.last_line());
		if target == self.cursor.line {
			return false;
		}
		let goal = *self.goal_col.get_or_insert(self.cursor.col);
		self.cursor = Cursor {
			line: target,
			col: goal.min(self.line_len(target)),
		};
		true
	}

	fn page(&self) -> isize {
		isize::try_from(self.height.max(1)).unwrap_or(isize::MAX)
	}

	fn handle_key(&mut self, key: &Key) -> bool {
		if let Some(ch) = key.text_char() {
			self.insert_str(ch.encode_utf8(&mut [0; 4]));
			return true;
		}
		if key.modifiers.ctrl || key.modifiers.alt {
			return false;
		}

		let vertical = matches!(
			key.code,
			KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown
		);
		let changed = match key.code {
			KeyCode::Enter => {
				self.insert_str("\n");
				true
			}
			KeyCode::Tab => {
				self.insert_str(&" ".repeat(self.tab_width));
				true
			}
			KeyCode::Backspace => self.backspace(),
			KeyCode::Delete => self.delete(),
			KeyCode::Left => self.move_left(),
			KeyCode::Right => self.move_right(),
			KeyCode::Up => self.move_vertical(-1),
			KeyCode::Down => self.move_vertical(1),
			KeyCode::PageUp => self.move_vertical(-self.page()),
			KeyCode::PageDown => self.move_vertical(self.page()),
			KeyCode::Home => {
				let moved = self.cursor.col != 0;
				self.cursor.col = 0;
				moved
			}
			KeyCode::End => {
				let end = self.line_len(self.cursor.line);
				let moved = self.cursor.col != end;
				self.cursor.col = end;
				moved
			}
			KeyCode::Esc | KeyCode::Char(_) => false,
		};
		if !vertical {
			self.goal_col = None;
		}
		changed
	}

	fn render_row(&self, row: &Row, chars: &[char]) -> Line<'static> {
		let digits = self.gutter_digits();
		let number = if row.start == 0 {
			format!("{:>digits$} ", row.line + 1)
		} else {
			" ".repeat(digits + 1)
		};
		let mut spans = vec![Span::styled(number, self.styles.gutter)];

		let text = self.styles.text;
		let cursor = text.patch(self.styles.cursor);
		let draw_cursor = self.cursor_visible && row.holds_cursor(self.cursor.line, self.cursor.col);
		let mut run = String::new();
		for (col, &ch) in chars.iter().enumerate().take(row.end).skip(row.start) {
			let cell = render_char(ch, self.tab_width);
			if draw_cursor && col == self.cursor.col {
				if !run.is_empty() {
					spans.push(Span::styled(std::mem::take(&mut run), text));
				}
				spans.push(Span::styled(cell, cursor));
			} else {
				run.push_str(&cell);
			}
		}
		if !run.is_empty() {
			spans.push(Span::styled(run, text));
		}
		if draw_cursor && self.cursor.col == row.end {
			spans.push(Span::styled(" ", cursor));
		}
		Line::from(spans)
	}
}

/// Replaces tabs and control characters with printable cells.
fn render_char(ch: char, tab_width: usize) -> String {
	match ch {
		'\t' => " ".repeat(cell_width(ch, tab_width)),
		c if c.is_control() => "\u{FFFD}".to_string(),
		c => c.to_string(),
	}
}

/// Normalizes pasted line endings to `\n`.
fn normalize_paste(text: &str) -> String {
	text.replace("\r\n", "\n").replace('\r', "\n")
}

impl TextBuffer for TextArea {
	fn set_value(&mut self, content: &str) {
		self.doc = Rope::from_str(content);
		self.line_set = LineSet::from_rope(&self.doc);
		self.top = Anchor::default();
		self.set_cursor(0, 0);
	}

	fn value(&self) -> String {
		self.doc.to_string()
	}

	fn set_width(&mut self, width: u16) {
		self.width = width;
		self.scroll_to_cursor();
	}

	fn set_height(&mut self, height: u16) {
		self.height = height;
		self.scroll_to_cursor();
	}

	fn line_count(&self) -> usize {
		self.doc.len_lines()
	}

	fn unique_line_count(&self) -> usize {
		self.line_set.distinct()
	}

	fn cursor_line(&self) -> usize {
		self.cursor.line
	}

	fn handle_event(&mut self, event: &Event) -> bool {
		let changed = match event {
			Event::Key(key) => self.handle_key(key),
			Event::Paste(text) => {
				self.insert_str(&normalize_paste(text));
				!text.is_empty()
			}
			Event::Tick => {
				self.cursor_visible = !self.cursor_visible;
				return true;
			}
			Event::Resize { .. } => false,
		};
		if changed {
			self.cursor_visible = true;
			self.scroll_to_cursor();
		}
		changed
	}

	fn view(&self) -> Text<'static> {
		let height = usize::from(self.height);
		let mut lines = Vec::with_capacity(height);
		let mut skip = self.top.row;
		for line in self.top.line..self.doc.len_lines() {
			if lines.len() >= height {
				break;
			}
			let chars = self.line_chars(line);
			let rows = wrap_line(line, &chars, self.text_width(), self.tab_width);
			let room = height - lines.len();
			lines.extend(rows.iter().skip(skip).take(room).map(|row| self.render_row(row, &chars)));
			skip = 0;
		}
		Text::from(lines)
	}
}
