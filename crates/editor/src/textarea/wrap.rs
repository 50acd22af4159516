//! Soft-wrapping of document lines into visual rows.

use ropey::RopeSlice;
use unicode_width::UnicodeWidthChar;

/// One visual row: a char range within a single document line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Row {
	/// Document line index.
	pub line: usize,
	/// First char column (inclusive).
	pub start: usize,
	/// Last char column (exclusive).
	pub end: usize,
	/// Whether this is the final row of its line.
	pub last: bool,
}

impl Row {
	/// Whether a cursor at `col` on `line` is drawn in this row.
	pub fn holds_cursor(&self, line: usize, col: usize) -> bool {
		self.line == line && ((self.start..self.end).contains(&col) || (self.last && col == self.end))
	}
}

/// Number of chars making up the line ending of `line` (0, 1 or 2).
pub(super) fn ending_len(line: RopeSlice) -> usize {
	let len = line.len_chars();
	if len == 0 {
		return 0;
	}
	let last = line.char(len - 1);
	if last == '\n' && len >= 2 && line.char(len - 2) == '\r' {
		return 2;
	}
	match last {
		'\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}' => 1,
		_ => 0,
	}
}

/// Cell width of `ch` as drawn by the text area.
pub(super) fn cell_width(ch: char, tab_width: usize) -> usize {
	match ch {
		'\t' => tab_width,
		c if c.is_control() => 1,
		c => c.width().unwrap_or(0),
	}
}

/// Splits one line's chars into rows no wider than `width` cells.
///
/// A line that exactly fills its last row gets an extra empty row so a
/// cursor at the end of the line stays visible.
pub(super) fn wrap_line(line: usize, chars: &[char], width: usize, tab_width: usize) -> Vec<Row> {
	let width = width.max(1);
	let mut rows = Vec::new();
	let mut start = 0;
	let mut used = 0;

	for (col, &ch) in chars.iter().enumerate() {
		let w = cell_width(ch, tab_width);
		if used + w > width && col > start {
			rows.push(Row {
				line,
				start,
				end: col,
				last: false,
			});
			start = col;
			used = 0;
		}
		used += w;
	}

	rows.push(Row {
		line,
		start,
		end: chars.len(),
		last: true,
	});

	if used >= width && !chars.is_empty() {
		if let Some(row) = rows.last_mut() {
			row.last = false;
		}
		rows.push(Row {
			line,
			start: chars.len(),
			end: chars.len(),
			last: true,
		});
	}

	rows
}
