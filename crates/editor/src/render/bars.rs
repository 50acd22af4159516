//! Title, menu and status bars.

use std::path::Path;

use bytesize::ByteSize;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme::Theme;

/// Fixed menu labels. Display only.
pub const MENU_ITEMS: &str = "[L]oad  [S]ave  [F]ind  [R]eplace  [E]dit  [T]ools  [H]elp  [Q]uit";

/// Product and version shown at the left of the title bar.
pub fn product_label() -> String {
	format!("dword v{}", env!("CARGO_PKG_VERSION"))
}

/// A label with one cell of padding on each side.
fn padded(label: &str, style: Style) -> Span<'static> {
	Span::styled(format!(" {label} "), style)
}

/// `product | file (size) | <gap> | Line: n/m`.
///
/// The gap fills the bar to exactly `width` cells. When the segments alone
/// are wider than the terminal the gap is empty and the bar overflows.
pub(super) fn title_bar(
	width: usize,
	filename: &Path,
	file_size: u64,
	current_line: usize,
	total_lines: usize,
	theme: &Theme,
) -> Line<'static> {
	let title = padded(&product_label(), theme.title);
	let file_info = padded(
		&format!("{} ({})", filename.display(), ByteSize::b(file_size)),
		theme.title,
	);
	let line_status = padded(&format!("Line: {current_line}/{total_lines}"), theme.title);

	let used = title.width() + file_info.width() + line_status.width();
	let gap = Span::raw(" ".repeat(width.saturating_sub(used)));

	Line::from(vec![title, file_info, gap, line_status])
}

/// Menu labels; the line style fills the rest of the row.
pub(super) fn menu_bar(theme: &Theme) -> Line<'static> {
	Line::from(padded(MENU_ITEMS, Style::new())).style(theme.menu)
}

pub(super) fn status_bar(
	total_lines: usize,
	unique_lines: usize,
	notice: Option<&str>,
	theme: &Theme,
) -> Line<'static> {
	let mut spans = vec![Span::raw(format!(
		" STATUS: {total_lines} lines | {unique_lines} unique"
	))];
	if let Some(notice) = notice {
		spans.push(Span::raw(" | "));
		spans.push(Span::styled(notice.to_string(), theme.error));
	}
	spans.push(Span::raw(" "));
	Line::from(spans).style(theme.status)
}
