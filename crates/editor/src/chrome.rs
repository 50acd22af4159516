//! Fixed chrome budgets and the geometry derived from them.
//!
//! The frame stacks a one-row title bar, a one-row menu bar, the bordered
//! editing box and a one-row status bar. Every derived dimension saturates
//! at zero, so a terminal smaller than the chrome yields a degenerate frame
//! rather than an error.

/// Rows reserved outside the viewport for bars and borders.
pub const VIEWPORT_RESERVED_ROWS: u16 = 10;
/// Columns reserved outside the text buffer for the box border and padding.
pub const BUFFER_RESERVED_COLS: u16 = 4;
/// Columns reserved outside the editing box interior.
pub const BOX_RESERVED_COLS: u16 = 2;
/// Rows reserved outside the editing box interior.
pub const BOX_RESERVED_ROWS: u16 = 8;

/// Geometry of every pane for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
	pub terminal_width: u16,
	pub terminal_height: u16,
	pub viewport_width: u16,
	pub viewport_height: u16,
	pub buffer_width: u16,
	/// Interior width of the editing box.
	pub box_width: u16,
	/// Interior height of the editing box.
	pub box_height: u16,
}

impl Layout {
	pub fn for_terminal(width: u16, height: u16) -> Self {
		Self {
			terminal_width: width,
			terminal_height: height,
			viewport_width: width,
			viewport_height: height.saturating_sub(VIEWPORT_RESERVED_ROWS),
			buffer_width: width.saturating_sub(BUFFER_RESERVED_COLS),
			box_width: width.saturating_sub(BOX_RESERVED_COLS),
			box_height: height.saturating_sub(BOX_RESERVED_ROWS),
		}
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn standard_terminal() {
		let layout = Layout::for_terminal(80, 24);
		assert_eq!(layout.buffer_width, 76);
		assert_eq!(layout.viewport_height, 14);
		assert_eq!(layout.viewport_width, 80);
		assert_eq!((layout.box_width, layout.box_height), (78, 16));
	}

	#[test]
	fn tiny_terminal_clamps_to_zero() {
		let layout = Layout::for_terminal(1, 3);
		assert_eq!(layout.buffer_width, 0);
		assert_eq!(layout.viewport_height, 0);
		assert_eq!(layout.box_width, 0);
		assert_eq!(layout.box_height, 0);
	}

	proptest! {
		#[test]
		fn derived_dimensions_saturate(w in any::<u16>(), h in any::<u16>()) {
			let layout = Layout::for_terminal(w, h);
			prop_assert_eq!(u32::from(layout.viewport_height), u32::from(h).saturating_sub(10));
			prop_assert_eq!(u32::from(layout.buffer_width), u32::from(w).saturating_sub(4));
			prop_assert_eq!(u32::from(layout.box_width), u32::from(w).saturating_sub(2));
			prop_assert_eq!(u32::from(layout.box_height), u32::from(h).saturating_sub(8));
		}
	}
}
