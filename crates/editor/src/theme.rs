//! Styles for each frame region.
//!
//! A [`Theme`] is built once at startup and passed explicitly to
//! [`crate::render`].

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::ColorSpec;
use crate::textarea::TextAreaStyles;

/// Resolved styles used by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub title: Style,
	pub menu: Style,
	pub status: Style,
	pub border: Style,
	pub error: Style,
	pub gutter: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			title: Style::new().fg(Color::Indexed(230)).bg(Color::Indexed(62)),
			menu: Style::new().fg(Color::Indexed(250)).bg(Color::Indexed(235)),
			status: Style::new().fg(Color::Indexed(250)).bg(Color::Indexed(236)),
			border: Style::new().fg(Color::Indexed(240)),
			error: Style::new().fg(Color::Indexed(203)).add_modifier(Modifier::BOLD),
			gutter: Style::new().fg(Color::Indexed(240)),
		}
	}
}

impl Theme {
	/// Default theme with the configured overrides layered on top.
	pub fn from_config(config: &ThemeConfig) -> Self {
		let base = Self::default();
		let apply = |style: Style, spec: &Option<StyleSpec>| spec.as_ref().map_or(style, |s| style.patch(s.to_style()));
		Self {
			title: apply(base.title, &config.title),
			menu: apply(base.menu, &config.menu),
			status: apply(base.status, &config.status),
			border: apply(base.border, &config.border),
			error: apply(base.error, &config.error),
			gutter: apply(base.gutter, &config.gutter),
		}
	}

	/// Styles for the default text area.
	pub fn text_area_styles(&self) -> TextAreaStyles {
		TextAreaStyles {
			gutter: self.gutter,
			..TextAreaStyles::default()
		}
	}
}

/// Style override as written in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSpec {
	pub fg: Option<ColorSpec>,
	pub bg: Option<ColorSpec>,
	#[serde(default)]
	pub bold: bool,
}

impl StyleSpec {
	fn to_style(&self) -> Style {
		let mut style = Style::new();
		if let Some(fg) = self.fg {
			style = style.fg(fg.into());
		}
		if let Some(bg) = self.bg {
			style = style.bg(bg.into());
		}
		if self.bold {
			style = style.add_modifier(Modifier::BOLD);
		}
		style
	}
}

/// `[theme]` section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
	pub title: Option<StyleSpec>,
	pub menu: Option<StyleSpec>,
	pub status: Option<StyleSpec>,
	pub border: Option<StyleSpec>,
	pub error: Option<StyleSpec>,
	pub gutter: Option<StyleSpec>,
}
