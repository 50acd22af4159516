//! Colors as written in the config file.

use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

/// Error returned for unparseable color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}' (expected a palette index, #rrggbb, a color name or \"reset\")")]
pub struct InvalidColor(pub String);

/// A [`Color`] read from a config string.
///
/// Accepts a 256-color palette index (`"62"`), `#rrggbb`, an ANSI color
/// name (`"red"`, `"light-blue"`) or `"reset"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct ColorSpec(pub Color);

impl FromStr for ColorSpec {
	type Err = InvalidColor;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Color::from_str(s.trim())
			.map(ColorSpec)
			.map_err(|_| InvalidColor(s.to_string()))
	}
}

impl TryFrom<String> for ColorSpec {
	type Error = InvalidColor;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<ColorSpec> for Color {
	fn from(spec: ColorSpec) -> Self {
		spec.0
	}
}
