//! Test doubles for the session's collaborators.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::text::Text;

use crate::file::FileAccess;
use crate::key::Event;
use crate::widget::{TextBuffer, Viewport};

/// In-memory filesystem that records every write.
#[derive(Debug, Default)]
pub struct MemoryFiles {
	pub files: HashMap<PathBuf, Vec<u8>>,
	pub writes: Vec<(PathBuf, Vec<u8>)>,
	/// When set, reads fail with this kind.
	pub read_error: Option<io::ErrorKind>,
	/// When set, writes fail with this kind.
	pub write_error: Option<io::ErrorKind>,
}

impl MemoryFiles {
	pub fn with_file(path: &str, content: &[u8]) -> Self {
		let mut files = Self::default();
		files.files.insert(PathBuf::from(path), content.to_vec());
		files
	}
}

impl FileAccess for MemoryFiles {
	fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
		if let Some(kind) = self.read_error {
			return Err(io::Error::new(kind, "injected read failure"));
		}
		self.files
			.get(path)
			.cloned()
			.ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
	}

	fn size(&self, path: &Path) -> u64 {
		self.files.get(path).map_or(0, |b| b.len() as u64)
	}

	fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
		if let Some(kind) = self.write_error {
			return Err(io::Error::new(kind, "injected write failure"));
		}
		self.writes.push((path.to_path_buf(), bytes.to_vec()));
		self.files.insert(path.to_path_buf(), bytes.to_vec());
		Ok(())
	}
}

/// Calls observed on a widget double, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
	SetValue(String),
	SetWidth(u16),
	SetHeight(u16),
	SetContent(String),
	Event(Event),
}

/// Text buffer stand-in that records calls and returns canned values.
#[derive(Debug, Default)]
pub struct RecordingBuffer {
	pub value: String,
	pub calls: Vec<Call>,
	pub lines: usize,
	pub unique_lines: usize,
	pub cursor_line: usize,
	pub view: String,
}

impl TextBuffer for RecordingBuffer {
	fn set_value(&mut self, content: &str) {
		self.value = content.to_string();
		self.calls.push(Call::SetValue(content.to_string()));
	}

	fn value(&self) -> String {
		self.value.clone()
	}

	fn set_width(&mut self, width: u16) {
		self.calls.push(Call::SetWidth(width));
	}

	fn set_height(&mut self, height: u16) {
		self.calls.push(Call::SetHeight(height));
	}

	fn line_count(&self) -> usize {
		self.lines
	}

	fn unique_line_count(&self) -> usize {
		self.unique_lines
	}

	fn cursor_line(&self) -> usize {
		self.cursor_line
	}

	fn handle_event(&mut self, event: &Event) -> bool {
		self.calls.push(Call::Event(event.clone()));
		false
	}

	fn view(&self) -> Text<'static> {
		Text::raw(self.view.clone())
	}
}

/// Viewport stand-in that records calls.
#[derive(Debug, Default)]
pub struct RecordingViewport {
	pub width: u16,
	pub height: u16,
	pub content: Text<'static>,
	pub calls: Vec<Call>,
}

impl Viewport for RecordingViewport {
	fn with_size(width: u16, height: u16) -> Self {
		Self {
			width,
			height,
			..Self::default()
		}
	}

	fn set_width(&mut self, width: u16) {
		self.width = width;
		self.calls.push(Call::SetWidth(width));
	}

	fn set_height(&mut self, height: u16) {
		self.height = height;
		self.calls.push(Call::SetHeight(height));
	}

	fn width(&self) -> u16 {
		self.width
	}

	fn height(&self) -> u16 {
		self.height
	}

	fn set_content(&mut self, content: Text<'static>) {
		self.calls.push(Call::SetContent(content.to_string()));
		self.content = content;
	}

	fn handle_event(&mut self, event: &Event) -> bool {
		self.calls.push(Call::Event(event.clone()));
		false
	}

	fn view(&self) -> Text<'static> {
		Text::from(
			self.content
				.lines
				.iter()
				.take(usize::from(self.height))
				.cloned()
				.collect::<Vec<_>>(),
		)
	}
}
