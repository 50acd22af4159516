//! The editor session: one file, one buffer, one viewport.
//!
//! Terminal events arrive one at a time through [`EditorSession::handle`].
//! Bound keys are resolved to save or quit; everything else is forwarded to
//! the text buffer and the viewport. Resizes then recompute the pane
//! geometry, and finally the viewport is refilled from the buffer's view so
//! the next frame reflects both the content change and the new size.


use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::bindings::{Bindings, Command};
use crate::chrome::Layout;
use crate::error::{LoadError, SaveError};
use crate::file::{FileAccess, read_or_empty};
use crate::key::Event;
use crate::scroll_view::ScrollView;
use crate::textarea::TextArea;
use crate::widget::{TextBuffer, Viewport};

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
	/// The buffer was written successfully.
	Saved,
	/// The user quit without writing.
	Quit,
}

/// Outcome of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
	/// Keep running. `redraw` is false when nothing visible changed.
	Continue { redraw: bool },
	/// Stop processing events and end the process.
	Exit(ExitReason),
}

/// State for one editing run.
pub struct EditorSession<F, B = TextArea, V = ScrollView> {
	filename: PathBuf,
	/// Size on disk when the session started. Not updated by edits.
	file_size: u64,
	files: F,
	buffer: B,
	/// Created by the first resize; `None` means not ready.
	viewport: Option<V>,
	width: u16,
	height: u16,
	bindings: Bindings,
	/// User-facing message shown in the status bar until the next key.
	notice: Option<String>,
}

impl<F, B, V> EditorSession<F, B, V>
where
	F: FileAccess,
	B: TextBuffer,
	V: Viewport,
{
	/// Loads `path` into `buffer`.
	///
	/// A missing file starts an empty session. Any other read failure, or
	/// content that is not UTF-8, is returned as an error.
	pub fn open(path: impl Into<PathBuf>, files: F, buffer: B) -> Result<Self, LoadError> {
		let path = path.into();
		let bytes = read_or_empty(&files, &path).map_err(|source| LoadError::Read {
			path: path.clone(),
			source,
		})?;
		let content = String::from_utf8(bytes).map_err(|e| LoadError::NotUtf8 {
			path: path.clone(),
			offset: e.utf8_error().valid_up_to(),
		})?;
		let file_size = files.size(&path);
		info!(path = %path.display(), size = file_size, "opened file");
		Ok(Self::from_parts(path, file_size, files, buffer, &content))
	}

	/// Builds a session from already-loaded content.
	pub fn from_parts(filename: PathBuf, file_size: u64, files: F, mut buffer: B, content: &str) -> Self {
		buffer.set_value(content);
		Self {
			filename,
			file_size,
			files,
			buffer,
			viewport: None,
			width: 0,
			height: 0,
			bindings: Bindings::default(),
			notice: None,
		}
	}

	pub fn with_bindings(mut self, bindings: Bindings) -> Self {
		self.bindings = bindings;
		self
	}

	pub fn filename(&self) -> &Path {
		&self.filename
	}

	pub fn file_size(&self) -> u64 {
		self.file_size
	}

	/// True once the first terminal size has been processed.
	pub fn is_ready(&self) -> bool {
		self.viewport.is_some()
	}

	/// Latest terminal dimensions, `(0, 0)` before the first resize.
	pub fn dimensions(&self) -> (u16, u16) {
		(self.width, self.height)
	}

	/// Pane geometry for the current terminal size, once ready.
	pub fn layout(&self) -> Option<Layout> {
		self.is_ready()
			.then(|| Layout::for_terminal(self.width, self.height))
	}

	pub fn buffer(&self) -> &B {
		&self.buffer
	}

	pub fn viewport(&self) -> Option<&V> {
		self.viewport.as_ref()
	}

	pub fn files(&self) -> &F {
		&self.files
	}

	/// The text that a save would write.
	pub fn content(&self) -> String {
		self.buffer.value()
	}

	pub fn notice(&self) -> Option<&str> {
		self.notice.as_deref()
	}

	/// Shows a failed save in the status bar until the next key press.
	pub fn show_error(&mut self, error: &SaveError) {
		self.notice = Some(error.to_string());
	}

	/// Processes one event.
	///
	/// Returns the save failure as an error instead of ending the session;
	/// the caller decides whether to display it and continue or to abort.
	pub fn handle(&mut self, event: Event) -> Result<Reaction, SaveError> {
		let mut redraw = false;

		if let Event::Key(key) = &event {
			redraw |= self.notice.take().is_some();
			match self.bindings.lookup(key) {
				Some(Command::Save) => {
					self.save()?;
					return Ok(Reaction::Exit(ExitReason::Saved));
				}
				Some(Command::Quit) => {
					info!("quit without saving");
					return Ok(Reaction::Exit(ExitReason::Quit));
				}
				None => {}
			}
		}

		redraw |= self.buffer.handle_event(&event);
		if let Some(viewport) = self.viewport.as_mut() {
			redraw |= viewport.handle_event(&event);
		}

		if let Event::Resize { width, height } = event {
			self.resize(width, height);
			redraw = true;
		}

		if let Some(viewport) = self.viewport.as_mut() {
			viewport.set_content(self.buffer.view());
		}

		Ok(Reaction::Continue { redraw })
	}

	/// Writes the buffer's full text over the file. One attempt, no retry.
	fn save(&mut self) -> Result<(), SaveError> {
		let content = self.buffer.value();
		self.files
			.write(&self.filename, content.as_bytes())
			.map_err(|source| SaveError {
				path: self.filename.clone(),
				source,
			})?;
		info!(path = %self.filename.display(), bytes = content.len(), "saved file");
		Ok(())
	}

	fn resize(&mut self, width: u16, height: u16) {
		self.width = width;
		self.height = height;
		let layout = Layout::for_terminal(width, height);

		match self.viewport.as_mut() {
			Some(viewport) => {
				viewport.set_width(layout.viewport_width);
				viewport.set_height(layout.viewport_height);
			}
			None => {
				debug!("first terminal size received, session ready");
				self.viewport = Some(V::with_size(layout.viewport_width, layout.viewport_height));
			}
		}

		self.buffer.set_width(layout.buffer_width);
		self.buffer.set_height(layout.viewport_height);
		debug!(
			width,
			height,
			viewport_height = layout.viewport_height,
			buffer_width = layout.buffer_width,
			"resized"
		);
	}
}
