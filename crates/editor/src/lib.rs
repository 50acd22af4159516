#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Editing session and layout engine for the dword terminal editor.
//!
//! This crate is terminal-agnostic: it consumes [`Event`]s and draws into a
//! ratatui buffer. Owning the terminal and reading input belong to the binary.
//!
//! # Main Types
//!
//! - [`EditorSession`] - Owns the file, the text buffer and the viewport
//! - [`Screen`] - Widget drawing a session with a [`Theme`]
//! - [`TextArea`] - Default multi-line text buffer
//! - [`ScrollView`] - Default scrollable viewport
//!
//! # Flow
//!
//! ```text
//! Event ──► EditorSession::handle ──► Reaction
//!                 │
//!                 ├── Bindings (save / quit)
//!                 ├── TextBuffer::handle_event
//!                 └── Viewport::handle_event, set_content
//!
//! EditorSession::render(&mut ratatui::Frame, &Theme)
//! ```

/// Session-level key bindings.
pub mod bindings;
/// Reserved rows and columns around the editing area.
pub mod chrome;
/// User configuration file.
pub mod config;
pub mod error;
/// Filesystem boundary.
pub mod file;
/// Keys and input events.
pub mod key;
/// Screen composition.
pub mod render;
pub mod scroll_view;
pub mod session;
/// Colors in the config file.
pub mod style;
pub mod textarea;
pub mod theme;
/// Traits implemented by the text buffer and viewport widgets.
pub mod widget;

#[cfg(test)]
mod testing;

pub use bindings::{Bindings, Command};
pub use chrome::Layout;
pub use config::{Config, ConfigError, EditorOptions};
pub use error::{LoadError, SaveError};
pub use file::{DiskFiles, FileAccess};
pub use key::{Event, Key, KeyCode, KeyParseError, Modifiers};
pub use render::Screen;
pub use scroll_view::ScrollView;
pub use session::{EditorSession, ExitReason, Reaction};
pub use style::{ColorSpec, InvalidColor};
pub use textarea::TextArea;
pub use theme::Theme;
pub use widget::{TextBuffer, Viewport};
