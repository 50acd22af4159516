mod app;
mod cli;
mod input;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, USAGE};
use dword_editor::{Config, DiskFiles, EditorSession, TextArea};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	let Some(path) = cli.file.clone() else {
		println!("{USAGE}");
		std::process::exit(1);
	};

	logging::setup_tracing(cli.verbose);

	let config = match (&cli.config, Config::default_path()) {
		(Some(explicit), _) => Config::load_explicit(explicit)?,
		(None, Some(default)) => Config::load(&default)?,
		(None, None) => {
			warn!("no config directory, using defaults");
			Config::default()
		}
	};
	let theme = config.theme();

	let buffer = TextArea::default()
		.with_tab_width(config.editor.tab_width)
		.with_styles(theme.text_area_styles());
	let mut session: EditorSession<DiskFiles> = EditorSession::open(&path, DiskFiles, buffer)
		.with_context(|| format!("failed to open {}", path.display()))?
		.with_bindings(config.keys.clone());

	let reason = app::run(&mut session, &theme, config.editor.blink_interval())?;
	info!(?reason, "session ended");
	Ok(())
}
