//! Application - Initialization and Shell Loop
//!
//! Main entry point for the settings editor.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

use super::command::Command;
use super::session::{EditorSession, Reply};
use crate::constants::LOG_FILE_PREFIX;
use crate::helpers::get_or_create_data_dir;
use crate::services::FileStore;
use crate::settings::EditorSettings;

/// How long quitting waits for an unanswered commit
const QUIT_GRACE: Duration = Duration::from_secs(2);

/// Route logs to a daily rolling file so the shell output stays clean.
/// `RUST_LOG` wins over the configured level.
pub fn init_logging(settings: &EditorSettings) -> anyhow::Result<WorkerGuard> {
    let log_dir = get_or_create_data_dir()
        .context("resolving data directory")?
        .join("logs");
    let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime::rfc_3339())
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(guard)
}

/// Run the editor shell until `quit` or end of input
pub fn run_app(settings: EditorSettings) -> anyhow::Result<()> {
    let path = settings.document_path().context("resolving document path")?;
    let store = Arc::new(
        FileStore::open(&path).with_context(|| format!("opening {}", path.display()))?,
    );
    info!("Editing {}", path.display());

    let mut session = EditorSession::open(store, settings.policy)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", session.page().render())?;
    writeln!(stdout, "type `help` for commands")?;

    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        if line.trim().is_empty() {
            continue;
        }
        session.sync();

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "{e}")?;
                continue;
            }
        };

        match session.execute(command) {
            Ok(Reply::Print(text)) => writeln!(stdout, "{text}")?,
            Ok(Reply::Exit) => break,
            Err(e) => {
                warn!("Command failed: {e}");
                writeln!(stdout, "error: {e}")?;
            }
        }
        stdout.flush()?;
    }

    if !session.wait_for_store(QUIT_GRACE) {
        warn!("Quitting with a commit still unanswered");
    }
    if session.controller().is_dirty() {
        warn!(
            "Quitting with unsaved changes in {:?}",
            session.controller().changed_sections()
        );
        writeln!(stdout, "unsaved changes were discarded")?;
    }
    info!("Editor closed");
    Ok(())
}
