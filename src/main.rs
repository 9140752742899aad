//! Agent Config Editor - Main Entry Point
//!
//! Settings editor for the capture agent's JSON configuration

use agent_config_editor::app::application::{init_logging, run_app};
use agent_config_editor::settings::EditorSettings;
use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let settings = EditorSettings::load().context("loading editor settings")?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_logging(&settings)?;

    tracing::info!("Starting agent config editor...");

    run_app(settings)
}
