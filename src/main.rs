//! creditsearch - a credit search lead-capture form in the terminal.
//!
//! This is the main binary. It loads the configuration, runs the form and
//! prints the submitted details as JSON once the user quits.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::Context;
use chrono::Local;
use creditsearch_config::{Config, persistence::log_file_path};
use creditsearch_lookup::LookupClient;
use creditsearch_picker::DateFieldProps;
use creditsearch_protocol::FieldId;
use creditsearch_tui::{App, terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `creditsearch=debug`.
const LOG_ENV: &str = "CREDITSEARCH_LOG";

/// Sends logs to the data directory; stdout belongs to the TUI.
fn init_logging() -> anyhow::Result<()> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    init_logging()?;

    let config = Config::load().await.context("failed to load configuration")?;
    let today = Local::now().date_naive();
    let date_config = &config.date_of_birth;
    let bounds = date_config.bounds(today)?;
    info!(min = %bounds.min(), max = %bounds.max(), "starting form");

    let field = FieldId::DateOfBirth;
    let props = DateFieldProps::new(field.label(), field.name(), bounds)
        .required(field.is_required())
        .format(date_config.display_format)
        .week_start(date_config.week_start);

    let mut app = App::new(props, today);
    match LookupClient::new(&config.lookup) {
        Ok(client) => app = app.with_lookup(client),
        Err(e) => warn!(error = %e, "address lookup unavailable"),
    }

    let mut session = terminal::TerminalSession::start()?;
    let result = app.run(&mut session).await;

    // Always restore terminal, even if app.run() failed
    session.finish()?;
    result?;

    if let Some(values) = app.submitted_values() {
        println!("{}", serde_json::to_string_pretty(values)?);
    }
    Ok(())
}
