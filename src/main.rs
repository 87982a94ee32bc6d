// Terminal demo for the ariatui widgets.
// Loads config, sets up file logging, and runs the event loop.

mod app;
mod ui;

use std::fs;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use ariatui::Config;
use ariatui::config::log_path;

use crate::app::App;

/// Send tracing output to the log file; the terminal belongs to the UI.
fn init_logging(config: &Config) -> io::Result<()> {
    let Some(path) = log_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring config: {}", e);
            Config::default()
        }
    };
    init_logging(&config)?;
    tracing::info!(?config, "starting");

    let mut terminal = ratatui::init();
    let result = App::new(&config).run(&mut terminal);
    ratatui::restore();
    result
}
