//! The ritual event stream.
//!
//! Every event is emitted through `tracing` so the terminal sees it. While the
//! session has logging switched on, the same event is also appended to the
//! session log file as `timestamp - LEVEL - message`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use lazarus_common::config::Session;
use tracing::{Level, error, info, warn};

pub const JOURNAL_TARGET: &str = "lazarus::journal";

pub struct Journal<'a> {
    ritual: &'a str,
    sink: Option<&'a Path>,
}

impl<'a> Journal<'a> {
    pub fn new(ritual: &'a str, session: &'a Session) -> Self {
        Self {
            ritual,
            sink: session.logging.then_some(session.log_path.as_path()),
        }
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.record(Level::INFO, message.as_ref());
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.record(Level::WARN, message.as_ref());
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.record(Level::ERROR, message.as_ref());
    }

    fn record(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => error!(target: JOURNAL_TARGET, ritual = self.ritual, "{message}"),
            Level::WARN => warn!(target: JOURNAL_TARGET, ritual = self.ritual, "{message}"),
            _ => info!(target: JOURNAL_TARGET, ritual = self.ritual, "{message}"),
        }

        if let Some(path) = self.sink {
            if let Err(err) = append(path, level, message) {
                warn!("Could not write to log file {}: {err}", path.display());
            }
        }
    }
}

fn append(path: &Path, level: Level, message: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(
        file,
        "{} - {} - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
        level,
        message
    )
}
