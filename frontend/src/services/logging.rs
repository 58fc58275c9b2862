//! Browser console logging.
//!
//! `Logger` is installed as the global `log` backend so records from the
//! `shared` crate end up in the console next to the component logs.

use gloo::console;
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install the console logger. Calling it twice keeps the first install.
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: component, "{message}");
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{message}");
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: component, "{message}");
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: component, "{message}");
    }
}

fn format_line(level: Level, component: &str, message: &str) -> String {
    format!("[{level}] {component}: {message}")
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => console::error!(line),
            Level::Warn => console::warn!(line),
            Level::Info => console::info!(line),
            Level::Debug | Level::Trace => console::debug!(line),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(Level::Warn, "calendar", "fetch failed"),
            "[WARN] calendar: fetch failed"
        );
    }
}
