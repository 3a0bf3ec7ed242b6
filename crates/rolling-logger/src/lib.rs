//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer and
//! forwards each one to the browser console (stderr on native targets).

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;
use thiserror::Error;

static LOGGER: OnceCell<RollingLogger> = OnceCell::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("failed to install logger: {0}")]
    SetLogger(String),
}

/// Logger settings
#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    /// Records kept in memory
    pub capacity: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 200,
            level: LevelFilter::Info,
        }
    }
}

pub struct RollingLogger {
    config: LoggerConfig,
    buffer: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            buffer: Mutex::new(VecDeque::with_capacity(config.capacity)),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, line: String) {
        if self.config.capacity == 0 {
            return;
        }
        if let Ok(mut buffer) = self.buffer.lock() {
            while buffer.len() >= self.config.capacity {
                buffer.pop_front();
            }
            buffer.push_back(line);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{} {:<5} [{}] {}",
            Utc::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if called twice.
pub fn init(config: LoggerConfig) -> Result<&'static RollingLogger, LoggerError> {
    let mut fresh = false;
    let logger = LOGGER.get_or_init(|| {
        fresh = true;
        RollingLogger::new(config)
    });
    if !fresh {
        return Err(LoggerError::AlreadyInitialized);
    }
    log::set_logger(logger).map_err(|err| LoggerError::SetLogger(err.to_string()))?;
    log::set_max_level(config.level);
    Ok(logger)
}

/// Lines buffered by the global logger, if installed
pub fn recent() -> Vec<String> {
    LOGGER.get().map(RollingLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_buffer_drops_oldest() {
        let logger = RollingLogger::new(LoggerConfig { capacity: 2, level: LevelFilter::Trace });
        record(&logger, Level::Info, "one");
        record(&logger, Level::Info, "two");
        record(&logger, Level::Info, "three");

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[test] two"));
        assert!(lines[1].ends_with("[test] three"));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LoggerConfig { capacity: 10, level: LevelFilter::Info });
        record(&logger, Level::Debug, "hidden");
        record(&logger, Level::Warn, "shown");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = RollingLogger::new(LoggerConfig { capacity: 0, level: LevelFilter::Trace });
        record(&logger, Level::Error, "gone");
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(LoggerError::AlreadyInitialized.to_string(), "logger already initialized");
        let err = LoggerError::SetLogger("a logger is already set".to_string());
        assert_eq!(err.to_string(), "failed to install logger: a logger is already set");
    }

    #[test]
    fn test_init_once() {
        let config = LoggerConfig { capacity: 5, level: LevelFilter::Debug };
        assert!(init(config).is_ok());
        assert!(matches!(init(config), Err(LoggerError::AlreadyInitialized)));

        log::debug!("after init");
        assert!(recent().iter().any(|l| l.ends_with("after init")));
    }
}
