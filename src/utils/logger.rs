//! Logger utility for application-wide logging
//!
//! A `log::Log` implementation that writes every record to a log file and
//! echoes warnings and errors to the console. In debug mode every record is
//! echoed.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level that is recorded
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    ///
    /// # Returns
    /// A new Logger instance or an error if the file cannot be created
    pub fn new<P: AsRef<Path>>(log_file: P, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Appends a line to the log file
    pub fn write_line(&self, message: &str) -> io::Result<()> {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                writeln!(file, "{}", message)?;
                file.flush()?;
            }
        }
        Ok(())
    }

    /// Install a logger as the global `log` backend
    ///
    /// The logger is leaked so commands can keep borrowing it for the rest of
    /// the process.
    pub fn init_global_logger<P: AsRef<Path>>(
        log_file: P,
        level: LevelFilter,
    ) -> io::Result<&'static Logger> {
        let logger: &'static Logger = Box::leak(Box::new(Logger::new(log_file, level)?));

        if log::set_logger(logger).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }
        log::set_max_level(level);

        Ok(logger)
    }

    fn echo_to_console(&self, level: Level) -> bool {
        level <= Level::Warn || self.level >= LevelFilter::Debug
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!("[{}] {}", record.level(), record.args());
        let _ = self.write_line(&message);

        if self.echo_to_console(record.level()) {
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in write_line
    }
}
