use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes timestamped log lines to stderr so stdout stays free for the
/// summary.
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let label = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "INFO ",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        };
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "{} {} {}: {}",
            Local::now().format("%H:%M:%S%.3f"),
            label,
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
