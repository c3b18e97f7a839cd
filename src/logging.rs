use env_logger::Env;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::strict;

/// env_logger front end that also feeds PDF library warnings to [`strict::capture`].
pub struct StrictLogger {
    inner: env_logger::Logger,
}

impl StrictLogger {
    pub fn new(level: LevelFilter) -> Self {
        let inner = env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str())).build();
        StrictLogger { inner }
    }

    /// Level the `log` facade must let through so library warnings always reach the capture.
    pub fn max_level(&self) -> LevelFilter {
        self.inner.filter().max(LevelFilter::Warn)
    }
}

impl Log for StrictLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata) || strict::is_library_warning(metadata)
    }

    fn log(&self, record: &Record) {
        strict::record(record);
        if self.inner.matches(record) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Installs the process logger at `level` unless `RUST_LOG` says otherwise.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = StrictLogger::new(level);
    let max_level = logger.max_level();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    Ok(())
}
