use std::path::PathBuf;

use log::LevelFilter;

const MAX_VERBOSITY: u8 = 2;

/// One invocation of the unlocker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub paths: Vec<PathBuf>,
    /// 0 = warning, 1 = info, 2 = debug.
    pub verbosity: u8,
    /// Ask once for all files instead of once per file.
    pub batch: bool,
}

impl Options {
    /// Batch mode only applies to runs over two or more files.
    pub fn new(paths: Vec<PathBuf>, verbosity: u8, batch: bool) -> Self {
        let batch = batch && paths.len() > 1;
        Options {
            paths,
            verbosity: verbosity.min(MAX_VERBOSITY),
            batch,
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}
