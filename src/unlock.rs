use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::document::{self, Open};
use crate::naming::nopwd_path;
use crate::prompt::{PasswordSource, prompt_text};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The document opened with an empty password.
    NoPasswordNeeded,
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Saved { input: PathBuf, output: PathBuf },
    Skipped { input: PathBuf, reason: SkipReason },
}

/// Walks the input files in order, carrying the session password between them.
///
/// In batch mode the first accepted password is tried on every following file before asking again.
/// Otherwise the session password starts out empty for each file.
pub struct Unlocker<S> {
    source: S,
    batch: bool,
    password: String,
}

impl<S: PasswordSource> Unlocker<S> {
    pub fn new(source: S, batch: bool) -> Self {
        Unlocker {
            source,
            batch,
            password: String::new(),
        }
    }

    /// Process every path, stopping at the first error.
    pub fn run<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<Vec<FileOutcome>> {
        paths.iter().map(|path| self.unlock(path.as_ref())).collect()
    }

    pub fn unlock(&mut self, path: &Path) -> Result<FileOutcome> {
        if !self.batch {
            self.password.clear();
        }

        if !path.exists() {
            warn!("File not found: '{}'", path.display());
            if !self.batch {
                error!("Exiting on FileNotFound error (non-batch)");
                return Err(Error::FileNotFound(path.to_path_buf()));
            }
        }

        loop {
            match document::open(path, &self.password)? {
                Open::Unlocked(_) if self.password.is_empty() => {
                    info!("Skipping '{}': No password was needed to open this PDF.", path.display());
                    return Ok(FileOutcome::Skipped {
                        input: path.to_path_buf(),
                        reason: SkipReason::NoPasswordNeeded,
                    });
                }
                Open::Unlocked(mut doc) => {
                    let output = nopwd_path(path);
                    document::save(&mut doc, &output)?;
                    info!("Saved '{}'", output.display());
                    return Ok(FileOutcome::Saved {
                        input: path.to_path_buf(),
                        output,
                    });
                }
                Open::WrongPassword if self.password.is_empty() => {
                    debug!("'{}' needs a password", path.display());
                    let prompt = prompt_text(path, self.batch);
                    self.password = self.source.read_password(&prompt).map_err(Error::Prompt)?;
                }
                Open::WrongPassword => {
                    error!("Invalid password for '{}'", path.display());
                    return Err(Error::InvalidPassword(path.to_path_buf()));
                }
            }
        }
    }
}
