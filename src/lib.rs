//! Remove password protection from PDF files.
//!
//! Each input is opened with the session password (empty at first). A rejected empty password
//! prompts the user once; a rejected supplied password aborts the run. Unlocked documents are
//! written next to the input as `<name>-nopwd<ext>`, documents that need no password are skipped.

pub mod cli;
pub mod document;
mod error;
pub mod logging;
pub mod naming;
pub mod options;
pub mod prompt;
pub mod strict;
mod unlock;

pub use error::{Error, Result};
pub use naming::nopwd_path;
pub use options::Options;
pub use prompt::{PasswordSource, Terminal};
pub use unlock::{FileOutcome, SkipReason, Unlocker};

/// Unlock every file named in `options`, asking `source` for passwords.
pub fn run<S: PasswordSource>(options: &Options, source: S) -> Result<Vec<FileOutcome>> {
    Unlocker::new(source, options.batch).run(&options.paths)
}
