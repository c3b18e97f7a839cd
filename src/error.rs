use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input path does not exist and batch mode is off.
    #[error("file not found: {0:?}")]
    FileNotFound(PathBuf),
    /// A password was already supplied in this run and the document rejected it.
    #[error("invalid password for {0:?}")]
    InvalidPassword(PathBuf),
    /// The PDF library failed to read the document.
    #[error("couldn't open {path:?}: {source}")]
    Pdf {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },
    /// Writing the decrypted copy failed.
    #[error("couldn't save {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The PDF library warned while handling the document.
    #[error("{path:?} raised a library warning: {message}")]
    LibraryWarning { path: PathBuf, message: String },
    /// Reading the password from the terminal failed.
    #[error("couldn't read password: {0}")]
    Prompt(#[source] std::io::Error),
}

impl Error {
    /// Process exit code for a run aborted by this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::FileNotFound(_) => 2,
            Error::InvalidPassword(_) => 3,
            _ => 1,
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        ExitCode::from(err.exit_code())
    }
}
