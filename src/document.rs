use std::path::Path;

use lopdf::encryption::DecryptionError;
use lopdf::Document;

use crate::strict;
use crate::{Error, Result};

/// Outcome of opening a document with a candidate password.
#[derive(Debug)]
pub enum Open {
    Unlocked(Document),
    WrongPassword,
}

/// Open `path` with `password`, treating library warnings as errors.
///
/// A rejected password is an ordinary outcome; every other library failure is an [`Error::Pdf`].
pub fn open(path: &Path, password: &str) -> Result<Open> {
    let (loaded, warnings) = strict::capture(|| Document::load_with_password(path, password));
    match loaded {
        Ok(doc) => {
            escalate(path, warnings)?;
            Ok(Open::Unlocked(doc))
        }
        Err(err) if is_wrong_password(&err) => Ok(Open::WrongPassword),
        Err(source) => Err(Error::Pdf {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write the decrypted document to `path`.
pub fn save(doc: &mut Document, path: &Path) -> Result<()> {
    let (saved, warnings) = strict::capture(|| doc.save(path));
    saved.map_err(|source| Error::Save {
        path: path.to_path_buf(),
        source,
    })?;
    escalate(path, warnings)
}

fn is_wrong_password(err: &lopdf::Error) -> bool {
    matches!(
        err,
        lopdf::Error::InvalidPassword | lopdf::Error::Decryption(DecryptionError::IncorrectPassword)
    )
}

fn escalate(path: &Path, warnings: Vec<String>) -> Result<()> {
    if warnings.is_empty() {
        return Ok(());
    }
    Err(Error::LibraryWarning {
        path: path.to_path_buf(),
        message: warnings.join("; "),
    })
}
