use std::ffi::OsString;
use std::path::{Path, PathBuf};

const SUFFIX: &str = "-nopwd";

/// Path of the decrypted copy: `-nopwd` inserted before the extension, same directory.
///
/// `dir/report.pdf` becomes `dir/report-nopwd.pdf`, `dir/report` becomes `dir/report-nopwd`.
pub fn nopwd_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let mut name = OsString::new();
    if let Some(stem) = path.file_stem() {
        name.push(stem);
    }
    name.push(SUFFIX);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}
