use std::io;
use std::path::Path;

/// Where passwords come from when a document rejects the current one.
pub trait PasswordSource {
    fn read_password(&mut self, prompt: &str) -> io::Result<String>;
}

impl<S: PasswordSource + ?Sized> PasswordSource for &mut S {
    fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        (**self).read_password(prompt)
    }
}

/// Reads from the controlling terminal with echo turned off.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl PasswordSource for Terminal {
    fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        rpassword::prompt_password(prompt)
    }
}

pub fn prompt_text(path: &Path, batch: bool) -> String {
    if batch {
        String::from("Input PDF password for all files: ")
    } else {
        format!("Input PDF password for '{}': ", path.display())
    }
}
