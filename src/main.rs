use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use pdfpwd::cli::Cli;
use pdfpwd::{Error, Options, Terminal, logging};

fn main() -> ExitCode {
    let options = Options::from(Cli::parse());
    if let Err(err) = logging::init(options.level_filter()) {
        eprintln!("couldn't initialize logging: {err}");
    }
    debug!("Starting");

    match pdfpwd::run(&options, Terminal) {
        Ok(_) => ExitCode::SUCCESS,
        // Already reported by the unlocker.
        Err(err @ (Error::FileNotFound(_) | Error::InvalidPassword(_))) => ExitCode::from(&err),
        Err(err) => {
            error!("{err}");
            ExitCode::from(&err)
        }
    }
}
