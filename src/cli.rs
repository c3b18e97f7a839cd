use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::options::Options;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about,
    long_about = "Remove password protection from PDF files. Each unlocked file is saved next to \
                  the original as <name>-nopwd<ext>.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level by one for every "v" (default: warnings only).
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Ask for password for every file name provided (default: ask once).
    #[clap(short = 'B', long)]
    pub no_batch: bool,

    /// File names to unprotect.
    #[clap(required = true, value_name = "PDFNAMES")]
    pub pdfnames: Vec<PathBuf>,
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Options::new(cli.pdfnames, cli.verbose, !cli.no_batch)
    }
}
