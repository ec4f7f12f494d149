//! Plumbing shared by the `generate` and `export` jobs.

use std::process;

use env_logger::Env;
use getopts::{Matches, Options};
use log::{error, warn};

pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Parse the process arguments, handling `-h` and bad flags by
/// printing the usage and exiting.
pub fn parse_args(opts: &Options, brief: &str) -> Matches {
    let matches = match opts.parse(std::env::args().skip(1)) {
        Ok(m) => m,
        Err(f) => usage_error(opts, brief, &f.to_string()),
    };
    if matches.opt_present("h") {
        println!("{}", opts.usage(brief));
        process::exit(0);
    }
    if !matches.free.is_empty() {
        warn!("ignoring extra arguments: {:?}", matches.free);
    }
    matches
}

pub fn usage_error(opts: &Options, brief: &str, msg: &str) -> ! {
    eprintln!("{}\n\n{}", msg, opts.usage(brief));
    process::exit(2)
}

/// Report an unexpected failure and exit with status 1.
pub fn fail(e: unicode_data::Error) -> ! {
    error!("{}", e);
    process::exit(1)
}
