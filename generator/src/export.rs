//! Rewrites `unicode_data.json` as `unicode_data.js`, a script that
//! assigns the same array to `window.UNICODE_DATA`.

use getopts::Options;

use unicode_data::{export_file, Error, JSON_FILE, SCRIPT_FILE};

mod cli;

static BRIEF: &str = "Usage: export [options]\n\nwrap the code point -> name table in a script";

fn main() {
    cli::init_logging();

    let mut opts = Options::new();
    opts.optopt("i", "input", "the table to read (default unicode_data.json)", "FILE");
    opts.optopt("o", "output", "where to write the script (default unicode_data.js)", "FILE");
    opts.optflag("h", "help", "print this message");
    let matches = cli::parse_args(&opts, BRIEF);

    let input = matches.opt_str("input").unwrap_or_else(|| JSON_FILE.to_string());
    let output = matches.opt_str("output").unwrap_or_else(|| SCRIPT_FILE.to_string());

    match export_file(&input, &output) {
        Ok(_) => println!("Successfully converted {} to {}", input, output),
        Err(e @ Error::MissingInput(_)) => println!("Error: {}", e),
        Err(e) => cli::fail(e),
    }
}
