//! Writes `unicode_data.json`: every named code point from `0x20` up,
//! as `[code_point, name]` pairs.

use getopts::Options;
use log::info;

use unicode_data::{
    write_table_file, BuiltinDatabase, CharacterDatabase, Generator, Result, UcdFile, JSON_FILE,
};

mod cli;

static BRIEF: &str = "Usage: generate [options]\n\ngenerate the code point -> name table";

struct Config {
    output: String,
    ucd: Option<String>,
    truncate: Option<usize>,
}

fn run(config: &Config) -> Result<usize> {
    let db: Box<dyn CharacterDatabase> = match config.ucd {
        Some(ref path) => {
            info!("using character database {}", path);
            Box::new(UcdFile::open(path)?)
        }
        None => Box::new(BuiltinDatabase::new()),
    };

    let mut generator = Generator::new(db);
    if let Some(n) = config.truncate {
        generator = generator.with_limit(n);
    }
    let table = generator.generate();
    write_table_file(&table, &config.output)?;
    Ok(table.len())
}

fn main() {
    cli::init_logging();

    let mut opts = Options::new();
    opts.optopt("o", "output", "where to write the table (default unicode_data.json)", "FILE");
    opts.optopt("u", "ucd", "read names and categories from this UnicodeData.txt", "FILE");
    opts.optopt("", "truncate", "only keep the first N records", "N");
    opts.optflag("h", "help", "print this message");
    let matches = cli::parse_args(&opts, BRIEF);

    let truncate = match matches.opt_str("truncate").map(|s| s.parse::<usize>()) {
        None => None,
        Some(Ok(n)) => Some(n),
        Some(Err(_)) => cli::usage_error(&opts, BRIEF, "--truncate should be an integer"),
    };
    let config = Config {
        output: matches.opt_str("output").unwrap_or_else(|| JSON_FILE.to_string()),
        ucd: matches.opt_str("ucd"),
        truncate,
    };

    match run(&config) {
        Ok(n) => println!("Generated {} characters.", n),
        Err(e) => cli::fail(e),
    }
}
