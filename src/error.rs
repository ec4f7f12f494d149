//! Definition of the crate's error and result.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building or exporting a table.
///
/// A code point without a name is not an error; the generator just
/// leaves it out.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file of a conversion does not exist.
    #[error("{} not found.", _0.display())]
    MissingInput(PathBuf),
    /// IO error.
    #[error("An IO error occurred: '{}'", _0)]
    Io(#[from] io::Error),
    /// The table file is not a JSON array of `[code_point, name]` pairs.
    #[error("Invalid table data: '{}'", _0)]
    Json(#[from] serde_json::Error),
    /// A line of `UnicodeData.txt` could not be understood.
    #[error("UnicodeData.txt line {line_number} is invalid: '{line}'")]
    InvalidUcdLine { line_number: usize, line: String },
    /// A `<..., First>` range entry without its `<..., Last>` partner.
    #[error("UnicodeData.txt line {line_number}: unclosed range '{name}'")]
    UnclosedRange { line_number: usize, name: String },
    /// A script file that is not a single `window.UNICODE_DATA = ...;`
    /// statement.
    #[error("Not a table script: {}", _0)]
    InvalidScript(String),
}

/// `Result` with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
