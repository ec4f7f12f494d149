//! Build a table of every named Unicode code point and write it out
//! for a browser to load.
//!
//! Two one-shot jobs share this crate:
//!
//! - generating: walk the code points `0x20..=0x10FFFF`, drop
//!   surrogates, anything in a `C*` general category and anything
//!   without a name, and write the rest as a JSON array of
//!   `[code_point, name]` pairs (`unicode_data.json`);
//! - exporting: read that JSON back and write it as the single
//!   statement `window.UNICODE_DATA = [...];` (`unicode_data.js`).
//!
//! ```rust
//! use unicode_data::{BuiltinDatabase, Generator};
//!
//! let table = Generator::new(BuiltinDatabase::new())
//!     .with_range(0x41..=0x43)
//!     .generate();
//! assert_eq!(table.name_of(0x41), Some("LATIN CAPITAL LETTER A"));
//! assert_eq!(table.len(), 3);
//! ```
//!
//! The metadata comes from a [`CharacterDatabase`]. The
//! [`BuiltinDatabase`] is compiled in; a [`UcdFile`] reads a
//! `UnicodeData.txt` from the Unicode Character Database instead. The
//! table is only as current as the database behind it.

pub mod category;
pub mod database;
pub mod error;
pub mod export;
pub mod formatting;
pub mod generate;
mod jamo;
pub mod table;
pub mod ucd;

pub use category::GeneralCategory;
pub use database::{BuiltinDatabase, CharacterDatabase, CodePoint};
pub use error::{Error, Result};
pub use export::{export_file, export_table};
pub use generate::{generate_table, Generator, SkipCounts, DEFAULT_RANGE, SURROGATES};
pub use table::{read_table_file, write_script_file, write_table_file, CharacterRecord, CharacterTable};
pub use ucd::UcdFile;

/// Where the generator writes and the exporter reads.
pub static JSON_FILE: &str = "unicode_data.json";

/// Where the exporter writes.
pub static SCRIPT_FILE: &str = "unicode_data.js";
