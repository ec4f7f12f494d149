//! The code point -> name table and its file formats.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::database::CodePoint;
use crate::error::{Error, Result};
use crate::formatting::{self, GLOBAL_NAME};

/// One row of the table, stored as the 2-element array
/// `[code_point, name]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterRecord(pub CodePoint, pub String);

impl CharacterRecord {
    pub fn new<S: Into<String>>(code_point: CodePoint, name: S) -> CharacterRecord {
        CharacterRecord(code_point, name.into())
    }

    pub fn code_point(&self) -> CodePoint {
        self.0
    }

    pub fn name(&self) -> &str {
        &self.1
    }
}

/// Named code points in ascending order.
///
/// The order comes from the generator walking the code points in
/// order; nothing here sorts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterTable {
    records: Vec<CharacterRecord>,
}

impl CharacterTable {
    pub fn new() -> CharacterTable {
        CharacterTable::default()
    }

    pub fn push(&mut self, record: CharacterRecord) {
        self.records.push(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, CharacterRecord> {
        self.records.iter()
    }

    /// Find the name of `cp`. Relies on the ascending order.
    pub fn name_of(&self, cp: CodePoint) -> Option<&str> {
        self.records
            .binary_search_by_key(&cp, CharacterRecord::code_point)
            .ok()
            .map(|idx| self.records[idx].name())
    }

    /// Whether code points are strictly increasing.
    pub fn is_ascending(&self) -> bool {
        self.records.windows(2).all(|w| w[0].0 < w[1].0)
    }

    /// Parse the JSON array of `[code_point, name]` pairs.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<CharacterTable> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(text: &str) -> Result<CharacterTable> {
        Ok(serde_json::from_str(text)?)
    }

    /// The JSON form written to `unicode_data.json`.
    pub fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        formatting::write_json(out, self)
    }

    /// The script form written to `unicode_data.js`: the same JSON,
    /// assigned to `window.UNICODE_DATA`.
    pub fn write_script<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        formatting::write_assignment(out, GLOBAL_NAME, self)
    }

    /// Read a table back out of its script form.
    pub fn from_script_str(text: &str) -> Result<CharacterTable> {
        CharacterTable::from_json_str(formatting::assignment_literal(text, GLOBAL_NAME)?)
    }
}

impl From<Vec<CharacterRecord>> for CharacterTable {
    fn from(records: Vec<CharacterRecord>) -> CharacterTable {
        CharacterTable { records }
    }
}

impl FromIterator<CharacterRecord> for CharacterTable {
    fn from_iter<I: IntoIterator<Item = CharacterRecord>>(iter: I) -> CharacterTable {
        CharacterTable {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CharacterTable {
    type Item = CharacterRecord;
    type IntoIter = std::vec::IntoIter<CharacterRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a CharacterTable {
    type Item = &'a CharacterRecord;
    type IntoIter = slice::Iter<'a, CharacterRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Load a table from a JSON file, reporting a missing file as
/// [`Error::MissingInput`].
pub fn read_table_file<P: AsRef<Path>>(path: P) -> Result<CharacterTable> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::MissingInput(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    CharacterTable::from_json_reader(BufReader::new(file))
}

/// Write `table` as JSON to `path`, replacing it only once the whole
/// table has been written.
pub fn write_table_file<P: AsRef<Path>>(table: &CharacterTable, path: P) -> Result<()> {
    formatting::write_file_atomically(path, |out| table.write_json(out))
}

/// Write `table` in script form to `path`, with the same guarantees
/// as [`write_table_file`].
pub fn write_script_file<P: AsRef<Path>>(table: &CharacterTable, path: P) -> Result<()> {
    formatting::write_file_atomically(path, |out| table.write_script(out))
}
