//! A [`CharacterDatabase`] read from `UnicodeData.txt`.
//!
//! Each line is `code;name;category;...`. Large blocks whose names are
//! derived from the code point (CJK ideographs, hangul syllables, ...)
//! are stored as a pair of lines, `<Block, First>` and `<Block, Last>`;
//! those names are computed on lookup.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::category::GeneralCategory;
use crate::database::{CharacterDatabase, CodePoint};
use crate::error::{Error, Result};
use crate::jamo;

const MAX_CODE_POINT: CodePoint = 0x10FFFF;

#[derive(Debug)]
struct Entry {
    category: GeneralCategory,
    name: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RangeNaming {
    CjkIdeograph,
    TangutIdeograph,
    HangulSyllable,
    Unnamed,
}

#[derive(Debug)]
struct Range {
    first: CodePoint,
    last: CodePoint,
    category: GeneralCategory,
    naming: RangeNaming,
}

/// The contents of a `UnicodeData.txt` file.
#[derive(Debug, Default)]
pub struct UcdFile {
    entries: BTreeMap<CodePoint, Entry>,
    ranges: Vec<Range>,
}

fn extract(line_number: usize, line: &str) -> Result<(CodePoint, &str, GeneralCategory)> {
    let invalid = || Error::InvalidUcdLine {
        line_number,
        line: line.to_string(),
    };
    let mut splits = line.split(';');
    let cp = splits
        .next()
        .and_then(|s| CodePoint::from_str_radix(s, 16).ok())
        .filter(|&cp| cp <= MAX_CODE_POINT)
        .ok_or_else(invalid)?;
    let name = splits.next().filter(|n| !n.is_empty()).ok_or_else(invalid)?;
    let category = splits
        .next()
        .and_then(GeneralCategory::from_abbr)
        .ok_or_else(invalid)?;
    Ok((cp, name, category))
}

fn range_naming(label: &str) -> RangeNaming {
    if label.starts_with("CJK Ideograph") {
        RangeNaming::CjkIdeograph
    } else if label.starts_with("Tangut Ideograph") {
        RangeNaming::TangutIdeograph
    } else if label.starts_with("Hangul Syllable") {
        RangeNaming::HangulSyllable
    } else {
        RangeNaming::Unnamed
    }
}

impl UcdFile {
    /// Read `UnicodeData.txt` from `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<UcdFile> {
        let path = path.as_ref();
        debug!("reading character database {}", path.display());
        let file = File::open(path)?;
        UcdFile::from_reader(BufReader::new(file))
    }

    /// Parse `UnicodeData.txt` contents held in memory.
    pub fn parse(text: &str) -> Result<UcdFile> {
        UcdFile::from_reader(text.as_bytes())
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<UcdFile> {
        let mut ucd = UcdFile::default();
        let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));

        while let Some((line_number, line)) = lines.next() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (cp, name, category) = extract(line_number, line)?;

            if let Some(label) = name.strip_prefix('<').and_then(|n| n.strip_suffix(", First>")) {
                // should be followed by `<label, Last>`
                let unclosed = || Error::UnclosedRange {
                    line_number,
                    name: name.to_string(),
                };
                let (last_number, last_line) = lines.next().ok_or_else(unclosed)?;
                let last_line = last_line?;
                let (last, last_name, _) = extract(last_number, last_line.trim())?;
                let closes = last_name
                    .strip_prefix('<')
                    .and_then(|n| n.strip_suffix(", Last>"))
                    .map_or(false, |l| l == label);
                if !closes || last < cp {
                    return Err(unclosed());
                }
                ucd.ranges.push(Range {
                    first: cp,
                    last,
                    category,
                    naming: range_naming(label),
                });
            } else {
                // `<control>` and friends are labels, not names
                let name = if name.starts_with('<') {
                    None
                } else {
                    Some(name.to_string())
                };
                ucd.entries.insert(cp, Entry { category, name });
            }
        }
        debug!(
            "character database: {} entries, {} ranges",
            ucd.entries.len(),
            ucd.ranges.len()
        );
        Ok(ucd)
    }

    fn range(&self, cp: CodePoint) -> Option<&Range> {
        self.ranges.iter().find(|r| r.first <= cp && cp <= r.last)
    }
}

impl CharacterDatabase for UcdFile {
    fn category(&self, cp: CodePoint) -> GeneralCategory {
        if let Some(entry) = self.entries.get(&cp) {
            return entry.category;
        }
        self.range(cp)
            .map_or(GeneralCategory::Unassigned, |r| r.category)
    }

    fn name(&self, cp: CodePoint) -> Option<String> {
        if let Some(entry) = self.entries.get(&cp) {
            return entry.name.clone();
        }
        match self.range(cp)?.naming {
            RangeNaming::CjkIdeograph => Some(format!("CJK UNIFIED IDEOGRAPH-{:X}", cp)),
            RangeNaming::TangutIdeograph => Some(format!("TANGUT IDEOGRAPH-{:X}", cp)),
            RangeNaming::HangulSyllable => jamo::syllable_name(cp),
            RangeNaming::Unnamed => None,
        }
    }
}
