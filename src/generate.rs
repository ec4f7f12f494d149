//! Building the table by walking the code points.

use std::ops::RangeInclusive;

use log::{debug, info};

use crate::database::{CharacterDatabase, CodePoint};
use crate::table::{CharacterRecord, CharacterTable};

/// `0x20` (SPACE) up to the last code point.
pub const DEFAULT_RANGE: RangeInclusive<CodePoint> = 0x20..=0x10FFFF;

/// The code points set aside for UTF-16 encoding. They never stand
/// alone as characters, so no database answer can get them a row.
pub const SURROGATES: RangeInclusive<CodePoint> = 0xD800..=0xDFFF;

/// How many code points were left out, and why.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub surrogate: usize,
    pub category: usize,
    pub unnamed: usize,
}

/// Walks a range of code points against a [`CharacterDatabase`].
pub struct Generator<D> {
    db: D,
    range: RangeInclusive<CodePoint>,
    limit: Option<usize>,
}

impl<D: CharacterDatabase> Generator<D> {
    pub fn new(db: D) -> Generator<D> {
        Generator {
            db,
            range: DEFAULT_RANGE,
            limit: None,
        }
    }

    /// Only look at `range` rather than [`DEFAULT_RANGE`].
    pub fn with_range(mut self, range: RangeInclusive<CodePoint>) -> Generator<D> {
        self.range = range;
        self
    }

    /// Stop once `limit` records have been collected.
    pub fn with_limit(mut self, limit: usize) -> Generator<D> {
        self.limit = Some(limit);
        self
    }

    /// The record for `cp`, or `None` if `cp` gets no row.
    pub fn record(&self, cp: CodePoint) -> Option<CharacterRecord> {
        self.classify(cp).ok()
    }

    fn classify(&self, cp: CodePoint) -> Result<CharacterRecord, Skip> {
        if SURROGATES.contains(&cp) {
            return Err(Skip::Surrogate);
        }
        if self.db.category(cp).is_other() {
            return Err(Skip::Category);
        }
        match self.db.name(cp) {
            Some(name) if !name.is_empty() => Ok(CharacterRecord(cp, name)),
            _ => Err(Skip::Unnamed),
        }
    }

    pub fn generate(&self) -> CharacterTable {
        self.generate_with_counts().0
    }

    /// Like [`generate`](Generator::generate), also reporting what was
    /// skipped.
    pub fn generate_with_counts(&self) -> (CharacterTable, SkipCounts) {
        let mut table = CharacterTable::new();
        let mut skipped = SkipCounts::default();
        let limit = self.limit.unwrap_or(usize::MAX);

        for cp in self.range.clone() {
            if table.len() >= limit {
                debug!("stopping at {:#X}: reached the limit of {} records", cp, limit);
                break;
            }
            match self.classify(cp) {
                Ok(record) => table.push(record),
                Err(Skip::Surrogate) => skipped.surrogate += 1,
                Err(Skip::Category) => skipped.category += 1,
                Err(Skip::Unnamed) => skipped.unnamed += 1,
            }
        }

        info!(
            "{} named code points in {:#X}..={:#X}",
            table.len(),
            self.range.start(),
            self.range.end()
        );
        debug!(
            "skipped {} surrogates, {} by category, {} without a name",
            skipped.surrogate, skipped.category, skipped.unnamed
        );
        (table, skipped)
    }
}

#[derive(Clone, Copy, Debug)]
enum Skip {
    Surrogate,
    Category,
    Unnamed,
}

/// The whole table for `db` over [`DEFAULT_RANGE`].
pub fn generate_table<D: CharacterDatabase>(db: D) -> CharacterTable {
    Generator::new(db).generate()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::category::GeneralCategory::{self, *};

    /// A handful of code points, some of them deliberately wrong
    /// about themselves.
    struct Synthetic(BTreeMap<CodePoint, (GeneralCategory, Option<&'static str>)>);

    impl Synthetic {
        fn new() -> Synthetic {
            Synthetic(
                vec![
                    (0x1F, (Control, None)),
                    (0x20, (SpaceSeparator, Some("SPACE"))),
                    (0x41, (UppercaseLetter, Some("LATIN CAPITAL LETTER A"))),
                    (0x7F, (Control, Some("DELETE"))),
                    (0xAD, (Format, Some("SOFT HYPHEN"))),
                    (0x378, (OtherLetter, None)),
                    (0x379, (OtherLetter, Some(""))),
                    // a database that claims a surrogate is a letter
                    (0xD800, (OtherLetter, Some("NOT REALLY A LETTER"))),
                    (0xDFFF, (OtherLetter, Some("NOR THIS"))),
                    (0xE000, (PrivateUse, Some("PRIVATE"))),
                    (0x2603, (OtherSymbol, Some("SNOWMAN"))),
                    (0x10FFFF, (OtherSymbol, Some("LAST"))),
                ]
                .into_iter()
                .collect(),
            )
        }
    }

    impl CharacterDatabase for Synthetic {
        fn category(&self, cp: CodePoint) -> GeneralCategory {
            self.0.get(&cp).map_or(Unassigned, |&(cat, _)| cat)
        }
        fn name(&self, cp: CodePoint) -> Option<String> {
            self.0.get(&cp).and_then(|&(_, n)| n).map(str::to_string)
        }
    }

    #[test]
    fn keeps_named_non_other() {
        let table = generate_table(Synthetic::new());
        let cps: Vec<_> = table.iter().map(|r| r.code_point()).collect();
        assert_eq!(cps, vec![0x20, 0x41, 0x2603, 0x10FFFF]);
        assert_eq!(table.name_of(0x41), Some("LATIN CAPITAL LETTER A"));
        assert_eq!(table.name_of(0x20), Some("SPACE"));
    }

    #[test]
    fn surrogates_are_skipped_whatever_the_database_says() {
        let db = Synthetic::new();
        let generator = Generator::new(&db);
        assert_eq!(generator.record(0xD800), None);
        assert_eq!(generator.record(0xDFFF), None);
        assert_eq!(generator.record(0x20), Some(CharacterRecord::new(0x20, "SPACE")));
    }

    #[test]
    fn skip_reasons() {
        let (_, skipped) = Generator::new(Synthetic::new())
            .with_range(0x0..=0xE000)
            .generate_with_counts();
        assert_eq!(skipped.surrogate, 0x800);
        // 0x1F, 0x7F, 0xAD, 0xE000 and everything unassigned; the
        // three records are 0x20, 0x41 and 0x2603
        assert_eq!(skipped.category, 0xE001 - 0x800 - 3 - 2);
        // 0x378 has no name and 0x379 an empty one
        assert_eq!(skipped.unnamed, 2);
    }

    #[test]
    fn range_starts_at_space() {
        let table = Generator::new(Synthetic::new()).generate();
        assert_eq!(table.records()[0], CharacterRecord::new(0x20, "SPACE"));
        let table = Generator::new(Synthetic::new()).with_range(0x21..=0x7F).generate();
        assert_eq!(table.records(), &[CharacterRecord::new(0x41, "LATIN CAPITAL LETTER A")]);
    }

    #[test]
    fn limit() {
        let table = Generator::new(Synthetic::new()).with_limit(2).generate();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1].code_point(), 0x41);
        assert!(Generator::new(Synthetic::new()).with_limit(0).generate().is_empty());
    }

    #[test]
    fn empty_range() {
        #[allow(clippy::reversed_empty_ranges)]
        let table = Generator::new(Synthetic::new()).with_range(0x41..=0x40).generate();
        assert!(table.is_empty());
    }
}
