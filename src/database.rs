//! Sources of per-code-point metadata.

use unicode_general_category as ugc;

use crate::category::GeneralCategory;

/// Code points are plain integers rather than `char`s, so that a
/// database can say something about values (like surrogates) that
/// Rust refuses to represent as a `char`.
pub type CodePoint = u32;

/// A lookup from code point to its general category and, when one is
/// defined, its name.
pub trait CharacterDatabase {
    /// The general category of `cp`. Unknown code points are
    /// [`GeneralCategory::Unassigned`].
    fn category(&self, cp: CodePoint) -> GeneralCategory;

    /// The name of `cp`, or `None` if the database defines no name
    /// for it.
    fn name(&self, cp: CodePoint) -> Option<String>;
}

impl<'a, D: CharacterDatabase + ?Sized> CharacterDatabase for &'a D {
    fn category(&self, cp: CodePoint) -> GeneralCategory {
        (**self).category(cp)
    }
    fn name(&self, cp: CodePoint) -> Option<String> {
        (**self).name(cp)
    }
}

impl<D: CharacterDatabase + ?Sized> CharacterDatabase for Box<D> {
    fn category(&self, cp: CodePoint) -> GeneralCategory {
        (**self).category(cp)
    }
    fn name(&self, cp: CodePoint) -> Option<String> {
        (**self).name(cp)
    }
}

/// The database compiled into the binary: names come from
/// `unicode_names2`, categories from `unicode-general-category`.
///
/// The two crates each pin a Unicode version, so the table produced
/// from this database changes when either is upgraded.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinDatabase;

impl BuiltinDatabase {
    pub fn new() -> BuiltinDatabase {
        BuiltinDatabase
    }
}

impl CharacterDatabase for BuiltinDatabase {
    fn category(&self, cp: CodePoint) -> GeneralCategory {
        match char::from_u32(cp) {
            Some(c) => convert_category(ugc::get_general_category(c)),
            // the only non-`char`s below the maximum are the surrogates
            None if cp <= 0x10FFFF => GeneralCategory::Surrogate,
            None => GeneralCategory::Unassigned,
        }
    }

    fn name(&self, cp: CodePoint) -> Option<String> {
        let c = char::from_u32(cp)?;
        unicode_names2::name(c).map(|n| n.to_string())
    }
}

fn convert_category(cat: ugc::GeneralCategory) -> GeneralCategory {
    use unicode_general_category::GeneralCategory as G;
    match cat {
        G::UppercaseLetter => GeneralCategory::UppercaseLetter,
        G::LowercaseLetter => GeneralCategory::LowercaseLetter,
        G::TitlecaseLetter => GeneralCategory::TitlecaseLetter,
        G::ModifierLetter => GeneralCategory::ModifierLetter,
        G::OtherLetter => GeneralCategory::OtherLetter,
        G::NonspacingMark => GeneralCategory::NonspacingMark,
        G::SpacingMark => GeneralCategory::SpacingMark,
        G::EnclosingMark => GeneralCategory::EnclosingMark,
        G::DecimalNumber => GeneralCategory::DecimalNumber,
        G::LetterNumber => GeneralCategory::LetterNumber,
        G::OtherNumber => GeneralCategory::OtherNumber,
        G::ConnectorPunctuation => GeneralCategory::ConnectorPunctuation,
        G::DashPunctuation => GeneralCategory::DashPunctuation,
        G::OpenPunctuation => GeneralCategory::OpenPunctuation,
        G::ClosePunctuation => GeneralCategory::ClosePunctuation,
        G::InitialPunctuation => GeneralCategory::InitialPunctuation,
        G::FinalPunctuation => GeneralCategory::FinalPunctuation,
        G::OtherPunctuation => GeneralCategory::OtherPunctuation,
        G::MathSymbol => GeneralCategory::MathSymbol,
        G::CurrencySymbol => GeneralCategory::CurrencySymbol,
        G::ModifierSymbol => GeneralCategory::ModifierSymbol,
        G::OtherSymbol => GeneralCategory::OtherSymbol,
        G::SpaceSeparator => GeneralCategory::SpaceSeparator,
        G::LineSeparator => GeneralCategory::LineSeparator,
        G::ParagraphSeparator => GeneralCategory::ParagraphSeparator,
        G::Control => GeneralCategory::Control,
        G::Format => GeneralCategory::Format,
        G::Surrogate => GeneralCategory::Surrogate,
        G::PrivateUse => GeneralCategory::PrivateUse,
        G::Unassigned => GeneralCategory::Unassigned,
        #[allow(unreachable_patterns)]
        _ => GeneralCategory::Unassigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names() {
        let db = BuiltinDatabase::new();
        assert_eq!(db.name(0x41).as_deref(), Some("LATIN CAPITAL LETTER A"));
        assert_eq!(db.name(0x20).as_deref(), Some("SPACE"));
        assert_eq!(db.name(0x2603).as_deref(), Some("SNOWMAN"));
        assert_eq!(db.name(0x2605).as_deref(), Some("BLACK STAR"));
        // control code
        assert_eq!(db.name(0x00), None);
        // surrogate, not a `char`
        assert_eq!(db.name(0xD800), None);
        // unassigned
        assert_eq!(db.name(0x10FFFF), None);
    }

    #[test]
    fn builtin_algorithmic_names() {
        let db = BuiltinDatabase::new();
        assert_eq!(db.name(0xAC00).as_deref(), Some("HANGUL SYLLABLE GA"));
        assert_eq!(db.name(0xD7A3).as_deref(), Some("HANGUL SYLLABLE HIH"));
        assert_eq!(db.name(0x4E00).as_deref(), Some("CJK UNIFIED IDEOGRAPH-4E00"));
        assert_eq!(db.name(0x20000).as_deref(), Some("CJK UNIFIED IDEOGRAPH-20000"));
    }

    #[test]
    fn builtin_categories() {
        let db = BuiltinDatabase::new();
        assert_eq!(db.category(0x41), GeneralCategory::UppercaseLetter);
        assert_eq!(db.category(0x20), GeneralCategory::SpaceSeparator);
        assert_eq!(db.category(0x0A), GeneralCategory::Control);
        assert_eq!(db.category(0x200B), GeneralCategory::Format);
        assert_eq!(db.category(0xD800), GeneralCategory::Surrogate);
        assert_eq!(db.category(0xDFFF), GeneralCategory::Surrogate);
        assert_eq!(db.category(0xE000), GeneralCategory::PrivateUse);
        assert_eq!(db.category(0x10FFFF), GeneralCategory::Unassigned);
        assert_eq!(db.category(0x110000), GeneralCategory::Unassigned);
    }
}
