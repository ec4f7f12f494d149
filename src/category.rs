//! Unicode general categories.

use std::fmt;

/// The general category of a code point, as listed in the third field
/// of `UnicodeData.txt`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeneralCategory {
    UppercaseLetter,
    LowercaseLetter,
    TitlecaseLetter,
    ModifierLetter,
    OtherLetter,
    NonspacingMark,
    SpacingMark,
    EnclosingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    ConnectorPunctuation,
    DashPunctuation,
    OpenPunctuation,
    ClosePunctuation,
    InitialPunctuation,
    FinalPunctuation,
    OtherPunctuation,
    MathSymbol,
    CurrencySymbol,
    ModifierSymbol,
    OtherSymbol,
    SpaceSeparator,
    LineSeparator,
    ParagraphSeparator,
    Control,
    Format,
    Surrogate,
    PrivateUse,
    Unassigned,
}

use self::GeneralCategory::*;

static ABBREVIATIONS: &[(GeneralCategory, &str)] = &[
    (UppercaseLetter, "Lu"),
    (LowercaseLetter, "Ll"),
    (TitlecaseLetter, "Lt"),
    (ModifierLetter, "Lm"),
    (OtherLetter, "Lo"),
    (NonspacingMark, "Mn"),
    (SpacingMark, "Mc"),
    (EnclosingMark, "Me"),
    (DecimalNumber, "Nd"),
    (LetterNumber, "Nl"),
    (OtherNumber, "No"),
    (ConnectorPunctuation, "Pc"),
    (DashPunctuation, "Pd"),
    (OpenPunctuation, "Ps"),
    (ClosePunctuation, "Pe"),
    (InitialPunctuation, "Pi"),
    (FinalPunctuation, "Pf"),
    (OtherPunctuation, "Po"),
    (MathSymbol, "Sm"),
    (CurrencySymbol, "Sc"),
    (ModifierSymbol, "Sk"),
    (OtherSymbol, "So"),
    (SpaceSeparator, "Zs"),
    (LineSeparator, "Zl"),
    (ParagraphSeparator, "Zp"),
    (Control, "Cc"),
    (Format, "Cf"),
    (Surrogate, "Cs"),
    (PrivateUse, "Co"),
    (Unassigned, "Cn"),
];

impl GeneralCategory {
    /// The two-letter abbreviation, e.g. `"Lu"`.
    pub fn abbr(self) -> &'static str {
        ABBREVIATIONS
            .iter()
            .find(|&&(cat, _)| cat == self)
            .map(|&(_, abbr)| abbr)
            .unwrap_or("Cn")
    }

    /// Parse a two-letter abbreviation, or `None` if it names no
    /// category.
    pub fn from_abbr(abbr: &str) -> Option<GeneralCategory> {
        ABBREVIATIONS
            .iter()
            .find(|&&(_, a)| a == abbr)
            .map(|&(cat, _)| cat)
    }

    /// Whether this is one of the `C*` classes (control, format,
    /// surrogate, private use, unassigned). These never get a row in
    /// the character table.
    pub fn is_other(self) -> bool {
        self.abbr().starts_with('C')
    }
}

impl fmt::Display for GeneralCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.abbr())
    }
}
