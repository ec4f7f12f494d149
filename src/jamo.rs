//! Algorithmic names for hangul syllables.

use crate::database::CodePoint;

// derived from Jamo.txt
pub static CHOSEONG: &[&str] =
    &["G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S",
      "SS", "", "J", "JJ", "C", "K", "T", "P", "H"];
pub static JUNGSEONG: &[&str] =
    &["A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA",
      "WAE", "OE", "YO", "U", "WEO", "WE", "WI", "YU", "EU", "YI", "I"];
pub static JONGSEONG: &[&str] =
    &["", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG",
      "LM", "LB", "LS", "LT", "LP", "LH", "M", "B", "BS", "S",
      "SS", "NG", "J", "C", "K", "T", "P", "H"];

pub const FIRST_SYLLABLE: CodePoint = 0xAC00;
pub const LAST_SYLLABLE: CodePoint = 0xD7A3;

pub fn is_hangul_syllable(cp: CodePoint) -> bool {
    (FIRST_SYLLABLE..=LAST_SYLLABLE).contains(&cp)
}

pub fn syllable_decomposition(cp: CodePoint) -> Option<(u8, u8, u8)> {
    if !is_hangul_syllable(cp) {
        // outside the range
        return None;
    }
    let n = cp - FIRST_SYLLABLE;
    // break this into the various parts.
    let jongseong = n % 28;
    let jungseong = (n / 28) % 21;
    let choseong = n / (28 * 21);

    Some((choseong as u8, jungseong as u8, jongseong as u8))
}

/// `HANGUL SYLLABLE <choseong><jungseong><jongseong>`, for code points
/// in the precomposed syllable block.
pub fn syllable_name(cp: CodePoint) -> Option<String> {
    let (l, v, t) = syllable_decomposition(cp)?;
    Some(format!(
        "HANGUL SYLLABLE {}{}{}",
        CHOSEONG[l as usize], JUNGSEONG[v as usize], JONGSEONG[t as usize]
    ))
}
