//! Arabic text normalization for marker matching.
//!
//! Source titles are vocalized inconsistently ("كِتَابُ" vs "كتاب"), so every
//! word-based marker rule matches against text with the harakat removed. The
//! raw text is never modified in place; callers normalize a copy.

use lazy_static::lazy_static;
use regex::Regex;

/// Regex character class for a single decimal digit.
///
/// Accepts ASCII, Arabic-Indic (U+0660–U+0669) and Extended Arabic-Indic
/// (U+06F0–U+06F9) digits. Every member has a value in [`digit_value`].
pub const DIGIT_CLASS: &str = "[0-9\u{0660}-\u{0669}\u{06F0}-\u{06F9}]";

lazy_static! {
    /// Harakat, tanween, shadda and sukun (U+064B–U+0652) plus ZWNJ
    static ref RE_DIACRITICS: Regex = Regex::new("[\u{064B}-\u{0652}\u{200C}]").unwrap();

    /// Leading run of digits, after optional whitespace
    static ref RE_LEADING_NUMBER: Regex =
        Regex::new(&format!(r"^\s*({}+)", DIGIT_CLASS)).unwrap();
}

/// Remove Arabic diacritics and zero-width non-joiners, then trim.
///
/// # Examples
///
/// ```
/// use hadith_outline::text::remove_diacritics;
///
/// assert_eq!(remove_diacritics(" كِتَابُ الصَّلَاةِ "), "كتاب الصلاة");
/// ```
pub fn remove_diacritics(text: &str) -> String {
    RE_DIACRITICS.replace_all(text, "").trim().to_string()
}

/// Numeric value of a digit accepted by [`DIGIT_CLASS`].
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        '\u{0660}'..='\u{0669}' => Some(c as u32 - 0x0660),
        '\u{06F0}'..='\u{06F9}' => Some(c as u32 - 0x06F0),
        _ => None,
    }
}

/// Parse the integer at the start of `text`, e.g. `"12 - باب"` → `Some(12)`.
///
/// Returns `None` when the text does not start with a digit (after
/// whitespace) or when the value does not fit in a `u32`.
pub fn parse_leading_number(text: &str) -> Option<u32> {
    let digits = RE_LEADING_NUMBER.captures(text)?.get(1)?.as_str();
    digits.chars().try_fold(0u32, |acc, c| {
        acc.checked_mul(10)?.checked_add(digit_value(c)?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_diacritics_basic() {
        assert_eq!(remove_diacritics("بَابُ الوُضُوءِ"), "باب الوضوء");
        assert_eq!(remove_diacritics("كِتَابٌ"), "كتاب");
    }

    #[test]
    fn test_remove_diacritics_shadda_and_sukun() {
        assert_eq!(remove_diacritics("الصَّلْاة"), "الصلاة");
    }

    #[test]
    fn test_remove_diacritics_zwnj_and_trim() {
        assert_eq!(remove_diacritics("\u{200C} باب \u{200C}"), "باب");
    }

    #[test]
    fn test_remove_diacritics_leaves_other_text() {
        assert_eq!(remove_diacritics("1- Chapter one"), "1- Chapter one");
        assert_eq!(remove_diacritics(""), "");
    }

    #[test]
    fn test_parse_leading_number_ascii() {
        assert_eq!(parse_leading_number("12 - باب"), Some(12));
        assert_eq!(parse_leading_number("  7)"), Some(7));
        assert_eq!(parse_leading_number("0"), Some(0));
    }

    #[test]
    fn test_parse_leading_number_arabic_indic() {
        assert_eq!(parse_leading_number("١٢ - باب"), Some(12));
        assert_eq!(parse_leading_number("۴۵"), Some(45));
    }

    #[test]
    fn test_parse_leading_number_missing() {
        assert_eq!(parse_leading_number("باب 3"), None);
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("- 3"), None);
    }

    #[test]
    fn test_parse_leading_number_overflow() {
        assert_eq!(parse_leading_number("99999999999999999999"), None);
        assert_eq!(parse_leading_number("4294967295"), Some(u32::MAX));
    }
}
