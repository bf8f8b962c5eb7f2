//! Marker classification for flat items.
//!
//! Word-based rules (kitaab, baab, the bare "باب" line) match against the
//! diacritic-stripped text. Number lines match the raw text. "Strict" rules
//! require the whole text to match, so `"5"` is a number line but
//! `"5 - حدثنا"` is not.

use crate::extractors::FlatItem;
use crate::extractors::FlatItemKind;
use crate::text::{parse_leading_number, remove_diacritics, DIGIT_CLASS};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Optional repeated "N -" prefixes, then the word for book
    static ref RE_KITAAB_TITLE: Regex =
        Regex::new(&format!(r"^\s*({}+\s*[-–.)]*\s*)*كتاب", DIGIT_CLASS)).unwrap();

    /// Optional repeated "N -" prefixes, then the word for chapter
    static ref RE_BAAB_TITLE: Regex =
        Regex::new(&format!(r"^\s*({}+\s*[-–.)]*\s*)*باب", DIGIT_CLASS)).unwrap();

    /// A line holding only a number and trailing separators
    static ref RE_STRICT_NUMBER: Regex =
        Regex::new(&format!(r"^\s*{}+\s*[-–.)]*\s*$", DIGIT_CLASS)).unwrap();

    /// A line holding only the word for chapter
    static ref RE_STRICT_BAAB: Regex = Regex::new(r"^\s*باب\s*$").unwrap();
}

/// A matched kitaab or baab title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMarker {
    /// Leading number of the normalized title, if any
    pub number: Option<u32>,
    /// Normalized title text
    pub title: String,
}

/// A matched sub-baab marker pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubBaabMarker {
    /// Number of the number line
    pub number: Option<u32>,
    /// Number line and "باب" line joined by a space
    pub title: String,
}

/// Match a kitaab title. Only explicit title nodes qualify.
pub fn kitaab_title(item: &FlatItem) -> Option<TitleMarker> {
    if !item.is_title_marker {
        return None;
    }
    title_marker(item, &RE_KITAAB_TITLE)
}

/// Match a baab title.
///
/// Explicit title nodes always qualify. While a kitaab is open, untagged
/// paragraphs starting with the chapter word qualify too.
pub fn baab_title(item: &FlatItem, kitaab_open: bool) -> Option<TitleMarker> {
    if !(item.is_title_marker || (kitaab_open && item.kind == FlatItemKind::Paragraph)) {
        return None;
    }
    title_marker(item, &RE_BAAB_TITLE)
}

fn title_marker(item: &FlatItem, pattern: &Regex) -> Option<TitleMarker> {
    let normalized = remove_diacritics(&item.text);
    if !pattern.is_match(&normalized) {
        return None;
    }
    Some(TitleMarker {
        number: parse_leading_number(&normalized),
        title: normalized,
    })
}

/// Whether the raw text is a bare number line such as `"12"`, `" 3 - "` or `"٧)"`.
pub fn is_strict_number_line(text: &str) -> bool {
    RE_STRICT_NUMBER.is_match(text)
}

/// Whether the text, once normalized, is the chapter word alone.
pub fn is_strict_baab_line(text: &str) -> bool {
    RE_STRICT_BAAB.is_match(&remove_diacritics(text))
}

/// Number of a hadith marker line, or `None` if `item` is not a number line.
///
/// The inner `Option` is the parsed number, absent only on overflow.
pub fn hadith_marker(item: &FlatItem) -> Option<Option<u32>> {
    if !is_strict_number_line(&item.text) {
        return None;
    }
    Some(parse_leading_number(&item.text))
}

/// Match a number line immediately followed by a bare "باب" line.
pub fn sub_baab_marker(item: &FlatItem, next: Option<&FlatItem>) -> Option<SubBaabMarker> {
    let next = next?;
    if !is_strict_number_line(&item.text) || !is_strict_baab_line(&next.text) {
        return None;
    }
    Some(SubBaabMarker {
        number: parse_leading_number(&item.text),
        title: format!("{} {}", item.text, next.text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(text: &str) -> FlatItem {
        FlatItem::new(0, FlatItemKind::OtherTag, text).with_title_marker()
    }

    fn para(text: &str) -> FlatItem {
        FlatItem::new(0, FlatItemKind::Paragraph, text)
    }

    #[test]
    fn test_kitaab_title_with_number() {
        let marker = kitaab_title(&title("1- كِتَابُ الصَّلَاةِ")).unwrap();
        assert_eq!(marker.number, Some(1));
        assert_eq!(marker.title, "1- كتاب الصلاة");
    }

    #[test]
    fn test_kitaab_title_repeated_prefix() {
        let marker = kitaab_title(&title("3 - 12) كتاب الزكاة")).unwrap();
        assert_eq!(marker.number, Some(3));
    }

    #[test]
    fn test_kitaab_title_without_number() {
        let marker = kitaab_title(&title("كتاب الإيمان")).unwrap();
        assert_eq!(marker.number, None);
    }

    #[test]
    fn test_kitaab_title_requires_title_marker() {
        assert!(kitaab_title(&para("1- كتاب الصلاة")).is_none());
    }

    #[test]
    fn test_kitaab_title_rejects_other_text() {
        assert!(kitaab_title(&title("1- باب الوضوء")).is_none());
        assert!(kitaab_title(&title("قال كتاب")).is_none());
    }

    #[test]
    fn test_baab_title_from_title_marker() {
        let marker = baab_title(&title("٢ - بَابُ الوُضُوءِ"), false).unwrap();
        assert_eq!(marker.number, Some(2));
        assert_eq!(marker.title, "٢ - باب الوضوء");
    }

    #[test]
    fn test_baab_title_from_paragraph_needs_open_kitaab() {
        assert!(baab_title(&para("باب الغسل"), true).is_some());
        assert!(baab_title(&para("باب الغسل"), false).is_none());
    }

    #[test]
    fn test_baab_title_ignores_other_kinds() {
        let item = FlatItem::new(0, FlatItemKind::DirectText, "باب الغسل");
        assert!(baab_title(&item, true).is_none());
    }

    #[test]
    fn test_strict_number_line() {
        assert!(is_strict_number_line("5"));
        assert!(is_strict_number_line(" 12 - "));
        assert!(is_strict_number_line("7)"));
        assert!(is_strict_number_line("8."));
        assert!(is_strict_number_line("9 –"));
        assert!(is_strict_number_line("٤٥"));
        assert!(!is_strict_number_line("5 حدثنا"));
        assert!(!is_strict_number_line("- 5"));
        assert!(!is_strict_number_line(""));
    }

    #[test]
    fn test_strict_baab_line() {
        assert!(is_strict_baab_line("باب"));
        assert!(is_strict_baab_line(" بَابٌ "));
        assert!(!is_strict_baab_line("باب الوضوء"));
        assert!(!is_strict_baab_line("1 باب"));
    }

    #[test]
    fn test_hadith_marker() {
        assert_eq!(hadith_marker(&para("5")), Some(Some(5)));
        assert_eq!(hadith_marker(&para("99999999999")), Some(None));
        assert_eq!(hadith_marker(&para("5 حدثنا")), None);
    }

    #[test]
    fn test_sub_baab_marker() {
        let marker = sub_baab_marker(&para("3"), Some(&para("باب"))).unwrap();
        assert_eq!(marker.number, Some(3));
        assert_eq!(marker.title, "3 باب");
    }

    #[test]
    fn test_sub_baab_marker_needs_lookahead() {
        assert!(sub_baab_marker(&para("3"), None).is_none());
        assert!(sub_baab_marker(&para("3"), Some(&para("حدثنا"))).is_none());
        assert!(sub_baab_marker(&para("باب"), Some(&para("باب"))).is_none());
    }
}
