//! Recoverable anomalies found while flattening or scanning a document.
//!
//! None of these stop processing. Each is logged with `log::warn!` when it is
//! recorded and returned to the caller alongside the outline.

use std::fmt;

/// Outline level that received a fallback number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Book
    Kitaab,
    /// Chapter
    Baab,
    /// Sub-chapter
    SubBaab,
    /// Narration
    Hadith,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Kitaab => "kitaab",
            Level::Baab => "baab",
            Level::SubBaab => "sub-baab",
            Level::Hadith => "hadith",
        };
        f.write_str(name)
    }
}

/// A recoverable anomaly, in the order it was encountered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The document has no page containers; the outline is empty.
    NoPageContainers {
        /// Selector that matched nothing
        selector: String,
    },

    /// A baab title appeared before any kitaab and was discarded.
    BaabOutsideKitaab {
        /// Position of the discarded item
        position: usize,
        /// Normalized title text
        text: String,
    },

    /// A marker had no parseable number; a sequential one was assigned.
    NumberFallback {
        /// Position of the marker item
        position: usize,
        /// Level of the opened node
        level: Level,
        /// Number that was assigned
        assigned: u32,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoPageContainers { selector } => {
                write!(f, "no page containers matched '{}'", selector)
            },
            Diagnostic::BaabOutsideKitaab { position, text } => {
                write!(f, "item {}: baab title outside any kitaab: {}", position, text)
            },
            Diagnostic::NumberFallback {
                position,
                level,
                assigned,
            } => write!(
                f,
                "item {}: {} marker has no number, assigned {}",
                position, level, assigned
            ),
        }
    }
}
