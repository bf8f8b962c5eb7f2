//! Outline inference: kitaab / baab / sub-baab / hadith.
//!
//! ## Overview
//!
//! The outline is recovered from a flat, ordered list of text items by a
//! single left-to-right scan. Titles tagged in the markup open kitaabs and
//! baabs; bare number lines open hadiths, or sub-baabs when the next line is
//! the word "باب" on its own. Everything else inside an open baab is content
//! of the innermost open unit.
//!
//! ## Example
//!
//! ```
//! use hadith_outline::extractors::{FlatItem, FlatItemKind};
//! use hadith_outline::structure::{build_outline, ContextEntry};
//!
//! let items = vec![
//!     FlatItem::new(0, FlatItemKind::OtherTag, "1- كتاب الصلاة").with_title_marker(),
//!     FlatItem::new(1, FlatItemKind::OtherTag, "1- باب الوضوء").with_title_marker(),
//!     FlatItem::new(2, FlatItemKind::Paragraph, "5"),
//!     FlatItem::new(3, FlatItemKind::Paragraph, "حدثنا"),
//! ];
//! let output = build_outline(&items);
//! let baab = &output.document.kitaabs[0].baabs[0];
//! assert!(matches!(&baab.context[0], ContextEntry::Hadith(h) if h.hadith_number == 5));
//! ```

mod builder;
pub mod markers;
mod types;

pub use crate::diagnostics::{Diagnostic, Level};
pub use builder::{build_outline, BuildOutput, HadithHost, Scope, StructureBuilder};
pub use types::{Baab, ContextEntry, Document, Hadith, Kitaab, OutlineStats, SubBaab, SubBaabEntry};
