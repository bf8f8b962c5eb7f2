//! Extraction of text items from parsed HTML.

pub mod flatten;

pub use flatten::{FlatDocument, FlatItem, FlatItemKind, Flattener};
