//! # hadith_outline
//!
//! Outline extraction for digitized hadith collections exported as HTML
//! (Shamela style): books (kitaab), chapters (baab), optional sub-chapters
//! and numbered narrations (hadith), serialized as a JSON tree.
//!
//! ## Architecture
//!
//! - **Flattening** ([`extractors`]): page containers → ordered [`FlatItem`]s
//! - **Structure** ([`structure`]): single-pass scan → [`Document`]
//! - **Pipeline** ([`pipeline`]): file in, [`Outline`] out, JSON export
//!
//! Structural anomalies never fail the run; they are logged through the `log`
//! facade and returned as [`Diagnostic`]s. Only unreadable input and
//! unwritable output are [`Error`]s.
//!
//! ## Quick Start
//!
//! ```no_run
//! use hadith_outline::OutlinePipeline;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let outline = OutlinePipeline::default().extract_file("001.htm")?;
//! for kitaab in &outline.document.kitaabs {
//!     println!("{} {} ({} baabs)", kitaab.number, kitaab.title, kitaab.baabs.len());
//! }
//! outline.save_json("hadith_structure.json")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Text normalization
pub mod text;

// Flattening and outline inference
pub mod diagnostics;
pub mod extractors;
pub mod structure;

// End-to-end extraction
pub mod pipeline;

// Re-exports
pub use config::OutlineConfig;
pub use diagnostics::Diagnostic;
pub use error::{Error, Result};
pub use extractors::{FlatItem, FlatItemKind};
pub use pipeline::{Outline, OutlinePipeline};
pub use structure::{Baab, ContextEntry, Document, Hadith, Kitaab, SubBaab, SubBaabEntry};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
