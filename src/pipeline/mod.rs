//! End-to-end extraction: HTML in, outline out.
//!
//! ```no_run
//! use hadith_outline::pipeline::OutlinePipeline;
//!
//! let pipeline = OutlinePipeline::default();
//! let outline = pipeline.extract_file("001.htm")?;
//! outline.save_json("hadith_structure.json")?;
//! # Ok::<(), hadith_outline::error::Error>(())
//! ```

use crate::config::OutlineConfig;
use crate::diagnostics::Diagnostic;
use crate::error::{Error, Result};
use crate::extractors::Flattener;
use crate::structure::{build_outline, Document};
use scraper::Html;
use std::fs;
use std::path::Path;

/// Outline of one document plus what went wrong on the way.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    /// The outline tree
    pub document: Document,
    /// Recoverable anomalies from flattening and scanning, in that order
    pub diagnostics: Vec<Diagnostic>,
    /// Number of flat items scanned
    pub item_count: usize,
}

impl Outline {
    /// Write the document as indented JSON to `path`.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] if encoding fails, [`Error::Write`] if the file cannot
    /// be written. The in-memory outline is untouched either way.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut json = self.document.to_json()?;
        json.push('\n');
        fs::write(path, json).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Saved outline to {}", path.display());
        Ok(())
    }
}

/// Flatten + build, configured once and reused across documents.
#[derive(Debug, Clone, Default)]
pub struct OutlinePipeline {
    config: OutlineConfig,
}

impl OutlinePipeline {
    /// Create a pipeline with the given markup conventions.
    pub fn new(config: OutlineConfig) -> Self {
        Self { config }
    }

    /// Markup conventions in use.
    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    /// Extract the outline of an HTML string.
    pub fn extract_str(&self, source: &str) -> Result<Outline> {
        let html = Html::parse_document(source);
        let flat = Flattener::new(&self.config).flatten(&html)?;
        let built = build_outline(&flat.items);

        let mut diagnostics = flat.diagnostics;
        diagnostics.extend(built.diagnostics);

        Ok(Outline {
            document: built.document,
            diagnostics,
            item_count: flat.items.len(),
        })
    }

    /// Read and extract the outline of an HTML file (UTF-8).
    ///
    /// # Errors
    ///
    /// [`Error::Read`] when the file is missing, unreadable, or not UTF-8.
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<Outline> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Processing {}", path.display());
        self.extract_str(&source)
    }
}
