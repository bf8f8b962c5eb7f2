//! Flattening of the HTML page tree into an ordered item sequence.
//!
//! The structure builder never sees HTML. It scans a flat list of
//! [`FlatItem`]s, one per text-bearing node, in document order.
//!
//! # Walk
//!
//! Page containers (`div.PageText` by default) are visited in document
//! order. Inside a page, the configured block tags (`div`, `p`, `span`) are
//! the units of text:
//!
//! - A block that is a title, a page header, or that has no nested blocks
//!   becomes a single item holding all of its text.
//! - A block with nested blocks is split: runs of its own text (including
//!   inline children such as `<b>` or `<a>`) become [`FlatItemKind::DirectText`]
//!   items and nested blocks are visited in place.
//!
//! Loose text directly under the page container is handled like the own text
//! of a split block. Items whose trimmed text is empty are dropped.

use crate::config::OutlineConfig;
use crate::diagnostics::Diagnostic;
use crate::error::{Error, Result};
use scraper::{ElementRef, Html, Node, Selector};

/// Node type of a flat item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatItemKind {
    /// Text not wrapped in its own block element
    DirectText,
    /// A `<p>` element
    Paragraph,
    /// A running page header
    PageHead,
    /// Any other block element
    OtherTag,
}

/// One text-bearing node of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatItem {
    /// Trimmed text, diacritics preserved
    pub text: String,
    /// Node type
    pub kind: FlatItemKind,
    /// Whether the node is explicitly tagged as a structural title
    pub is_title_marker: bool,
    /// Value of the identifier attribute, if any
    pub identifier: Option<String>,
    /// Global position, strictly increasing from 0
    pub position: usize,
}

impl FlatItem {
    /// Create an untitled item without identifier. `text` is trimmed.
    pub fn new(position: usize, kind: FlatItemKind, text: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            kind,
            is_title_marker: false,
            identifier: None,
            position,
        }
    }

    /// Mark the item as a structural title.
    pub fn with_title_marker(mut self) -> Self {
        self.is_title_marker = true;
        self
    }

    /// Attach an identifier.
    pub fn with_identifier(mut self, id: impl Into<String>) -> Self {
        self.identifier = Some(id.into());
        self
    }

    /// Whether the item is a running page header.
    pub fn is_page_head(&self) -> bool {
        self.kind == FlatItemKind::PageHead
    }
}

/// Output of [`Flattener::flatten`].
#[derive(Debug, Clone, Default)]
pub struct FlatDocument {
    /// Items in document order
    pub items: Vec<FlatItem>,
    /// Number of page containers visited
    pub page_count: usize,
    /// Anomalies found while flattening
    pub diagnostics: Vec<Diagnostic>,
}

/// Turns a parsed HTML document into a [`FlatDocument`].
pub struct Flattener<'a> {
    config: &'a OutlineConfig,
}

impl<'a> Flattener<'a> {
    /// Create a flattener for the given markup conventions.
    pub fn new(config: &'a OutlineConfig) -> Self {
        Self { config }
    }

    /// Flatten every page container of `html`.
    ///
    /// A document without page containers is not an error: the result has no
    /// items and carries a [`Diagnostic::NoPageContainers`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`] when the configured page class does
    /// not form a valid CSS selector.
    pub fn flatten(&self, html: &Html) -> Result<FlatDocument> {
        let selector_text = self.config.page_selector();
        let selector = Selector::parse(&selector_text)
            .map_err(|e| Error::InvalidSelector(format!("{}: {:?}", selector_text, e)))?;

        let mut sink = ItemSink::default();
        let mut page_count = 0;

        for page in html.select(&selector) {
            page_count += 1;
            let mut run = String::new();
            self.walk(page, &mut run, &mut sink);
            sink.flush_run(&mut run);
        }

        let mut diagnostics = Vec::new();
        if page_count == 0 {
            log::warn!("No page containers matched '{}'", selector_text);
            diagnostics.push(Diagnostic::NoPageContainers {
                selector: selector_text,
            });
        } else {
            log::debug!("Flattened {} pages into {} items", page_count, sink.items.len());
        }

        Ok(FlatDocument {
            items: sink.items,
            page_count,
            diagnostics,
        })
    }

    /// Visit the children of `parent`, accumulating loose text into `run`.
    fn walk(&self, parent: ElementRef<'_>, run: &mut String, sink: &mut ItemSink) {
        for child in parent.children() {
            match child.value() {
                Node::Text(text) => run.push_str(text),
                Node::Element(_) => {
                    let Some(element) = ElementRef::wrap(child) else {
                        continue;
                    };
                    if self.config.is_block_tag(element.value().name()) {
                        sink.flush_run(run);
                        self.visit_block(element, sink);
                    } else if self.contains_block(element) {
                        // Inline wrapper around blocks, e.g. <a><span>..</span></a>
                        self.walk(element, run, sink);
                    } else {
                        run.extend(element.text());
                    }
                },
                _ => {},
            }
        }
    }

    fn visit_block(&self, element: ElementRef<'_>, sink: &mut ItemSink) {
        let is_title_marker = self.is_title_marker(element);
        let is_page_head = self.is_page_head(element);

        if is_title_marker || is_page_head || !self.contains_block(element) {
            let text: String = element.text().collect();
            let kind = if is_page_head {
                FlatItemKind::PageHead
            } else if element.value().name().eq_ignore_ascii_case("p") {
                FlatItemKind::Paragraph
            } else {
                FlatItemKind::OtherTag
            };
            let identifier = element
                .value()
                .attr(&self.config.id_attribute)
                .map(str::to_string);
            sink.push(&text, kind, is_title_marker, identifier);
            return;
        }

        let mut run = String::new();
        self.walk(element, &mut run, sink);
        sink.flush_run(&mut run);
    }

    fn is_title_marker(&self, element: ElementRef<'_>) -> bool {
        element.value().attr(&self.config.title_attribute) == Some(self.config.title_value.as_str())
    }

    fn is_page_head(&self, element: ElementRef<'_>) -> bool {
        element
            .value()
            .classes()
            .any(|class| class == self.config.page_head_class)
    }

    fn contains_block(&self, element: ElementRef<'_>) -> bool {
        element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .any(|e| self.config.is_block_tag(e.value().name()))
    }
}

/// Collects items and hands out positions.
#[derive(Default)]
struct ItemSink {
    items: Vec<FlatItem>,
}

impl ItemSink {
    fn push(&mut self, text: &str, kind: FlatItemKind, is_title_marker: bool, identifier: Option<String>) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.items.push(FlatItem {
            text: text.to_string(),
            kind,
            is_title_marker,
            identifier,
            position: self.items.len(),
        });
    }

    fn flush_run(&mut self, run: &mut String) {
        let text = std::mem::take(run);
        self.push(&text, FlatItemKind::DirectText, false, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(source: &str) -> FlatDocument {
        let config = OutlineConfig::default();
        let html = Html::parse_document(source);
        Flattener::new(&config).flatten(&html).unwrap()
    }

    fn texts(doc: &FlatDocument) -> Vec<&str> {
        doc.items.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_flatten_paragraphs_in_order() {
        let doc = flatten(
            r#"<div class="PageText"><p>first</p><p> second </p></div>
               <div class="PageText"><p>third</p></div>"#,
        );
        assert_eq!(doc.page_count, 2);
        assert_eq!(texts(&doc), vec!["first", "second", "third"]);
        assert!(doc.items.iter().all(|i| i.kind == FlatItemKind::Paragraph));
        let positions: Vec<usize> = doc.items.iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_flatten_title_marker_and_identifier() {
        let doc = flatten(
            r#"<div class="PageText"><span data-type="title" id="toc-1">1- كتاب الصلاة</span></div>"#,
        );
        assert_eq!(doc.items.len(), 1);
        let item = &doc.items[0];
        assert!(item.is_title_marker);
        assert_eq!(item.kind, FlatItemKind::OtherTag);
        assert_eq!(item.identifier.as_deref(), Some("toc-1"));
    }

    #[test]
    fn test_flatten_page_head() {
        let doc = flatten(
            r#"<div class="PageText"><div class="PageHead"><span>الجزء 1</span><span>ص 5</span></div><p>body</p></div>"#,
        );
        assert_eq!(doc.items.len(), 2);
        assert_eq!(doc.items[0].kind, FlatItemKind::PageHead);
        assert!(doc.items[0].is_page_head());
        assert_eq!(doc.items[1].text, "body");
    }

    #[test]
    fn test_flatten_splits_block_with_nested_blocks() {
        let doc = flatten(
            r#"<div class="PageText"><div>before <b>bold</b> <span data-type="title">باب الوضوء</span> after</div></div>"#,
        );
        assert_eq!(texts(&doc), vec!["before bold", "باب الوضوء", "after"]);
        assert_eq!(doc.items[0].kind, FlatItemKind::DirectText);
        assert!(doc.items[1].is_title_marker);
        assert_eq!(doc.items[2].kind, FlatItemKind::DirectText);
    }

    #[test]
    fn test_flatten_loose_text_under_page() {
        let doc = flatten(r#"<div class="PageText">loose line<p>para</p>tail</div>"#);
        assert_eq!(texts(&doc), vec!["loose line", "para", "tail"]);
        assert_eq!(doc.items[0].kind, FlatItemKind::DirectText);
        assert_eq!(doc.items[0].identifier, None);
    }

    #[test]
    fn test_flatten_drops_empty_text() {
        let doc = flatten(r#"<div class="PageText"><p>   </p><span></span><p>x</p></div>"#);
        assert_eq!(texts(&doc), vec!["x"]);
        assert_eq!(doc.items[0].position, 0);
    }

    #[test]
    fn test_flatten_ignores_text_outside_pages() {
        let doc = flatten(r#"<p>cover</p><div class="PageText"><p>inside</p></div>"#);
        assert_eq!(texts(&doc), vec!["inside"]);
    }

    #[test]
    fn test_flatten_no_page_containers() {
        let doc = flatten("<html><body><p>text</p></body></html>");
        assert!(doc.items.is_empty());
        assert_eq!(doc.page_count, 0);
        assert_eq!(
            doc.diagnostics,
            vec![Diagnostic::NoPageContainers {
                selector: "div.PageText".to_string()
            }]
        );
    }

    #[test]
    fn test_flatten_invalid_selector() {
        let config = OutlineConfig::default().with_page_class("");
        let html = Html::parse_document("<p>x</p>");
        let result = Flattener::new(&config).flatten(&html);
        assert!(matches!(result, Err(Error::InvalidSelector(_))));
    }

    #[test]
    fn test_flat_item_builders() {
        let item = FlatItem::new(3, FlatItemKind::Paragraph, "  text ")
            .with_title_marker()
            .with_identifier("toc-9");
        assert_eq!(item.text, "text");
        assert_eq!(item.position, 3);
        assert!(item.is_title_marker);
        assert_eq!(item.identifier.as_deref(), Some("toc-9"));
    }
}
