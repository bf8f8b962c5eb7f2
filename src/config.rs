//! Configuration for outline extraction.
//!
//! Describes the markup conventions of the source HTML. The defaults match
//! Shamela exports: pages are `div.PageText`, running headers `div.PageHead`,
//! and structural titles carry `data-type="title"`.

/// Markup conventions used by the flattener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineConfig {
    /// Class of the element wrapping one printed page.
    pub page_class: String,

    /// Class of the running page header inside a page.
    pub page_head_class: String,

    /// Attribute that marks a structural title.
    pub title_attribute: String,

    /// Value of `title_attribute` that marks a structural title.
    pub title_value: String,

    /// Attribute carrying the node identifier.
    pub id_attribute: String,

    /// Tags treated as text blocks. Anything else is inline.
    pub block_tags: Vec<String>,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineConfig {
    /// Create new configuration with Shamela defaults.
    pub fn new() -> Self {
        Self {
            page_class: "PageText".to_string(),
            page_head_class: "PageHead".to_string(),
            title_attribute: "data-type".to_string(),
            title_value: "title".to_string(),
            id_attribute: "id".to_string(),
            block_tags: vec!["div".to_string(), "p".to_string(), "span".to_string()],
        }
    }

    /// Set the page container class.
    pub fn with_page_class(mut self, class: impl Into<String>) -> Self {
        self.page_class = class.into();
        self
    }

    /// Set the page header class.
    pub fn with_page_head_class(mut self, class: impl Into<String>) -> Self {
        self.page_head_class = class.into();
        self
    }

    /// Set the attribute name and value that mark structural titles.
    pub fn with_title_marker(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.title_attribute = attribute.into();
        self.title_value = value.into();
        self
    }

    /// Replace the set of block tags.
    pub fn with_block_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// CSS selector matching page containers.
    pub fn page_selector(&self) -> String {
        format!("div.{}", self.page_class)
    }

    /// Whether `tag` is one of the configured block tags (case-insensitive).
    pub fn is_block_tag(&self, tag: &str) -> bool {
        self.block_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
