//! Outline tree types.
//!
//! The JSON form of these types is the output contract of the crate: field
//! names are fixed, text lines serialize as bare strings, and sub-baabs and
//! hadiths serialize as objects distinguished by their number field.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Root of the outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Books in document order
    pub kitaabs: Vec<Kitaab>,
}

/// A book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kitaab {
    /// Number from the title, or position in the document + 1
    pub number: u32,
    /// Normalized title text
    pub title: String,
    /// Chapters in document order
    pub baabs: Vec<Baab>,
    /// Identifier of the title node, empty when absent
    pub id: String,
}

/// A chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baab {
    /// Number from the title, or position in the kitaab + 1
    pub number: u32,
    /// Normalized title text
    pub title: String,
    /// Content in document order
    pub context: Vec<ContextEntry>,
    /// Identifier of the title node, empty when absent
    pub id: String,
}

/// Entry of a baab's context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextEntry {
    /// A plain content line
    Text(String),
    /// A sub-chapter
    SubBaab(SubBaab),
    /// A narration
    Hadith(Hadith),
}

/// A sub-chapter. Cannot contain another sub-chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubBaab {
    /// Number from the marker line
    pub sub_baab_number: u32,
    /// Marker line and "باب" line joined by a space
    pub title: String,
    /// Content in document order
    pub context: Vec<SubBaabEntry>,
}

/// Entry of a sub-baab's context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubBaabEntry {
    /// A plain content line
    Text(String),
    /// A narration
    Hadith(Hadith),
}

/// A numbered narration. Holds text lines only, starting with its marker line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hadith {
    /// Number from the marker line
    pub hadith_number: u32,
    /// Lines in document order
    pub context: Vec<String>,
}

/// Counts of outline nodes, for progress reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutlineStats {
    /// Number of books
    pub kitaabs: usize,
    /// Number of chapters
    pub baabs: usize,
    /// Number of sub-chapters
    pub sub_baabs: usize,
    /// Number of narrations
    pub hadiths: usize,
    /// Number of text lines at any depth, hadith lines included
    pub text_lines: usize,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to indented JSON. Arabic text is written verbatim.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document previously written by [`Document::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Count the nodes of the outline.
    pub fn stats(&self) -> OutlineStats {
        let mut stats = OutlineStats {
            kitaabs: self.kitaabs.len(),
            ..Default::default()
        };

        for baab in self.kitaabs.iter().flat_map(|k| &k.baabs) {
            stats.baabs += 1;
            for entry in &baab.context {
                match entry {
                    ContextEntry::Text(_) => stats.text_lines += 1,
                    ContextEntry::Hadith(hadith) => stats.add_hadith(hadith),
                    ContextEntry::SubBaab(sub) => {
                        stats.sub_baabs += 1;
                        for entry in &sub.context {
                            match entry {
                                SubBaabEntry::Text(_) => stats.text_lines += 1,
                                SubBaabEntry::Hadith(hadith) => stats.add_hadith(hadith),
                            }
                        }
                    },
                }
            }
        }

        stats
    }
}

impl OutlineStats {
    fn add_hadith(&mut self, hadith: &Hadith) {
        self.hadiths += 1;
        self.text_lines += hadith.context.len();
    }
}

impl Kitaab {
    /// Create a kitaab with no baabs.
    pub fn new(number: u32, title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            baabs: Vec::new(),
            id: id.into(),
        }
    }
}

impl Baab {
    /// Create a baab with empty context.
    pub fn new(number: u32, title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            context: Vec::new(),
            id: id.into(),
        }
    }

    /// Number of sub-baabs in the context.
    pub fn sub_baab_count(&self) -> usize {
        self.context
            .iter()
            .filter(|e| matches!(e, ContextEntry::SubBaab(_)))
            .count()
    }

    /// Number of hadiths directly in the context.
    pub fn hadith_count(&self) -> usize {
        self.context
            .iter()
            .filter(|e| matches!(e, ContextEntry::Hadith(_)))
            .count()
    }
}

impl SubBaab {
    /// Create a sub-baab with empty context.
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            sub_baab_number: number,
            title: title.into(),
            context: Vec::new(),
        }
    }

    /// Number of hadiths in the context.
    pub fn hadith_count(&self) -> usize {
        self.context
            .iter()
            .filter(|e| matches!(e, SubBaabEntry::Hadith(_)))
            .count()
    }
}

impl Hadith {
    /// Create a hadith whose first line is its marker text.
    pub fn new(number: u32, marker_line: impl Into<String>) -> Self {
        Self {
            hadith_number: number,
            context: vec![marker_line.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut sub = SubBaab::new(3, "3 باب");
        sub.context.push(SubBaabEntry::Text("intro".to_string()));
        sub.context.push(SubBaabEntry::Hadith(Hadith::new(2, "2")));

        let mut baab = Baab::new(1, "1- باب الوضوء", "toc-2");
        baab.context.push(ContextEntry::Text("line".to_string()));
        baab.context.push(ContextEntry::Hadith(Hadith::new(1, "1")));
        baab.context.push(ContextEntry::SubBaab(sub));

        let mut kitaab = Kitaab::new(1, "1- كتاب الصلاة", "toc-1");
        kitaab.baabs.push(baab);

        Document {
            kitaabs: vec![kitaab],
        }
    }

    #[test]
    fn test_json_shape() {
        let value: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        let baab = &value["kitaabs"][0]["baabs"][0];

        assert_eq!(value["kitaabs"][0]["number"], 1);
        assert_eq!(value["kitaabs"][0]["id"], "toc-1");
        assert_eq!(baab["context"][0], "line");
        assert_eq!(baab["context"][1]["hadith_number"], 1);
        assert_eq!(baab["context"][1]["context"][0], "1");
        assert_eq!(baab["context"][2]["sub_baab_number"], 3);
        assert_eq!(baab["context"][2]["title"], "3 باب");
        assert_eq!(baab["context"][2]["context"][1]["hadith_number"], 2);
    }

    #[test]
    fn test_json_keeps_arabic_verbatim() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("كتاب الصلاة"));
        assert!(!json.contains("\\u"));
        assert!(json.contains("\n  \"kitaabs\""));
    }

    #[test]
    fn test_json_round_trip() {
        let doc = sample();
        let parsed = Document::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Document::from_json("{\"kitaabs\": 3}").is_err());
    }

    #[test]
    fn test_stats() {
        let stats = sample().stats();
        assert_eq!(stats.kitaabs, 1);
        assert_eq!(stats.baabs, 1);
        assert_eq!(stats.sub_baabs, 1);
        assert_eq!(stats.hadiths, 2);
        // "line", "intro", and one marker line per hadith
        assert_eq!(stats.text_lines, 4);
    }

    #[test]
    fn test_entry_counts() {
        let doc = sample();
        let baab = &doc.kitaabs[0].baabs[0];
        assert_eq!(baab.sub_baab_count(), 1);
        assert_eq!(baab.hadith_count(), 1);
        match &baab.context[2] {
            ContextEntry::SubBaab(sub) => assert_eq!(sub.hadith_count(), 1),
            other => panic!("expected sub-baab, got {:?}", other),
        }
    }
}
