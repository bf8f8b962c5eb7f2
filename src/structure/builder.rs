//! Single-pass outline builder.
//!
//! Scans flat items left to right and grows the [`Document`] in place. Every
//! node is appended to its parent the moment it is opened, so an open node is
//! always the last element of its parent's sequence. The builder only tracks
//! how deep the open path goes ([`Scope`]) and reaches open nodes through
//! accessors; closing a node is a scope change.
//!
//! Each step tries the rules below in order and the first match decides how
//! many items are consumed:
//!
//! 1. kitaab title
//! 2. baab title
//! 3. sub-baab marker (number line + bare "باب" line, two items)
//! 4. hadith marker (number line)
//! 5. content line
//!
//! Anything else is discarded. Rule 3 must run before rule 4: a number line
//! followed by a bare "باب" line is always a sub-baab.

use crate::diagnostics::{Diagnostic, Level};
use crate::extractors::FlatItem;
use crate::structure::markers;
use crate::structure::types::{Baab, ContextEntry, Document, Hadith, Kitaab, SubBaab, SubBaabEntry};

/// Depth of the currently open path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Nothing open
    NoKitaab,
    /// A kitaab is open, no baab
    InKitaab,
    /// A baab is open, content goes to its context
    InBaab,
    /// A sub-baab is open inside the current baab
    InSubBaab,
    /// A hadith is open inside the current baab or sub-baab
    InHadith(HadithHost),
}

/// Container of the open hadith.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HadithHost {
    /// Directly in the baab's context
    Baab,
    /// In the open sub-baab's context
    SubBaab,
}

impl Scope {
    fn kitaab_open(self) -> bool {
        self != Scope::NoKitaab
    }

    fn baab_open(self) -> bool {
        matches!(self, Scope::InBaab | Scope::InSubBaab | Scope::InHadith(_))
    }

    fn sub_baab_open(self) -> bool {
        matches!(self, Scope::InSubBaab | Scope::InHadith(HadithHost::SubBaab))
    }
}

/// Result of a full scan.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    /// The finished outline
    pub document: Document,
    /// Recoverable anomalies, in scan order
    pub diagnostics: Vec<Diagnostic>,
}

type Rule<'a> = fn(&mut StructureBuilder<'a>, usize) -> Option<usize>;

/// Stateful scanner turning flat items into a [`Document`].
pub struct StructureBuilder<'a> {
    items: &'a [FlatItem],
    document: Document,
    scope: Scope,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> StructureBuilder<'a> {
    /// Create a builder over `items`, which must be in document order.
    pub fn new(items: &'a [FlatItem]) -> Self {
        Self {
            items,
            document: Document::new(),
            scope: Scope::NoKitaab,
            diagnostics: Vec::new(),
        }
    }

    /// Current scope.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Scan every item and close whatever is still open.
    pub fn build(mut self) -> BuildOutput {
        let mut index = 0;
        while index < self.items.len() {
            index += self.step(index);
        }
        self.close_kitaab();

        BuildOutput {
            document: self.document,
            diagnostics: self.diagnostics,
        }
    }

    /// Process the item at `index`; returns the number of items consumed.
    ///
    /// An index past the end consumes nothing and returns 0.
    pub fn step(&mut self, index: usize) -> usize {
        if index >= self.items.len() {
            return 0;
        }
        let rules: [Rule<'a>; 5] = [
            Self::kitaab_title,
            Self::baab_title,
            Self::sub_baab_marker,
            Self::hadith_marker,
            Self::content_line,
        ];
        for rule in rules {
            if let Some(consumed) = rule(self, index) {
                return consumed;
            }
        }

        let item = &self.items[index];
        log::debug!("Discarded item {}: {}", item.position, item.text);
        1
    }

    fn kitaab_title(&mut self, index: usize) -> Option<usize> {
        let items = self.items;
        let item = &items[index];
        let marker = markers::kitaab_title(item)?;

        self.close_kitaab();
        let fallback = self.document.kitaabs.len() as u32 + 1;
        let number = self.number_or_fallback(marker.number, fallback, item.position, Level::Kitaab);
        log::info!("Found Kitaab {}: {}", number, marker.title);

        self.document.kitaabs.push(Kitaab::new(
            number,
            marker.title,
            item.identifier.clone().unwrap_or_default(),
        ));
        self.scope = Scope::InKitaab;
        Some(1)
    }

    fn baab_title(&mut self, index: usize) -> Option<usize> {
        let items = self.items;
        let item = &items[index];
        let marker = markers::baab_title(item, self.scope.kitaab_open())?;

        if !self.scope.kitaab_open() {
            log::warn!("Baab title outside any kitaab at item {}: {}", item.position, marker.title);
            self.diagnostics.push(Diagnostic::BaabOutsideKitaab {
                position: item.position,
                text: marker.title,
            });
            return Some(1);
        }

        self.close_baab();
        let fallback = self.current_kitaab().map_or(0, |k| k.baabs.len()) as u32 + 1;
        let number = self.number_or_fallback(marker.number, fallback, item.position, Level::Baab);
        if marker.title.chars().count() > 50 {
            let short: String = marker.title.chars().take(50).collect();
            log::info!("Found Baab {}: {}...", number, short);
        } else {
            log::info!("Found Baab {}: {}", number, marker.title);
        }

        let baab = Baab::new(number, marker.title, item.identifier.clone().unwrap_or_default());
        if let Some(kitaab) = self.current_kitaab() {
            kitaab.baabs.push(baab);
            self.scope = Scope::InBaab;
        }
        Some(1)
    }

    fn sub_baab_marker(&mut self, index: usize) -> Option<usize> {
        if !self.scope.baab_open() {
            return None;
        }
        let items = self.items;
        let item = &items[index];
        let marker = markers::sub_baab_marker(item, items.get(index + 1))?;

        self.close_sub_baab();
        let fallback = self.current_baab().map_or(0, |b| b.sub_baab_count()) as u32 + 1;
        let number = self.number_or_fallback(marker.number, fallback, item.position, Level::SubBaab);
        log::debug!("Found sub-baab {}: {}", number, marker.title);

        if let Some(baab) = self.current_baab() {
            baab.context.push(ContextEntry::SubBaab(SubBaab::new(number, marker.title)));
            self.scope = Scope::InSubBaab;
        }
        Some(2)
    }

    fn hadith_marker(&mut self, index: usize) -> Option<usize> {
        if !self.scope.baab_open() {
            return None;
        }
        let items = self.items;
        let item = &items[index];
        let parsed = markers::hadith_marker(item)?;

        self.close_hadith();
        let host = if self.scope.sub_baab_open() {
            HadithHost::SubBaab
        } else {
            HadithHost::Baab
        };
        let existing = match host {
            HadithHost::Baab => self.current_baab().map_or(0, |b| b.hadith_count()),
            HadithHost::SubBaab => self.current_sub_baab().map_or(0, |s| s.hadith_count()),
        };
        let number = self.number_or_fallback(parsed, existing as u32 + 1, item.position, Level::Hadith);
        log::debug!("Found hadith {}", number);

        let hadith = Hadith::new(number, item.text.clone());
        match host {
            HadithHost::Baab => {
                if let Some(baab) = self.current_baab() {
                    baab.context.push(ContextEntry::Hadith(hadith));
                    self.scope = Scope::InHadith(host);
                }
            },
            HadithHost::SubBaab => {
                if let Some(sub) = self.current_sub_baab() {
                    sub.context.push(SubBaabEntry::Hadith(hadith));
                    self.scope = Scope::InHadith(host);
                }
            },
        }
        Some(1)
    }

    fn content_line(&mut self, index: usize) -> Option<usize> {
        let items = self.items;
        let item = &items[index];
        if !self.scope.baab_open() || item.is_title_marker || item.is_page_head() {
            return None;
        }

        let text = item.text.clone();
        match self.scope {
            Scope::InBaab => {
                if let Some(baab) = self.current_baab() {
                    baab.context.push(ContextEntry::Text(text));
                }
            },
            Scope::InSubBaab => {
                if let Some(sub) = self.current_sub_baab() {
                    sub.context.push(SubBaabEntry::Text(text));
                }
            },
            Scope::InHadith(_) => {
                if let Some(hadith) = self.current_hadith() {
                    hadith.context.push(text);
                }
            },
            Scope::NoKitaab | Scope::InKitaab => {},
        }
        Some(1)
    }

    fn number_or_fallback(
        &mut self,
        parsed: Option<u32>,
        fallback: u32,
        position: usize,
        level: Level,
    ) -> u32 {
        match parsed {
            Some(number) => number,
            None => {
                log::warn!("No number on {} marker at item {}, using {}", level, position, fallback);
                self.diagnostics.push(Diagnostic::NumberFallback {
                    position,
                    level,
                    assigned: fallback,
                });
                fallback
            },
        }
    }

    // Closing: each level closes the levels below it first.

    fn close_hadith(&mut self) {
        if let Scope::InHadith(host) = self.scope {
            if let Some(hadith) = self.current_hadith() {
                log::debug!(
                    "Closed hadith {} with {} lines",
                    hadith.hadith_number,
                    hadith.context.len()
                );
            }
            self.scope = match host {
                HadithHost::Baab => Scope::InBaab,
                HadithHost::SubBaab => Scope::InSubBaab,
            };
        }
    }

    fn close_sub_baab(&mut self) {
        self.close_hadith();
        if self.scope == Scope::InSubBaab {
            if let Some(sub) = self.current_sub_baab() {
                log::debug!(
                    "Closed sub-baab {} with {} entries",
                    sub.sub_baab_number,
                    sub.context.len()
                );
            }
            self.scope = Scope::InBaab;
        }
    }

    fn close_baab(&mut self) {
        self.close_sub_baab();
        if self.scope == Scope::InBaab {
            if let Some(baab) = self.current_baab() {
                log::info!("Closed Baab {} with {} entries", baab.number, baab.context.len());
            }
            self.scope = Scope::InKitaab;
        }
    }

    fn close_kitaab(&mut self) {
        self.close_baab();
        if self.scope == Scope::InKitaab {
            if let Some(kitaab) = self.current_kitaab() {
                log::info!("Closed Kitaab {} with {} baabs", kitaab.number, kitaab.baabs.len());
            }
            self.scope = Scope::NoKitaab;
        }
    }

    // Accessors for the open path. Open nodes are always last in their parent.

    fn current_kitaab(&mut self) -> Option<&mut Kitaab> {
        if !self.scope.kitaab_open() {
            return None;
        }
        self.document.kitaabs.last_mut()
    }

    fn current_baab(&mut self) -> Option<&mut Baab> {
        if !self.scope.baab_open() {
            return None;
        }
        self.current_kitaab()?.baabs.last_mut()
    }

    fn current_sub_baab(&mut self) -> Option<&mut SubBaab> {
        if !self.scope.sub_baab_open() {
            return None;
        }
        match self.current_baab()?.context.last_mut()? {
            ContextEntry::SubBaab(sub) => Some(sub),
            _ => None,
        }
    }

    fn current_hadith(&mut self) -> Option<&mut Hadith> {
        match self.scope {
            Scope::InHadith(HadithHost::Baab) => match self.current_baab()?.context.last_mut()? {
                ContextEntry::Hadith(hadith) => Some(hadith),
                _ => None,
            },
            Scope::InHadith(HadithHost::SubBaab) => {
                match self.current_sub_baab()?.context.last_mut()? {
                    SubBaabEntry::Hadith(hadith) => Some(hadith),
                    _ => None,
                }
            },
            _ => None,
        }
    }
}

/// Build the outline of `items` in one pass.
pub fn build_outline(items: &[FlatItem]) -> BuildOutput {
    StructureBuilder::new(items).build()
}
