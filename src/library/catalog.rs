//! Catalog of media items.
//!
//! An ordered, append-only list of entries. Insertion order is preserved and
//! is the source order for every query.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Book, Dvd, ItemKind, Magazine};

/// Catalog of all media items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the end of the catalog.
    ///
    /// No deduplication and no validation: the same item may be added twice.
    pub fn add(&mut self, entry: CatalogEntry) {
        debug!(kind = %entry.kind(), title = entry.title(), "Adding catalog entry");
        self.entries.push(entry);
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Books in catalog order
    pub fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            CatalogEntry::Book(book) => Some(book),
            CatalogEntry::Magazine(_) | CatalogEntry::Dvd(_) => None,
        })
    }

    /// Magazines in catalog order
    pub fn magazines(&self) -> impl Iterator<Item = &Magazine> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            CatalogEntry::Magazine(magazine) => Some(magazine),
            CatalogEntry::Book(_) | CatalogEntry::Dvd(_) => None,
        })
    }

    /// DVDs in catalog order
    pub fn dvds(&self) -> impl Iterator<Item = &Dvd> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            CatalogEntry::Dvd(dvd) => Some(dvd),
            CatalogEntry::Book(_) | CatalogEntry::Magazine(_) => None,
        })
    }

    /// Filter entries by kind
    pub fn filter_by_kind(&self, kind: ItemKind) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.kind() == kind)
            .collect()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<CatalogEntry> for Catalog {
    fn extend<I: IntoIterator<Item = CatalogEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry);
        }
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single entry in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    Book(Book),
    Magazine(Magazine),
    Dvd(Dvd),
}

impl CatalogEntry {
    /// Title of the wrapped item, used as the sort key
    pub fn title(&self) -> &str {
        match self {
            CatalogEntry::Book(book) => book.title(),
            CatalogEntry::Magazine(magazine) => magazine.title(),
            CatalogEntry::Dvd(dvd) => dvd.title(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            CatalogEntry::Book(_) => ItemKind::Book,
            CatalogEntry::Magazine(_) => ItemKind::Magazine,
            CatalogEntry::Dvd(_) => ItemKind::Dvd,
        }
    }
}

impl From<Book> for CatalogEntry {
    fn from(book: Book) -> Self {
        CatalogEntry::Book(book)
    }
}

impl From<Magazine> for CatalogEntry {
    fn from(magazine: Magazine) -> Self {
        CatalogEntry::Magazine(magazine)
    }
}

impl From<Dvd> for CatalogEntry {
    fn from(dvd: Dvd) -> Self {
        CatalogEntry::Dvd(dvd)
    }
}

impl std::fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogEntry::Book(book) => write!(f, "[{}] {}", ItemKind::Book, book),
            CatalogEntry::Magazine(magazine) => {
                write!(f, "[{}] {}", ItemKind::Magazine, magazine)
            }
            CatalogEntry::Dvd(dvd) => write!(f, "[{}] {}", ItemKind::Dvd, dvd),
        }
    }
}
