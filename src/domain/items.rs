//! Media items held by the catalog.
//!
//! Items are immutable once constructed: fields are private and only
//! exposed through borrowing getters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::isbn::{validate_isbn13, IsbnError};

/// A printed book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Book title
    title: String,

    /// Author name, compared verbatim when grouping
    author: String,

    /// Publication year
    year: i32,

    /// ISBN-13 code, usually hyphenated (not validated on construction)
    isbn: String,
}

impl Book {
    /// Create a new book
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            isbn: isbn.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Check the identifier code against the ISBN-13 format and check digit
    pub fn check_isbn(&self) -> Result<(), IsbnError> {
        validate_isbn13(&self.isbn).inspect_err(|e| {
            tracing::debug!(title = %self.title, isbn = %self.isbn, "Malformed ISBN: {}", e);
        })
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"{}\" by {} ({}), ISBN {}",
            self.title, self.author, self.year, self.isbn
        )
    }
}

/// A single magazine issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    title: String,
    issue: i32,
    /// Month label as printed on the cover (free text)
    month: String,
}

impl Magazine {
    /// Create a new magazine issue
    pub fn new(title: impl Into<String>, issue: i32, month: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            issue,
            month: month.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn issue(&self) -> i32 {
        self.issue
    }

    pub fn month(&self) -> &str {
        &self.month
    }
}

impl std::fmt::Display for Magazine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" #{} ({})", self.title, self.issue, self.month)
    }
}

/// A film on DVD
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dvd {
    title: String,
    director: String,
    /// Running time in minutes
    duration: u32,
}

impl Dvd {
    /// Create a new DVD
    pub fn new(title: impl Into<String>, director: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            director: director.into(),
            duration,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    /// Running time in minutes
    pub fn duration(&self) -> u32 {
        self.duration
    }
}

impl std::fmt::Display for Dvd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"{}\" dir. {}, {} min",
            self.title, self.director, self.duration
        )
    }
}

/// Kind of catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Book,
    Magazine,
    Dvd,
}

/// Error returned when parsing an unknown item kind
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown item kind: {0}")]
pub struct ParseKindError(pub String);

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Book => write!(f, "book"),
            ItemKind::Magazine => write!(f, "magazine"),
            ItemKind::Dvd => write!(f, "dvd"),
        }
    }
}

impl std::str::FromStr for ItemKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "book" | "books" => Ok(ItemKind::Book),
            "magazine" | "magazines" | "mag" => Ok(ItemKind::Magazine),
            "dvd" | "dvds" | "film" | "movie" => Ok(ItemKind::Dvd),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}
