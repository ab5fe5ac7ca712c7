//! Domain types for the shelf catalog.
//!
//! This module contains the item data structures:
//! - Items: Book, Magazine, Dvd and their kind tag
//! - ISBN: Opt-in identifier code check

pub mod isbn;
pub mod items;

// Re-export commonly used types
pub use isbn::{validate_isbn13, IsbnError};
pub use items::{Book, Dvd, ItemKind, Magazine, ParseKindError};
