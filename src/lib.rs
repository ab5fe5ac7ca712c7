//! shelf - In-memory media catalog
//!
//! A small catalog of books, magazines and DVDs with four read-only
//! queries over it.
//!
//! # Architecture
//!
//! - Entries are a closed enum; every use site matches all three kinds
//! - The catalog is append-only and keeps insertion order
//! - Queries are pure functions of the catalog and cannot fail
//!
//! # Modules
//!
//! - `domain`: Item types (Book, Magazine, Dvd) and the ISBN check
//! - `library`: Catalog, queries and the demo catalog
//! - `config`: Layered configuration (flags, env, YAML file, defaults)
//! - `cli`: Command-line interface and result rendering
//!
//! # Usage
//!
//! ```bash
//! # Print every query result over the demo catalog
//! shelf
//!
//! # Same, filtering a different year, as JSON
//! shelf demo --year 1866 --format json
//!
//! # List the DVDs in the demo catalog
//! shelf list --kind dvd
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use domain::{Book, Dvd, IsbnError, ItemKind, Magazine};
pub use library::{
    filter_by_year, group_by_author, sort_by_title, total_duration, Catalog, CatalogEntry,
};
