//! In-memory media catalog and its queries.
//!
//! The catalog is populated once and then only read:
//!
//! ```text
//! demo_catalog() ──► Catalog ──┬─► filter_by_year
//!                              ├─► sort_by_title
//!                              ├─► group_by_author
//!                              └─► total_duration
//! ```

pub mod catalog;
pub mod queries;
pub mod sample;

pub use catalog::{Catalog, CatalogEntry};
pub use queries::{filter_by_year, group_by_author, sort_by_title, total_duration};
pub use sample::{demo_catalog, DEMO_YEAR};
