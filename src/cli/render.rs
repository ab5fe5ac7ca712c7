//! Rendering of the demo query results.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::Book;
use crate::library::{
    filter_by_year, group_by_author, sort_by_title, total_duration, Catalog, CatalogEntry,
};

/// Results of the four catalog queries, in print order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    /// Year passed to the year filter
    pub year: i32,

    pub books_from_year: Vec<Book>,

    pub sorted_by_title: Vec<CatalogEntry>,

    pub books_by_author: BTreeMap<String, Vec<Book>>,

    /// Total DVD running time
    pub total_duration: u64,

    /// Unit label printed after `total_duration`
    pub duration_unit: String,
}

impl DemoReport {
    /// Run every query against the catalog
    pub fn build(catalog: &Catalog, year: i32, duration_unit: impl Into<String>) -> Self {
        Self {
            year,
            books_from_year: filter_by_year(catalog, year),
            sorted_by_title: sort_by_title(catalog),
            books_by_author: group_by_author(catalog),
            total_duration: total_duration(catalog),
            duration_unit: duration_unit.into(),
        }
    }

    /// Render as a pretty-printed JSON object
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize demo report")
    }
}

fn write_list<T: std::fmt::Display>(
    f: &mut std::fmt::Formatter<'_>,
    indent: &str,
    items: &[T],
) -> std::fmt::Result {
    if items.is_empty() {
        return writeln!(f, "{}(none)", indent);
    }
    for item in items {
        writeln!(f, "{}{}", indent, item)?;
    }
    Ok(())
}

impl std::fmt::Display for DemoReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Books from {}:", self.year)?;
        write_list(f, "  ", &self.books_from_year)?;
        writeln!(f)?;

        writeln!(f, "Sorted by title:")?;
        write_list(f, "  ", &self.sorted_by_title)?;
        writeln!(f)?;

        writeln!(f, "Books by author:")?;
        if self.books_by_author.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (author, books) in &self.books_by_author {
            writeln!(f, "  {}:", author)?;
            write_list(f, "    ", books)?;
        }
        writeln!(f)?;

        write!(
            f,
            "Total DVD duration: {} {}",
            self.total_duration, self.duration_unit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dvd, Magazine};
    use pretty_assertions::assert_eq;

    fn small_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("Emma", "Jane Austen", 1815, "978-0-14-143958-7").into());
        catalog.add(Magazine::new("Byte", 3, "March").into());
        catalog.add(Dvd::new("Heat", "Michael Mann", 170).into());
        catalog
    }

    #[test]
    fn test_render_text() {
        let report = DemoReport::build(&small_catalog(), 1815, "min");

        let expected = "\
Books from 1815:
  \"Emma\" by Jane Austen (1815), ISBN 978-0-14-143958-7

Sorted by title:
  [magazine] \"Byte\" #3 (March)
  [book] \"Emma\" by Jane Austen (1815), ISBN 978-0-14-143958-7
  [dvd] \"Heat\" dir. Michael Mann, 170 min

Books by author:
  Jane Austen:
    \"Emma\" by Jane Austen (1815), ISBN 978-0-14-143958-7

Total DVD duration: 170 min";

        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_render_text_empty_catalog() {
        let report = DemoReport::build(&Catalog::new(), 2000, "min");

        let expected = "\
Books from 2000:
  (none)

Sorted by title:
  (none)

Books by author:
  (none)

Total DVD duration: 0 min";

        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_render_json() {
        let report = DemoReport::build(&small_catalog(), 1815, "minutes");

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["year"], 1815);
        assert_eq!(json["books_from_year"][0]["title"], "Emma");
        assert_eq!(json["sorted_by_title"][0]["kind"], "magazine");
        assert_eq!(json["books_by_author"]["Jane Austen"][0]["year"], 1815);
        assert_eq!(json["total_duration"], 170);
        assert_eq!(json["duration_unit"], "minutes");
    }
}
