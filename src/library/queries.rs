//! Read-only queries over a catalog.
//!
//! Every query is a total, pure function of the catalog contents: none can
//! fail and none mutates the catalog.

use std::collections::BTreeMap;

use tracing::debug;

use super::catalog::{Catalog, CatalogEntry};
use crate::domain::Book;

/// Books published in exactly `year`, in catalog order.
pub fn filter_by_year(catalog: &Catalog, year: i32) -> Vec<Book> {
    let books: Vec<Book> = catalog
        .books()
        .filter(|book| book.year() == year)
        .cloned()
        .collect();

    debug!(year, count = books.len(), "Filtered books by year");
    books
}

/// All entries sorted ascending by title.
///
/// Titles are compared with `str` ordering, i.e. byte-wise over UTF-8, which
/// is the same as Unicode code point order. The sort is stable, so entries
/// with equal titles keep their catalog order.
pub fn sort_by_title(catalog: &Catalog) -> Vec<CatalogEntry> {
    let mut entries = catalog.entries().to_vec();
    entries.sort_by(|a, b| a.title().cmp(b.title()));

    debug!(count = entries.len(), "Sorted entries by title");
    entries
}

/// Books grouped by exact author string.
///
/// Keys are compared case-sensitively without trimming. Each group keeps
/// catalog order.
pub fn group_by_author(catalog: &Catalog) -> BTreeMap<String, Vec<Book>> {
    let mut groups: BTreeMap<String, Vec<Book>> = BTreeMap::new();

    for book in catalog.books() {
        groups
            .entry(book.author().to_string())
            .or_default()
            .push(book.clone());
    }

    debug!(authors = groups.len(), "Grouped books by author");
    groups
}

/// Total running time of all DVDs in minutes. Zero when there are none.
pub fn total_duration(catalog: &Catalog) -> u64 {
    let total: u64 = catalog.dvds().map(|dvd| u64::from(dvd.duration())).sum();

    debug!(total, "Summed DVD durations");
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dvd, Magazine};

    #[test]
    fn test_filter_by_year_no_match() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("Dune", "Frank Herbert", 1965, "978-0-441-17271-9").into());

        assert!(filter_by_year(&catalog, 1966).is_empty());
    }

    #[test]
    fn test_filter_by_year_negative_year() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("Anabasis", "Xenophon", -370, "").into());
        catalog.add(Book::new("Iliad", "Homer", -750, "").into());

        let books = filter_by_year(&catalog, -370);
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title(), "Anabasis");
    }

    #[test]
    fn test_filter_by_year_ignores_other_kinds() {
        let mut catalog = Catalog::new();
        catalog.add(Magazine::new("1999", 1999, "May").into());
        catalog.add(Dvd::new("1999", "Nobody", 1999).into());

        assert!(filter_by_year(&catalog, 1999).is_empty());
    }

    #[test]
    fn test_sort_by_title_mixed_kinds() {
        let mut catalog = Catalog::new();
        catalog.add(Dvd::new("Heat", "Michael Mann", 170).into());
        catalog.add(Book::new("Dune", "Frank Herbert", 1965, "").into());
        catalog.add(Magazine::new("Wired", 12, "December").into());
        catalog.add(Magazine::new("Byte", 3, "March").into());

        let titles: Vec<_> = sort_by_title(&catalog)
            .iter()
            .map(|entry| entry.title().to_string())
            .collect();
        assert_eq!(titles, vec!["Byte", "Dune", "Heat", "Wired"]);
    }

    #[test]
    fn test_sort_by_title_is_code_point_order() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("ábc", "a", 1, "").into());
        catalog.add(Book::new("Zed", "a", 1, "").into());
        catalog.add(Book::new("abc", "a", 1, "").into());
        catalog.add(Book::new("Ёлка", "a", 1, "").into());
        catalog.add(Book::new("Ель", "a", 1, "").into());

        let titles: Vec<_> = sort_by_title(&catalog)
            .iter()
            .map(|entry| entry.title().to_string())
            .collect();
        // Uppercase ASCII < lowercase ASCII < Latin-1 < Cyrillic; Ё (U+0401) < Е (U+0415)
        assert_eq!(titles, vec!["Zed", "abc", "ábc", "Ёлка", "Ель"]);
    }

    #[test]
    fn test_sort_by_title_is_stable() {
        let mut catalog = Catalog::new();
        catalog.add(Dvd::new("Solaris", "Andrei Tarkovsky", 166).into());
        catalog.add(Book::new("Solaris", "Stanisław Lem", 1961, "").into());
        catalog.add(Dvd::new("Alien", "Ridley Scott", 117).into());
        catalog.add(Dvd::new("Solaris", "Steven Soderbergh", 99).into());

        let sorted = sort_by_title(&catalog);
        assert_eq!(sorted[0].title(), "Alien");
        assert_eq!(sorted[1], catalog.entries()[0]);
        assert_eq!(sorted[2], catalog.entries()[1]);
        assert_eq!(sorted[3], catalog.entries()[3]);
    }

    #[test]
    fn test_group_by_author_is_case_sensitive() {
        let mut catalog = Catalog::new();
        catalog.add(Book::new("A", "Le Guin", 1969, "").into());
        catalog.add(Book::new("B", "le guin", 1974, "").into());
        catalog.add(Book::new("C", "Le Guin ", 1971, "").into());
        catalog.add(Book::new("D", "Le Guin", 1968, "").into());

        let groups = group_by_author(&catalog);
        assert_eq!(groups.len(), 3);

        let titles: Vec<_> = groups["Le Guin"].iter().map(Book::title).collect();
        assert_eq!(titles, vec!["A", "D"]);
    }

    #[test]
    fn test_group_by_author_skips_directors() {
        let mut catalog = Catalog::new();
        catalog.add(Dvd::new("Heat", "Michael Mann", 170).into());
        catalog.add(Dvd::new("Thief", "Michael Mann", 123).into());

        assert!(group_by_author(&catalog).is_empty());
    }

    #[test]
    fn test_total_duration() {
        let mut catalog = Catalog::new();
        assert_eq!(total_duration(&catalog), 0);

        catalog.add(Dvd::new("Heat", "Michael Mann", 170).into());
        catalog.add(Book::new("Dune", "Frank Herbert", 1965, "").into());
        catalog.add(Dvd::new("Thief", "Michael Mann", 123).into());
        catalog.add(Dvd::new("Blank", "Nobody", 0).into());

        assert_eq!(total_duration(&catalog), 293);
    }

    #[test]
    fn test_total_duration_does_not_overflow_u32() {
        let mut catalog = Catalog::new();
        catalog.add(Dvd::new("Long", "A", u32::MAX).into());
        catalog.add(Dvd::new("Longer", "B", u32::MAX).into());

        assert_eq!(total_duration(&catalog), 2 * u64::from(u32::MAX));
    }
}
