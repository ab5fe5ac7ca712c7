//! Demonstration catalog.

use super::catalog::Catalog;
use crate::domain::{Book, Dvd, Magazine};

/// Year used by the demo's year filter when nothing else is configured
pub const DEMO_YEAR: i32 = 1869;

/// Build the demo catalog.
///
/// Covers all three kinds, two authors with two books each, two books
/// sharing 1869 and two DVDs by the same director.
pub fn demo_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.add(Book::new("Война и мир", "Л. Н. Толстой", 1869, "978-5-17-032405-8").into());
    catalog.add(Magazine::new("Наука и жизнь", 5, "May").into());
    catalog.add(Dvd::new("Интерстеллар", "Кристофер Нолан", 169).into());
    catalog.add(
        Book::new(
            "Преступление и наказание",
            "Ф. М. Достоевский",
            1866,
            "978-5-17-032406-5",
        )
        .into(),
    );
    catalog.add(Dvd::new("Начало", "Кристофер Нолан", 148).into());
    catalog.add(Book::new("Анна Каренина", "Л. Н. Толстой", 1877, "978-5-17-032407-1").into());
    catalog.add(Book::new("Идиот", "Ф. М. Достоевский", 1869, "978-5-17-032408-8").into());

    catalog
}
