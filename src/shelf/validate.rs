use crate::error::{Result, ShelfError};
use chrono::{Datelike, Local};

/// Earliest publication year the catalog accepts.
pub const MIN_YEAR: i32 = 1000;

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Checks the fields of a book about to be added.
///
/// Title and author must be non-empty (whitespace counts as content); the
/// year must fall within `[MIN_YEAR, current_year()]`.
pub fn validate_book(title: &str, author: &str, year: i32) -> Result<()> {
    if title.is_empty() {
        return Err(ShelfError::invalid("title must be a non-empty string"));
    }

    if author.is_empty() {
        return Err(ShelfError::invalid("author must be a non-empty string"));
    }

    let max_year = current_year();
    if !(MIN_YEAR..=max_year).contains(&year) {
        return Err(ShelfError::invalid(format!(
            "year must be between {} and {}",
            MIN_YEAR, max_year
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_years() {
        assert!(validate_book("T", "A", MIN_YEAR).is_ok());
        assert!(validate_book("T", "A", current_year()).is_ok());
    }

    #[test]
    fn rejects_out_of_range_years() {
        assert!(matches!(
            validate_book("T", "A", 999),
            Err(ShelfError::InvalidData(_))
        ));
        assert!(matches!(
            validate_book("T", "A", current_year() + 1),
            Err(ShelfError::InvalidData(_))
        ));
    }

    #[test]
    fn rejects_empty_text() {
        assert!(matches!(
            validate_book("", "A", 2000),
            Err(ShelfError::InvalidData(msg)) if msg.contains("title")
        ));
        assert!(matches!(
            validate_book("T", "", 2000),
            Err(ShelfError::InvalidData(msg)) if msg.contains("author")
        ));
    }

    #[test]
    fn whitespace_counts_as_text() {
        assert!(validate_book("   ", "A", 2000).is_ok());
        assert!(validate_book("T", " ", 2000).is_ok());
    }
}
