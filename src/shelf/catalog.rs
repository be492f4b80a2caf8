//! # Catalog Service
//!
//! [`Catalog`] is the in-memory authority over the book collection. It owns
//! the ordered list of books and the identifier counter, enforces the data
//! invariants, and hands the full collection to its [`BookStore`] after every
//! mutation.
//!
//! ## Identifiers
//!
//! `next_id` is derived once when the catalog is opened (`max(id) + 1`, or 1
//! for an empty catalog) and only moves forward, so an id freed by `remove`
//! is never handed out again while the catalog is open. Once `u64::MAX` has
//! been used, `add` fails with `InvalidData`; existing books stay usable.
//!
//! ## Failure Semantics
//!
//! Input is validated before anything is touched. If the store then fails to
//! persist, the in-memory change is undone before the error is returned, so
//! the catalog always mirrors the last successful write.

use crate::error::{Result, ShelfError};
use crate::model::{Book, BookStatus, SearchField};
use crate::store::BookStore;
use crate::validate::validate_book;

pub struct Catalog<S: BookStore> {
    store: S,
    books: Vec<Book>,
    /// `None` once the id space is exhausted.
    next_id: Option<u64>,
}

impl<S: BookStore> Catalog<S> {
    /// Loads the collection from `store`.
    pub fn open(store: S) -> Result<Self> {
        let books = store.load()?;
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0).checked_add(1);
        if next_id.is_none() {
            tracing::warn!("catalog holds the largest possible id, new books cannot be added");
        }
        tracing::debug!(count = books.len(), next_id = ?next_id, "catalog loaded");
        Ok(Self {
            store,
            books,
            next_id,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn next_id(&self) -> Option<u64> {
        self.next_id
    }

    pub fn add(&mut self, title: &str, author: &str, year: i32) -> Result<Book> {
        validate_book(title, author, year)?;
        let id = self
            .next_id
            .ok_or_else(|| ShelfError::invalid("no book identifiers left to assign"))?;

        let book = Book::new(id, title, author, year);
        self.books.push(book.clone());
        if let Err(e) = self.persist() {
            self.books.pop();
            return Err(e);
        }

        self.next_id = id.checked_add(1);
        tracing::debug!(id = book.id, "book added");
        Ok(book)
    }

    pub fn remove(&mut self, id: u64) -> Result<()> {
        let pos = self.position(id)?;
        let removed = self.books.remove(pos);
        if let Err(e) = self.persist() {
            self.books.insert(pos, removed);
            return Err(e);
        }

        tracing::debug!(id, "book removed");
        Ok(())
    }

    /// Linear scan over the collection, preserving its order.
    ///
    /// Title and author match case-insensitively on substrings. Year queries
    /// must be numeric and match exactly.
    pub fn search(&self, query: &str, field: SearchField) -> Result<Vec<&Book>> {
        let query = query.to_lowercase();

        let matches: Vec<&Book> = match field {
            SearchField::Year => {
                let year: i32 = query
                    .trim()
                    .parse()
                    .map_err(|_| ShelfError::invalid("year must be numeric"))?;
                self.books.iter().filter(|b| b.year == year).collect()
            }
            SearchField::Title => self
                .books
                .iter()
                .filter(|b| b.title.to_lowercase().contains(&query))
                .collect(),
            SearchField::Author => self
                .books
                .iter()
                .filter(|b| b.author.to_lowercase().contains(&query))
                .collect(),
        };

        Ok(matches)
    }

    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    pub fn change_status(&mut self, id: u64, new_status: &str) -> Result<Book> {
        let status: BookStatus = new_status.parse()?;
        let pos = self.position(id)?;

        let previous = std::mem::replace(&mut self.books[pos].status, status);
        if let Err(e) = self.persist() {
            self.books[pos].status = previous;
            return Err(e);
        }

        tracing::debug!(id, %status, "book status changed");
        Ok(self.books[pos].clone())
    }

    pub fn get_by_id(&self, id: u64) -> Result<&Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .ok_or(ShelfError::NotFound(id))
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.books
            .iter()
            .position(|b| b.id == id)
            .ok_or(ShelfError::NotFound(id))
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::validate::current_year;

    fn empty_catalog() -> Catalog<InMemoryStore> {
        Catalog::open(InMemoryStore::new()).unwrap()
    }

    fn titles(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.title.clone()).collect()
    }

    #[test]
    fn assigns_increasing_ids_from_one() {
        let mut catalog = empty_catalog();
        for i in 0..5 {
            catalog.add(&format!("Book {}", i), "Author", 2000).unwrap();
        }

        let ids: Vec<u64> = catalog.list_all().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(catalog.next_id(), Some(6));
    }

    #[test]
    fn add_persists_full_collection() {
        let mut catalog = empty_catalog();
        let book = catalog.add("Dune", "Frank Herbert", 1965).unwrap();

        assert_eq!(book.id, 1);
        assert_eq!(book.status, BookStatus::Available);
        assert_eq!(catalog.store().stored(), &[book]);
        assert_eq!(catalog.store().save_count(), 1);
    }

    #[test]
    fn next_id_continues_after_loaded_max() {
        let store = InMemoryStore::with_books(vec![
            Book::new(4, "A", "X", 2000),
            Book::new(9, "B", "Y", 2001),
            Book::new(2, "C", "Z", 2002),
        ]);
        let mut catalog = Catalog::open(store).unwrap();

        let book = catalog.add("D", "W", 2003).unwrap();
        assert_eq!(book.id, 10);
    }

    #[test]
    fn exhausted_id_space_refuses_new_books() {
        let store = InMemoryStore::with_books(vec![Book::new(u64::MAX, "A", "B", 2000)]);
        let mut catalog = Catalog::open(store).unwrap();
        assert_eq!(catalog.next_id(), None);
        assert_eq!(catalog.list_all().len(), 1);

        let err = catalog.add("C", "D", 2001).unwrap_err();
        assert!(matches!(err, ShelfError::InvalidData(_)));
        assert_eq!(catalog.list_all().len(), 1);
        assert_eq!(catalog.store().save_count(), 0);
    }

    #[test]
    fn last_id_can_still_be_assigned() {
        let store = InMemoryStore::with_books(vec![Book::new(u64::MAX - 1, "A", "B", 2000)]);
        let mut catalog = Catalog::open(store).unwrap();

        let book = catalog.add("C", "D", 2001).unwrap();
        assert_eq!(book.id, u64::MAX);
        assert_eq!(catalog.next_id(), None);
        assert!(catalog.add("E", "F", 2002).is_err());
    }

    #[test]
    fn whitespace_only_text_is_accepted() {
        let mut catalog = empty_catalog();
        let book = catalog.add("   ", "Author", 2000).unwrap();
        assert_eq!(book.title, "   ");
    }

    #[test]
    fn rejects_invalid_books_without_mutation() {
        let mut catalog = empty_catalog();
        catalog.add("Kept", "Author", 2000).unwrap();

        for (title, author, year) in [
            ("", "Author", 2020),
            ("Title", "", 2020),
            ("Title", "Author", 999),
            ("Title", "Author", current_year() + 1),
        ] {
            let err = catalog.add(title, author, year).unwrap_err();
            assert!(matches!(err, ShelfError::InvalidData(_)));
        }

        assert_eq!(catalog.list_all().len(), 1);
        assert_eq!(catalog.next_id(), Some(2));
        assert_eq!(catalog.store().save_count(), 1);
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut catalog = empty_catalog();
        catalog.add("A", "X", 2000).unwrap();
        catalog.add("B", "X", 2000).unwrap();
        catalog.add("C", "X", 2000).unwrap();

        catalog.remove(3).unwrap();
        assert_eq!(catalog.list_all().len(), 2);

        let book = catalog.add("D", "X", 2000).unwrap();
        assert_eq!(book.id, 4);
        assert!(catalog.get_by_id(3).is_err());
    }

    #[test]
    fn remove_keeps_order_of_remaining_books() {
        let mut catalog = empty_catalog();
        catalog.add("A", "X", 2000).unwrap();
        catalog.add("B", "X", 2000).unwrap();
        catalog.add("C", "X", 2000).unwrap();

        catalog.remove(2).unwrap();

        let remaining: Vec<&str> = catalog.list_all().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(remaining, vec!["A", "C"]);
        assert_eq!(catalog.store().stored().len(), 2);
    }

    #[test]
    fn removing_unknown_id_is_not_found() {
        let mut catalog = empty_catalog();
        catalog.add("A", "X", 2000).unwrap();

        let err = catalog.remove(999).unwrap_err();
        assert!(matches!(err, ShelfError::NotFound(999)));
        assert_eq!(catalog.list_all().len(), 1);
    }

    #[test]
    fn searches_titles_case_insensitively() {
        let mut catalog = empty_catalog();
        catalog.add("Title One", "Someone", 2000).unwrap();
        catalog.add("Other", "Someone", 2001).unwrap();

        let lower = catalog.search("tit", SearchField::Title).unwrap();
        assert_eq!(titles(&lower), vec!["Title One"]);

        let upper = catalog.search("TIT", SearchField::Title).unwrap();
        assert_eq!(titles(&upper), vec!["Title One"]);
    }

    #[test]
    fn searches_authors_by_substring() {
        let mut catalog = empty_catalog();
        catalog.add("Solaris", "Stanisław Lem", 1961).unwrap();
        catalog.add("Dune", "Frank Herbert", 1965).unwrap();
        catalog.add("The Cyberiad", "Stanisław Lem", 1965).unwrap();

        let found = catalog.search("STANISŁAW", SearchField::Author).unwrap();
        assert_eq!(titles(&found), vec!["Solaris", "The Cyberiad"]);
    }

    #[test]
    fn searches_years_exactly() {
        let mut catalog = empty_catalog();
        catalog.add("Dune", "Frank Herbert", 1965).unwrap();
        catalog.add("Solaris", "Stanisław Lem", 1961).unwrap();
        catalog.add("The Cyberiad", "Stanisław Lem", 1965).unwrap();

        let found = catalog.search(" 1965 ", SearchField::Year).unwrap();
        assert_eq!(titles(&found), vec!["Dune", "The Cyberiad"]);

        let none = catalog.search("196", SearchField::Year).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn non_numeric_year_query_is_invalid() {
        let catalog = empty_catalog();
        let err = catalog.search("abc", SearchField::Year).unwrap_err();
        assert!(matches!(err, ShelfError::InvalidData(msg) if msg == "year must be numeric"));
    }

    #[test]
    fn changes_only_status() {
        let mut catalog = empty_catalog();
        let original = catalog.add("Dune", "Frank Herbert", 1965).unwrap();

        let updated = catalog.change_status(original.id, "checked_out").unwrap();
        assert_eq!(updated.status, BookStatus::CheckedOut);
        assert_eq!(updated.title, original.title);
        assert_eq!(updated.author, original.author);
        assert_eq!(updated.year, original.year);
        assert_eq!(
            catalog.store().stored()[0].status,
            BookStatus::CheckedOut
        );
    }

    #[test]
    fn bogus_status_is_invalid_and_leaves_book_unchanged() {
        let mut catalog = empty_catalog();
        catalog.add("Dune", "Frank Herbert", 1965).unwrap();

        let err = catalog.change_status(1, "bogus").unwrap_err();
        assert!(matches!(err, ShelfError::InvalidData(_)));
        assert_eq!(catalog.get_by_id(1).unwrap().status, BookStatus::Available);
    }

    #[test]
    fn status_is_validated_before_lookup() {
        let mut catalog = empty_catalog();
        let err = catalog.change_status(42, "bogus").unwrap_err();
        assert!(matches!(err, ShelfError::InvalidData(_)));

        let err = catalog.change_status(42, "available").unwrap_err();
        assert!(matches!(err, ShelfError::NotFound(42)));
    }

    #[test]
    fn get_by_id_returns_first_match() {
        let store = InMemoryStore::with_books(vec![
            Book::new(1, "First", "X", 2000),
            Book::new(1, "Duplicate", "X", 2000),
        ]);
        let catalog = Catalog::open(store).unwrap();

        assert_eq!(catalog.get_by_id(1).unwrap().title, "First");
        assert!(matches!(catalog.get_by_id(2), Err(ShelfError::NotFound(2))));
    }

    #[test]
    fn failed_save_rolls_back_add() {
        let mut catalog = empty_catalog();
        catalog.add("Kept", "X", 2000).unwrap();
        catalog.store_mut().set_simulate_write_error(true);

        assert!(matches!(
            catalog.add("Lost", "X", 2000),
            Err(ShelfError::Io(_))
        ));
        assert_eq!(catalog.list_all().len(), 1);
        assert_eq!(catalog.next_id(), Some(2));
    }

    #[test]
    fn failed_save_rolls_back_remove_and_status() {
        let mut catalog = empty_catalog();
        catalog.add("A", "X", 2000).unwrap();
        catalog.add("B", "X", 2000).unwrap();
        catalog.store_mut().set_simulate_write_error(true);

        assert!(catalog.remove(1).is_err());
        let order: Vec<u64> = catalog.list_all().iter().map(|b| b.id).collect();
        assert_eq!(order, vec![1, 2]);

        assert!(catalog.change_status(2, "checked_out").is_err());
        assert_eq!(catalog.get_by_id(2).unwrap().status, BookStatus::Available);
    }
}
