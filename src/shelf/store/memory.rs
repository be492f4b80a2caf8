use super::BookStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::io;

/// In-memory storage for testing.
///
/// Holds whatever was last saved. Write failures can be simulated to exercise
/// the service's error paths.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    simulate_write_error: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books,
            ..Self::default()
        }
    }

    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// The collection as last persisted.
    pub fn stored(&self) -> &[Book] {
        &self.books
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        if self.simulate_write_error {
            return Err(ShelfError::Io(io::Error::other("simulated write error")));
        }
        self.books = books.to_vec();
        self.saves += 1;
        Ok(())
    }
}
