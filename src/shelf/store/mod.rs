//! # Storage Layer
//!
//! The [`BookStore`] trait is the seam between the catalog service and
//! persistence. A store owns no in-memory state between calls that the
//! service depends on: every `save` receives the whole collection and every
//! `load` returns the whole collection.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store, a single JSON file holding an array
//!   of books.
//! - [`memory::InMemoryStore`]: For testing service logic without touching
//!   the filesystem.
//!
//! ## Storage Format
//!
//! ```text
//! data/
//! └── books.json    # [{"id": 1, "title": ..., "author": ..., "year": ..., "status": ...}]
//! ```
//!
//! There is no version field; the format is implicitly version 0.
//!
//! ## Malformed Content
//!
//! A file that exists but cannot be parsed loads as an empty catalog. The
//! next successful save overwrites it, so the old content is lost. A warning
//! is logged when this happens.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Whole-collection persistence for books.
pub trait BookStore {
    /// Read every stored book, in stored order.
    fn load(&self) -> Result<Vec<Book>>;

    /// Replace the stored collection with `books`.
    fn save(&mut self, books: &[Book]) -> Result<()>;
}
