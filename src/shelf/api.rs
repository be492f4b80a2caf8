//! # API Facade
//!
//! The API layer is a **thin facade** over the catalog service. It is the
//! single entry point for UI clients.
//!
//! The facade:
//! - **Normalizes inputs**: raw strings from the user (status names, search
//!   fields) are handed to the service, which owns their validation
//! - **Dispatches** to the matching [`Catalog`] operation
//! - **Returns structured types**: every call yields a [`CmdResult`] holding
//!   the books involved and the messages to show the user
//!
//! It holds no business rules and performs no terminal I/O.
//!
//! `ShelfApi<S: BookStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookStatus, SearchField};
use crate::store::BookStore;
use std::path::Path;

/// Severity of a line shown to the user; the renderer picks a color from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    fn at(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::at(MessageLevel::Error, content)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// The main API facade for catalog operations.
pub struct ShelfApi<S: BookStore> {
    catalog: Catalog<S>,
}

impl<S: BookStore> ShelfApi<S> {
    pub fn new(catalog: Catalog<S>) -> Self {
        Self { catalog }
    }

    /// Opens the catalog held by `store`.
    pub fn open(store: S) -> Result<Self> {
        Ok(Self::new(Catalog::open(store)?))
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    pub fn add_book(&mut self, title: &str, author: &str, year: i32) -> Result<CmdResult> {
        let book = self.catalog.add(title, author, year)?;
        let message = CmdMessage::success(format!("Book added: {}", book));
        Ok(CmdResult::default()
            .with_affected_books(vec![book])
            .with_message(message))
    }

    pub fn remove_book(&mut self, id: u64) -> Result<CmdResult> {
        let book = self.catalog.get_by_id(id)?.clone();
        self.catalog.remove(id)?;
        let message = CmdMessage::success(format!("Book removed ({}): {}", id, book.title));
        Ok(CmdResult::default()
            .with_affected_books(vec![book])
            .with_message(message))
    }

    /// Searches by the field named in `field` (`title`, `author` or `year`).
    pub fn search_books(&self, query: &str, field: &str) -> Result<CmdResult> {
        let field: SearchField = field.parse()?;
        self.search_books_by(query, field)
    }

    pub fn search_books_by(&self, query: &str, field: SearchField) -> Result<CmdResult> {
        let found: Vec<Book> = self
            .catalog
            .search(query, field)?
            .into_iter()
            .cloned()
            .collect();

        let mut result = CmdResult::default();
        if found.is_empty() {
            result.add_message(CmdMessage::info(format!(
                "No books found with {} matching '{}'",
                field, query
            )));
        }
        Ok(result.with_listed_books(found))
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        let books = self.catalog.list_all().to_vec();
        let mut result = CmdResult::default();
        if books.is_empty() {
            result.add_message(CmdMessage::info("The catalog is empty"));
        }
        Ok(result.with_listed_books(books))
    }

    pub fn view_book(&self, id: u64) -> Result<CmdResult> {
        let book = self.catalog.get_by_id(id)?.clone();
        Ok(CmdResult::default().with_listed_books(vec![book]))
    }

    /// Sets the status named in `status` (`available` or `checked_out`).
    pub fn change_status(&mut self, id: u64, status: &str) -> Result<CmdResult> {
        let previous = self.catalog.get_by_id(id).ok().map(|b| b.status);
        let book = self.catalog.change_status(id, status)?;

        let message = if previous == Some(book.status) {
            CmdMessage::warning(format!("Book {} is already {}", id, book.status))
        } else {
            CmdMessage::success(format!("Status updated: {}", book))
        };
        Ok(CmdResult::default()
            .with_affected_books(vec![book])
            .with_message(message))
    }

    pub fn checkout_book(&mut self, id: u64) -> Result<CmdResult> {
        self.change_status(id, BookStatus::CheckedOut.as_str())
    }

    pub fn return_book(&mut self, id: u64) -> Result<CmdResult> {
        self.change_status(id, BookStatus::Available.as_str())
    }
}

/// Reads or updates the configuration in `config_dir`.
///
/// Does not need an open catalog, so changing `store-path` never touches the
/// current catalog file.
pub fn run_config(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = ShelfConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = ShelfConfig::load(config_dir)?;
            let value = config
                .get(&key)
                .ok_or_else(|| ShelfError::Config(format!("Unknown config key: {}", key)))?;
            Ok(CmdResult::default().with_message(CmdMessage::info(value)))
        }
        ConfigAction::Set(key, value) => {
            let mut config = ShelfConfig::load(config_dir)?;
            config.set(&key, &value)?;
            config.save(config_dir)?;

            let display_val = config.get(&key).unwrap_or(value);
            let message = CmdMessage::success(format!("{} set to {}", key, display_val));
            Ok(CmdResult::default()
                .with_config(config)
                .with_message(message))
        }
    }
}
