//! # Shelf Architecture
//!
//! Shelf is a small book catalog: add, remove, search, list and check books
//! in and out, with the whole collection persisted to one JSON file.
//!
//! The binary is one client of the library; nothing below the CLI knows about
//! terminals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, returns CmdResult with user messages        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Service (catalog.rs)                               │
//! │  - Owns the in-memory collection and id assignment          │
//! │  - Validates input, persists after every mutation           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Execution Model
//!
//! Everything is synchronous and single-threaded. A [`store::fs::FileStore`]
//! assumes it is the only writer of its file for the life of the process.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`catalog`]: The catalog service
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Book`, `BookStatus`, `SearchField`)
//! - [`validate`]: Field checks applied before a book is added
//! - [`config`]: Configuration management
//! - [`init`]: Builds the production context from config and paths
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod validate;
