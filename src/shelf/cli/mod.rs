//! # CLI Behavior
//!
//! This is **one possible UI client** for the catalog. It is the only place
//! that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution (`shelf`)
//!
//! Running `shelf` with no arguments lists the catalog.
//!
//! ## Catalog Location
//!
//! `--store <PATH>` picks the catalog file for one invocation. Without it the
//! `store-path` config key is used (default `data/books.json`, relative to the
//! working directory). The file and its parent directories are created on
//! first use.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. The default filter is `warn`,
//! `--verbose` raises it to `debug`, and `RUST_LOG` overrides both.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Output formatting (book table, detail view, messages)
//! - `setup`: Argument parsing via clap, logging setup

mod commands;
mod render;
pub mod setup;

pub use commands::run;
pub use render::print_error;
