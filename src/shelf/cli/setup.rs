use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Command-line catalog for a home library", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub store: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a book to the catalog
    #[command(alias = "a")]
    Add {
        /// Title of the book
        title: String,

        /// Author of the book
        author: String,

        /// Publication year
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// Remove a book by ID
    #[command(alias = "rm")]
    Remove {
        /// ID of the book
        id: u64,
    },

    /// Search books by title, author or year
    #[command(alias = "s")]
    Search {
        /// Search query (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Field to search: title, author or year (defaults to the search-field config)
        #[arg(short = 'b', long = "by", value_name = "FIELD")]
        field: Option<String>,
    },

    /// List all books
    #[command(alias = "ls")]
    List,

    /// Show a single book
    #[command(alias = "v")]
    Show {
        /// ID of the book
        id: u64,
    },

    /// Set the status of a book (available or checked_out)
    Status {
        /// ID of the book
        id: u64,

        /// New status: available or checked_out
        status: String,
    },

    /// Mark a book as checked out
    Checkout {
        /// ID of the book
        id: u64,
    },

    /// Mark a book as available again
    Return {
        /// ID of the book
        id: u64,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (store-path, search-field)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}
