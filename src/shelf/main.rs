//! # Shelf CLI
//!
//! The binary is intentionally thin: argument parsing, dispatch and rendering
//! live in `cli/`, and this file only invokes `cli::run()` and maps failures to
//! an exit code. Everything it calls from the `shelf` library is UI agnostic.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::print_error(&e);
        std::process::exit(1);
    }
}
