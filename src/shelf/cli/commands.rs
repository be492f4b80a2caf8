//! # CLI Dispatch
//!
//! - `run()`: parses arguments, sets up logging, builds the context, dispatches
//! - `handle_*()`: per-command handlers that call the API and print results

use super::render::{print_book_detail, print_books, print_config, print_messages};
use super::setup::{init_logging, Cli, Commands};
use clap::Parser;
use shelf::api::{run_config, ConfigAction};
use shelf::error::Result;
use shelf::init::{config_dir, initialize, ShelfContext};
use std::path::{Path, PathBuf};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Config never opens the catalog, so a bad store path can still be fixed
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&cwd, key.clone(), value.clone());
    }

    let mut ctx = initialize(&cwd, cli.store.clone())?;
    tracing::debug!(path = %ctx.store_path.display(), "using catalog");

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
        }) => handle_add(&mut ctx, &title, &author, year),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::Search { query, field }) => handle_search(&ctx, query, field),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Status { id, status }) => handle_status(&mut ctx, id, &status),
        Some(Commands::Checkout { id }) => handle_checkout(&mut ctx, id),
        Some(Commands::Return { id }) => handle_return(&mut ctx, id),
        Some(Commands::Config { key, value }) => handle_config(&cwd, key, value),
    }
}

fn handle_add(ctx: &mut ShelfContext, title: &str, author: &str, year: i32) -> Result<()> {
    let result = ctx.api.add_book(title, author, year)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut ShelfContext, id: u64) -> Result<()> {
    let result = ctx.api.remove_book(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &ShelfContext, query: Vec<String>, field: Option<String>) -> Result<()> {
    let query = query.join(" ");
    let result = match field {
        Some(field) => ctx.api.search_books(&query, &field)?,
        None => ctx.api.search_books_by(&query, ctx.config.search_field)?,
    };
    if !result.listed_books.is_empty() {
        print_books(&result.listed_books);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &ShelfContext) -> Result<()> {
    let result = ctx.api.list_books()?;
    if !result.listed_books.is_empty() {
        print_books(&result.listed_books);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &ShelfContext, id: u64) -> Result<()> {
    let result = ctx.api.view_book(id)?;
    for book in &result.listed_books {
        print_book_detail(book);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &mut ShelfContext, id: u64, status: &str) -> Result<()> {
    let result = ctx.api.change_status(id, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_checkout(ctx: &mut ShelfContext, id: u64) -> Result<()> {
    let result = ctx.api.checkout_book(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_return(ctx: &mut ShelfContext, id: u64) -> Result<()> {
    let result = ctx.api.return_book(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(cwd: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = run_config(&config_dir(cwd), action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
