use colored::{ColoredString, Colorize};
use shelf::api::{CmdMessage, MessageLevel};
use shelf::config::{ShelfConfig, CONFIG_KEYS};
use shelf::error::ShelfError;
use shelf::model::{Book, BookStatus};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 40;
const AUTHOR_WIDTH: usize = 24;
const ID_WIDTH: usize = 5;
const YEAR_WIDTH: usize = 4;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", styled_message(message));
    }
}

pub fn print_error(err: &ShelfError) {
    let message = CmdMessage::error(format!("Error: {}", err));
    eprintln!("{}", styled_message(&message));
}

fn styled_message(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    }
}

pub(super) fn print_books(books: &[Book]) {
    println!(
        "{}",
        format_row("ID", "Title", "Author", "Year", "Status").bold()
    );
    for book in books {
        let row = format_row(
            &book.id.to_string(),
            &book.title,
            &book.author,
            &book.year.to_string(),
            book.status.as_str(),
        );
        match book.status {
            BookStatus::Available => println!("{}", row),
            BookStatus::CheckedOut => println!("{}", row.yellow()),
        }
    }
}

pub(super) fn print_book_detail(book: &Book) {
    println!("{} {}", format!("#{}", book.id).yellow(), book.title.bold());
    println!("--------------------------------");
    println!("Author: {}", book.author);
    println!("Year:   {}", book.year);
    println!("Status: {}", status_colored(book.status));
}

pub(super) fn print_config(config: &ShelfConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn status_colored(status: BookStatus) -> ColoredString {
    match status {
        BookStatus::Available => status.as_str().green(),
        BookStatus::CheckedOut => status.as_str().yellow(),
    }
}

fn format_row(id: &str, title: &str, author: &str, year: &str, status: &str) -> String {
    format!(
        "{:>id_w$}  {}  {}  {:>year_w$}  {}",
        id,
        pad_to_width(&truncate_to_width(title, TITLE_WIDTH), TITLE_WIDTH),
        pad_to_width(&truncate_to_width(author, AUTHOR_WIDTH), AUTHOR_WIDTH),
        year,
        status,
        id_w = ID_WIDTH,
        year_w = YEAR_WIDTH,
    )
}

/// Cuts `s` to at most `max_width` display columns, ending in `…` when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
