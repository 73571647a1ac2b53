//! `books` and `search` – catalog listing and filtered lookup.

use anyhow::Result;
use ebs_core::catalog::{self, Book, SearchField};
use ebs_core::session::Session;

pub async fn run_books(session: &Session) -> Result<()> {
    let books = catalog::list_all(session.api()).await?;
    print_books(&books);
    Ok(())
}

pub async fn run_search(session: &Session, field: SearchField, term: Option<String>) -> Result<()> {
    let term = term.unwrap_or_default();
    let books = catalog::search(session.api(), field, &term).await?;
    if books.is_empty() {
        println!("No results.");
    } else {
        print_books(&books);
    }
    Ok(())
}

fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("The catalog is empty.");
        return;
    }
    println!(
        "{:<6} {:<32} {:<20} {:<14} {:>8}",
        "ID", "NAME", "AUTHOR", "CATEGORY", "PRICE"
    );
    for book in books {
        println!(
            "{:<6} {:<32} {:<20} {:<14} {:>8.2}",
            book.id,
            book.name,
            book.author,
            book.category.as_deref().unwrap_or("-"),
            book.price.unwrap_or(0.0)
        );
    }
}
