//! `leads [--book ID | --email ADDR]` – list captured download leads.

use anyhow::Result;
use ebs_core::download::{self, LeadRecord};
use ebs_core::session::Session;

pub async fn run_leads(session: &Session, book: Option<i64>, email: Option<&str>) -> Result<()> {
    let api = session.api();
    let records = match (book, email) {
        (Some(book_id), _) => download::leads_by_book(api, book_id).await?,
        (None, Some(email)) => download::leads_by_email(api, email).await?,
        (None, None) => download::leads(api).await?,
    };
    print_leads(&records);
    Ok(())
}

fn print_leads(records: &[LeadRecord]) {
    if records.is_empty() {
        println!("No leads captured.");
        return;
    }
    println!(
        "{:<6} {:<24} {:<12} {:<24} {}",
        "ID", "NAME", "CONTACT", "EMAIL", "BOOK"
    );
    for record in records {
        println!(
            "{:<6} {:<24} {:<12} {:<24} {}",
            record.id,
            record.user_name.as_deref().unwrap_or("-"),
            record.contact_number.as_deref().unwrap_or("-"),
            record.email.as_deref().unwrap_or("-"),
            record.ebook_name.as_deref().unwrap_or("-")
        );
    }
}
