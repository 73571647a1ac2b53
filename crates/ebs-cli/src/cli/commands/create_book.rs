//! `create-book` – add a catalog entry (admin dashboard's only operation).

use anyhow::Result;
use ebs_core::admin::{self, NewBook};
use ebs_core::session::Session;

pub async fn run_create_book(session: &Session, book: &NewBook) -> Result<()> {
    let created = admin::create_book(session.api(), book).await?;
    println!("Created book \"{}\" (id {})", created.name, created.id);
    Ok(())
}
