//! `info <code>` – download availability for a book code.

use anyhow::Result;
use ebs_core::download;
use ebs_core::session::Session;

pub async fn run_info(session: &Session, code: &str) -> Result<()> {
    let info = download::secure_info(session.api(), code).await?;
    println!("{} (id {})", info.book_name, info.book_id);
    if let Some(author) = &info.author {
        println!("  author: {author}");
    }
    if let Some(code) = &info.book_code {
        println!("  code:   {code}");
    }
    println!(
        "  download: {}",
        if info.download_allowed {
            "available"
        } else {
            "not available"
        }
    );
    Ok(())
}
