//! `download <book-id> <name> <contact> <email>` – lead capture followed by
//! file retrieval and save.

use anyhow::Result;
use ebs_core::config::EbsConfig;
use ebs_core::download::{self, DownloadLead};
use ebs_core::session::Session;

pub async fn run_download(
    session: &Session,
    cfg: &EbsConfig,
    book_id: i64,
    name: String,
    contact_number: String,
    email: String,
) -> Result<()> {
    let lead = DownloadLead {
        user_name: name,
        contact_number,
        email,
        ebook_id: book_id,
    };
    let dest_dir = cfg.download_dir()?;
    let path = download::download_book(session.api(), &lead, &dest_dir).await?;
    println!("Saved {}", path.display());
    Ok(())
}
