//! `export-leads` – save captured leads as a CSV file.

use anyhow::Result;
use ebs_core::config::EbsConfig;
use ebs_core::download;
use ebs_core::session::Session;

pub async fn run_export_leads(
    session: &Session,
    cfg: &EbsConfig,
    book: Option<i64>,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<()> {
    let dest_dir = cfg.download_dir()?;
    let path = download::export_leads_csv(session.api(), book, start, end, &dest_dir).await?;
    println!("Saved {}", path.display());
    Ok(())
}
