//! `stats` – download counters for the admin dashboard.

use anyhow::Result;
use ebs_core::download;
use ebs_core::session::Session;

pub async fn run_stats(session: &Session) -> Result<()> {
    let stats = download::stats(session.api()).await?;
    println!("total downloads:  {}", stats.total_downloads);
    println!("total books:      {}", stats.total_books);
    println!("unique users:     {}", stats.unique_users);
    println!("today:            {}", stats.downloads_today);
    println!("this week:        {}", stats.downloads_this_week);
    println!("this month:       {}", stats.downloads_this_month);
    Ok(())
}
