//! `delete-account --yes` – delete the signed-in account.

use anyhow::Result;
use ebs_core::session::Session;

pub async fn run_delete_account(session: &mut Session, yes: bool) -> Result<()> {
    if !yes {
        println!("This permanently deletes the account. Re-run with --yes to confirm.");
        return Ok(());
    }
    session.delete_account().await?;
    println!("Account deleted.");
    Ok(())
}
