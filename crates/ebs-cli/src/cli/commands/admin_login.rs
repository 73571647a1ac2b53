//! `admin-login <email> <password>` – establish an admin session.

use anyhow::Result;
use ebs_core::session::Session;

pub async fn run_admin_login(session: &mut Session, email: &str, password: &str) -> Result<()> {
    session.admin_login(email, password).await?;
    println!("Admin session established for {email}");
    Ok(())
}
