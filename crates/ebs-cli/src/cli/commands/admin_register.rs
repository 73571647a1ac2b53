//! `admin-register <name> <email> <password>` – create an admin account.

use anyhow::Result;
use ebs_core::session::Session;

pub async fn run_admin_register(
    session: &Session,
    name: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    let profile = session.admin_register(name, email, password).await?;
    println!(
        "Admin account created for {}. Sign in with `admin-login`.",
        profile.email
    );
    Ok(())
}
