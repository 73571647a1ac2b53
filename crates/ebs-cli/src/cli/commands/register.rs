//! `register <name> <email> <password>` – create a user account.

use anyhow::Result;
use ebs_core::session::Session;

pub async fn run_register(
    session: &Session,
    name: &str,
    email: &str,
    password: &str,
) -> Result<()> {
    let profile = session.register(name, email, password).await?;
    println!(
        "Registration successful. You can now sign in as {}.",
        profile.email
    );
    Ok(())
}
