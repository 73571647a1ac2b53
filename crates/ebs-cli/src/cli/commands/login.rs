//! `login <email> <password>` – establish a user session.

use anyhow::Result;
use ebs_core::session::Session;

pub async fn run_login(session: &mut Session, email: &str, password: &str) -> Result<()> {
    let profile = session.login(email, password).await?;
    println!("Welcome, {}", profile.name);
    Ok(())
}
