//! `update <name> <email> [--password ...]` – update the signed-in profile.

use anyhow::Result;
use ebs_core::session::Session;

pub async fn run_update(
    session: &mut Session,
    name: &str,
    email: &str,
    password: Option<&str>,
) -> Result<()> {
    let updated = session.update_profile(name, email, password).await?;
    println!("Profile updated: {} <{}>", updated.name, updated.email);
    Ok(())
}
