//! `logout` – end the session, best-effort on the server side.

use ebs_core::session::Session;

pub async fn run_logout(session: &mut Session) {
    session.logout().await;
    println!("Signed out.");
}
