//! `whoami` – show the current identity.

use ebs_core::session::{Identity, Session};

pub fn run_whoami(session: &Session) {
    match session.identity() {
        None => println!("Not signed in."),
        Some(Identity::User(user)) => {
            println!("Signed in as {} <{}> (id {})", user.name, user.email, user.id);
        }
        Some(Identity::Admin(admin)) => println!("Signed in as admin {}", admin.email),
    }
}
