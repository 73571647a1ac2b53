//! Shell command handlers. Each command is in its own file for clarity.

mod admin_login;
mod admin_register;
mod books;
mod create_book;
mod delete_account;
mod download;
mod export_leads;
mod info;
mod leads;
mod login;
mod logout;
mod register;
mod stats;
mod update;
mod whoami;

pub use admin_login::run_admin_login;
pub use admin_register::run_admin_register;
pub use books::{run_books, run_search};
pub use create_book::run_create_book;
pub use delete_account::run_delete_account;
pub use download::run_download;
pub use export_leads::run_export_leads;
pub use info::run_info;
pub use leads::run_leads;
pub use login::run_login;
pub use logout::run_logout;
pub use register::run_register;
pub use stats::run_stats;
pub use update::run_update;
pub use whoami::run_whoami;
