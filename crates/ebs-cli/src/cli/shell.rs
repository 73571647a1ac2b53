//! Interactive shell: the command surface and session-state routing.
//!
//! The shell is the view router: which commands are available depends only
//! on the current session identity. One process is one "visit" — the cookie
//! jar lives exactly as long as the shell.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ebs_core::catalog::SearchField;
use ebs_core::config::EbsConfig;
use ebs_core::session::{Identity, Session};
use std::io::{self, BufRead, Write};

use super::commands;

/// One line of shell input.
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// Sign in with an existing account.
    Login { email: String, password: String },

    /// Create a new account (sign in afterwards with `login`).
    Register {
        name: String,
        email: String,
        password: String,
    },

    /// Sign in to the admin panel.
    AdminLogin { email: String, password: String },

    /// Create a new admin account.
    AdminRegister {
        name: String,
        email: String,
        password: String,
    },

    /// List the full catalog.
    Books,

    /// Search the catalog by one field.
    Search {
        /// Field to search by: name, code, category or subcategory.
        field: SearchField,
        /// Search term; omitted or blank lists the full catalog.
        term: Option<String>,
    },

    /// Download a book after providing contact details.
    Download {
        book_id: i64,
        /// Requester full name.
        name: String,
        /// 10-digit contact number.
        contact_number: String,
        /// Requester email address.
        email: String,
    },

    /// Show download availability for a book code.
    Info { code: String },

    /// Update the signed-in profile.
    Update {
        name: String,
        email: String,
        /// New password; omit to keep the current one.
        #[arg(long)]
        password: Option<String>,
    },

    /// Delete the signed-in account.
    DeleteAccount {
        /// Required confirmation; deletion is irreversible.
        #[arg(long)]
        yes: bool,
    },

    /// Show who is signed in.
    Whoami,

    /// Create a catalog entry.
    CreateBook {
        name: String,
        author: String,
        #[arg(long)]
        code: Option<String>,
        #[arg(long, default_value_t = 0.0)]
        price: f64,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        subcategory: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// List captured download leads.
    Leads {
        /// Only leads for this book id.
        #[arg(long)]
        book: Option<i64>,
        /// Only leads for this requester email.
        #[arg(long)]
        email: Option<String>,
    },

    /// Show download statistics.
    Stats,

    /// Export captured leads as CSV.
    ExportLeads {
        #[arg(long)]
        book: Option<i64>,
        /// Start date filter, passed through to the server.
        #[arg(long)]
        start: Option<String>,
        /// End date filter, passed through to the server.
        #[arg(long)]
        end: Option<String>,
    },

    /// End the session and return to the sign-in view.
    Logout,

    /// Leave the shell.
    Quit,
}

/// Which command set is visible, decided purely by session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Auth,
    User,
    Admin,
}

impl View {
    pub fn of(session: &Session) -> View {
        match session.identity() {
            None => View::Auth,
            Some(Identity::User(_)) => View::User,
            Some(Identity::Admin(_)) => View::Admin,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Auth => "sign-in",
            View::User => "store",
            View::Admin => "admin",
        }
    }
}

/// Routing table: true if the command belongs to the given view.
pub fn permitted(view: View, command: &ShellCommand) -> bool {
    use ShellCommand::*;
    match command {
        Whoami | Logout | Quit => true,
        Login { .. } | Register { .. } | AdminLogin { .. } | AdminRegister { .. } => {
            view == View::Auth
        }
        Books | Search { .. } | Download { .. } | Info { .. } | Update { .. }
        | DeleteAccount { .. } => view == View::User,
        CreateBook { .. } | Leads { .. } | Stats | ExportLeads { .. } => view == View::Admin,
    }
}

/// Splits a shell line into arguments, honoring single and double quotes.
pub fn split_line(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut pending = false;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                pending = true;
            }
            None if c.is_whitespace() => {
                if pending {
                    args.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            None => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        args.push(current);
    }
    args
}

enum ShellFlow {
    Continue,
    Quit,
}

fn prompt(session: &Session) -> String {
    match session.identity() {
        None => "ebs (guest)> ".to_string(),
        Some(Identity::User(user)) => format!("ebs ({})> ", user.name),
        Some(Identity::Admin(admin)) => format!("ebs (admin {})> ", admin.email),
    }
}

pub async fn run_shell(session: &mut Session, cfg: &EbsConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", prompt(session));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let args = split_line(&line?);
        if args.is_empty() {
            continue;
        }

        let parsed = match ShellLine::try_parse_from(&args) {
            Ok(parsed) => parsed,
            Err(err) => {
                // clap's own output covers help, version, and usage errors.
                let _ = err.print();
                continue;
            }
        };

        let view = View::of(session);
        if !permitted(view, &parsed.command) {
            println!("`{}` is not available in the {} view", args[0], view.label());
            continue;
        }

        match dispatch(session, cfg, parsed.command).await {
            Ok(ShellFlow::Continue) => {}
            Ok(ShellFlow::Quit) => break,
            Err(err) => println!("ebs: {err:#}"),
        }
    }

    Ok(())
}

async fn dispatch(
    session: &mut Session,
    cfg: &EbsConfig,
    command: ShellCommand,
) -> Result<ShellFlow> {
    use ShellCommand::*;
    match command {
        Login { email, password } => commands::run_login(session, &email, &password).await?,
        Register {
            name,
            email,
            password,
        } => commands::run_register(session, &name, &email, &password).await?,
        AdminLogin { email, password } => {
            commands::run_admin_login(session, &email, &password).await?
        }
        AdminRegister {
            name,
            email,
            password,
        } => commands::run_admin_register(session, &name, &email, &password).await?,
        Books => commands::run_books(session).await?,
        Search { field, term } => commands::run_search(session, field, term).await?,
        Download {
            book_id,
            name,
            contact_number,
            email,
        } => commands::run_download(session, cfg, book_id, name, contact_number, email).await?,
        Info { code } => commands::run_info(session, &code).await?,
        Update {
            name,
            email,
            password,
        } => commands::run_update(session, &name, &email, password.as_deref()).await?,
        DeleteAccount { yes } => commands::run_delete_account(session, yes).await?,
        Whoami => commands::run_whoami(session),
        CreateBook {
            name,
            author,
            code,
            price,
            category,
            subcategory,
            description,
        } => {
            let book = ebs_core::admin::NewBook {
                name,
                author,
                code,
                price,
                category,
                subcategory,
                description,
            };
            commands::run_create_book(session, &book).await?
        }
        Leads { book, email } => commands::run_leads(session, book, email.as_deref()).await?,
        Stats => commands::run_stats(session).await?,
        ExportLeads { book, start, end } => {
            commands::run_export_leads(session, cfg, book, start.as_deref(), end.as_deref()).await?
        }
        Logout => commands::run_logout(session).await,
        Quit => return Ok(ShellFlow::Quit),
    }
    Ok(ShellFlow::Continue)
}
