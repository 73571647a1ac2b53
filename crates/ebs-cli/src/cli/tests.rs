use super::shell::{permitted, split_line, ShellCommand, ShellLine, View};
use clap::Parser;
use ebs_core::catalog::SearchField;

fn parse(args: &[&str]) -> ShellCommand {
    ShellLine::try_parse_from(args).unwrap().command
}

#[test]
fn shell_parse_login() {
    match parse(&["login", "a@b.com", "secret"]) {
        ShellCommand::Login { email, password } => {
            assert_eq!(email, "a@b.com");
            assert_eq!(password, "secret");
        }
        _ => panic!("expected Login"),
    }
}

#[test]
fn shell_parse_register() {
    match parse(&["register", "Ada", "ada@b.com", "secret1"]) {
        ShellCommand::Register { name, email, .. } => {
            assert_eq!(name, "Ada");
            assert_eq!(email, "ada@b.com");
        }
        _ => panic!("expected Register"),
    }
}

#[test]
fn shell_parse_admin_login() {
    match parse(&["admin-login", "root@b.com", "pw"]) {
        ShellCommand::AdminLogin { email, .. } => assert_eq!(email, "root@b.com"),
        _ => panic!("expected AdminLogin"),
    }
}

#[test]
fn shell_parse_books() {
    match parse(&["books"]) {
        ShellCommand::Books => {}
        _ => panic!("expected Books"),
    }
}

#[test]
fn shell_parse_search_with_term() {
    match parse(&["search", "category", "fiction"]) {
        ShellCommand::Search { field, term } => {
            assert_eq!(field, SearchField::Category);
            assert_eq!(term.as_deref(), Some("fiction"));
        }
        _ => panic!("expected Search"),
    }
}

#[test]
fn shell_parse_search_without_term() {
    match parse(&["search", "name"]) {
        ShellCommand::Search { field, term } => {
            assert_eq!(field, SearchField::Name);
            assert!(term.is_none());
        }
        _ => panic!("expected Search"),
    }
}

#[test]
fn shell_parse_search_rejects_unknown_field() {
    assert!(ShellLine::try_parse_from(["search", "isbn", "x"]).is_err());
}

#[test]
fn shell_parse_download() {
    match parse(&["download", "12", "Jordan", "9876543210", "j@d.io"]) {
        ShellCommand::Download {
            book_id,
            name,
            contact_number,
            email,
        } => {
            assert_eq!(book_id, 12);
            assert_eq!(name, "Jordan");
            assert_eq!(contact_number, "9876543210");
            assert_eq!(email, "j@d.io");
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn shell_parse_update_with_optional_password() {
    match parse(&["update", "Ada", "ada@b.com", "--password", "newpass1"]) {
        ShellCommand::Update { password, .. } => assert_eq!(password.as_deref(), Some("newpass1")),
        _ => panic!("expected Update"),
    }
    match parse(&["update", "Ada", "ada@b.com"]) {
        ShellCommand::Update { password, .. } => assert!(password.is_none()),
        _ => panic!("expected Update"),
    }
}

#[test]
fn shell_parse_delete_account_confirmation() {
    match parse(&["delete-account"]) {
        ShellCommand::DeleteAccount { yes } => assert!(!yes),
        _ => panic!("expected DeleteAccount"),
    }
    match parse(&["delete-account", "--yes"]) {
        ShellCommand::DeleteAccount { yes } => assert!(yes),
        _ => panic!("expected DeleteAccount"),
    }
}

#[test]
fn shell_parse_create_book() {
    match parse(&[
        "create-book",
        "Physics101",
        "N. Body",
        "--price",
        "12.5",
        "--category",
        "science",
    ]) {
        ShellCommand::CreateBook {
            name,
            author,
            price,
            category,
            subcategory,
            ..
        } => {
            assert_eq!(name, "Physics101");
            assert_eq!(author, "N. Body");
            assert_eq!(price, 12.5);
            assert_eq!(category.as_deref(), Some("science"));
            assert!(subcategory.is_none());
        }
        _ => panic!("expected CreateBook"),
    }
}

#[test]
fn shell_parse_leads_filters() {
    match parse(&["leads", "--book", "3"]) {
        ShellCommand::Leads { book, email } => {
            assert_eq!(book, Some(3));
            assert!(email.is_none());
        }
        _ => panic!("expected Leads"),
    }
}

#[test]
fn shell_parse_export_leads() {
    match parse(&["export-leads", "--start", "2024-01-01", "--end", "2024-02-01"]) {
        ShellCommand::ExportLeads { book, start, end } => {
            assert!(book.is_none());
            assert_eq!(start.as_deref(), Some("2024-01-01"));
            assert_eq!(end.as_deref(), Some("2024-02-01"));
        }
        _ => panic!("expected ExportLeads"),
    }
}

#[test]
fn auth_view_only_offers_auth_commands() {
    let login = parse(&["login", "a@b.com", "pw"]);
    let books = parse(&["books"]);
    let create = parse(&["create-book", "A", "B"]);

    assert!(permitted(View::Auth, &login));
    assert!(!permitted(View::Auth, &books));
    assert!(!permitted(View::Auth, &create));
}

#[test]
fn user_view_offers_store_commands_only() {
    let books = parse(&["books"]);
    let download = parse(&["download", "1", "J", "9876543210", "j@d.io"]);
    let login = parse(&["login", "a@b.com", "pw"]);
    let stats = parse(&["stats"]);

    assert!(permitted(View::User, &books));
    assert!(permitted(View::User, &download));
    assert!(!permitted(View::User, &login));
    assert!(!permitted(View::User, &stats));
}

#[test]
fn admin_view_offers_admin_commands_only() {
    let create = parse(&["create-book", "A", "B"]);
    let leads = parse(&["leads"]);
    let books = parse(&["books"]);

    assert!(permitted(View::Admin, &create));
    assert!(permitted(View::Admin, &leads));
    assert!(!permitted(View::Admin, &books));
}

#[test]
fn whoami_logout_quit_work_everywhere() {
    for view in [View::Auth, View::User, View::Admin] {
        assert!(permitted(view, &parse(&["whoami"])));
        assert!(permitted(view, &parse(&["logout"])));
        assert!(permitted(view, &parse(&["quit"])));
    }
}

#[test]
fn split_line_plain_words() {
    assert_eq!(split_line("books"), vec!["books"]);
    assert_eq!(
        split_line("login a@b.com secret"),
        vec!["login", "a@b.com", "secret"]
    );
}

#[test]
fn split_line_honors_quotes() {
    assert_eq!(
        split_line("search name \"science fiction\""),
        vec!["search", "name", "science fiction"]
    );
    assert_eq!(
        split_line("download 1 'Ada Lovelace' 9876543210 a@b.com"),
        vec!["download", "1", "Ada Lovelace", "9876543210", "a@b.com"]
    );
}

#[test]
fn split_line_empty_and_whitespace() {
    assert!(split_line("").is_empty());
    assert!(split_line("   \t ").is_empty());
}

#[test]
fn split_line_empty_quoted_arg_is_kept() {
    assert_eq!(split_line("search name \"\""), vec!["search", "name", ""]);
}
