//! Pure form validators.
//!
//! Each form validator returns a field-to-message map; an empty map means
//! the form is valid. Callers must not touch the network while the map is
//! non-empty.

use std::collections::BTreeMap;

/// Field name mapped to its validation message. Empty = valid.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Loose email shape: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    let Some(at) = email.find('@') else {
        return false;
    };
    if at == 0 {
        return false;
    }
    let domain = &email[at + 1..];
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Exactly 10 ASCII decimal digits.
pub fn is_valid_contact_number(number: &str) -> bool {
    number.len() == 10 && number.bytes().all(|b| b.is_ascii_digit())
}

pub fn login_form(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !is_valid_email(email) {
        errors.insert("email", "Enter a valid email");
    }
    if password.is_empty() {
        errors.insert("password", "Password is required");
    }
    errors
}

pub fn register_form(name: &str, email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if name.trim().is_empty() {
        errors.insert("name", "Name is required");
    }
    if !is_valid_email(email) {
        errors.insert("email", "Enter a valid email");
    }
    if password.chars().count() < 6 {
        errors.insert("password", "Password must be at least 6 characters");
    }
    errors
}

/// Contact form guarding the download flow.
pub fn lead_form(name: &str, contact_number: &str, email: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if name.trim().is_empty() {
        errors.insert("name", "Name is required");
    }
    if !is_valid_contact_number(contact_number) {
        errors.insert("contact_number", "Enter a valid 10-digit contact number");
    }
    if !is_valid_email(email) {
        errors.insert("email", "Enter a valid email address");
    }
    errors
}

/// One line per field, for inline display.
pub fn format_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("\n")
}
