//! Filename cleanup for saved artifacts.

const NAME_MAX: usize = 255;

/// Makes a server-provided name safe to use as a Linux filename.
///
/// Path separators, NUL, and control characters become `_`; leading and
/// trailing dots and whitespace are trimmed; the result is capped at
/// NAME_MAX bytes and never empty.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let mut cleaned = replaced
        .trim_matches(|c: char| c.is_whitespace() || c == '.')
        .to_string();

    if cleaned.len() > NAME_MAX {
        let mut cut = NAME_MAX;
        while !cleaned.is_char_boundary(cut) {
            cut -= 1;
        }
        cleaned.truncate(cut);
    }

    if cleaned.is_empty() {
        "download".to_string()
    } else {
        cleaned
    }
}

/// Filename for a downloaded e-book: `{name}.pdf`.
pub fn pdf_filename(ebook_name: &str) -> String {
    format!("{}.pdf", sanitize_filename(ebook_name))
}
