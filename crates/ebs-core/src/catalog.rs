//! Catalog model and queries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::api::{ApiClient, ApiResult};

/// A catalog entry. Immutable from the client's perspective; only the
/// admin-side create endpoint adds records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub author: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Criterion for a filtered catalog lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Code,
    Category,
    Subcategory,
}

impl SearchField {
    /// Path segment used by the filter endpoints.
    pub fn segment(self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Code => "code",
            SearchField::Category => "category",
            SearchField::Subcategory => "subcategory",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "code" => Ok(SearchField::Code),
            "category" => Ok(SearchField::Category),
            "subcategory" => Ok(SearchField::Subcategory),
            other => Err(format!(
                "unknown search field '{other}' (expected name, code, category or subcategory)"
            )),
        }
    }
}

/// The filter endpoints return a list for most fields but a single object
/// for unique ones (e.g. code); both normalize to a Vec.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Book>),
    One(Book),
}

impl From<OneOrMany> for Vec<Book> {
    fn from(payload: OneOrMany) -> Self {
        match payload {
            OneOrMany::Many(books) => books,
            OneOrMany::One(book) => vec![book],
        }
    }
}

/// Path segments for a filtered search, or None when the term is blank
/// (blank delegates to the full listing).
pub fn search_segments(field: SearchField, term: &str) -> Option<Vec<String>> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    Some(vec![
        "api".to_string(),
        "books".to_string(),
        field.segment().to_string(),
        term.to_string(),
    ])
}

/// Fetches the full catalog.
pub async fn list_all(api: &ApiClient) -> ApiResult<Vec<Book>> {
    api.get(&["api", "books"]).await
}

/// Filtered lookup. A blank term behaves exactly like [`list_all`]; an empty
/// result set is `Ok(vec![])`, distinct from a transport or HTTP failure.
pub async fn search(api: &ApiClient, field: SearchField, term: &str) -> ApiResult<Vec<Book>> {
    let Some(segments) = search_segments(field, term) else {
        return list_all(api).await;
    };
    let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
    let payload: OneOrMany = api.get(&refs).await?;
    Ok(payload.into())
}
