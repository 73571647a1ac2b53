//! Admin-only catalog operations.

use serde::Serialize;

use crate::api::{ApiClient, ApiResult};
use crate::catalog::Book;

/// Payload for creating a catalog entry. Optional fields are omitted from
/// the request body entirely rather than sent as null.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub name: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// POST /api/admins/createBook; returns the created record.
pub async fn create_book(api: &ApiClient, book: &NewBook) -> ApiResult<Book> {
    api.post(&["api", "admins", "createBook"], book).await
}
