//! Lead-capture download flow and the lead/stats queries built on it.
//!
//! A download is a strict two-step sequence: the contact form is validated
//! and posted to the capture endpoint, and only a successful capture yields
//! the identifier used to fetch the file. The fetched bytes go through a
//! `.part` temp file and an atomic rename, and the final name derives from
//! the capture receipt's `ebookName`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::sanitize::pdf_filename;
use crate::validate::{self, FieldErrors};

/// Temporary file suffix used before the atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Contact details submitted once per download attempt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadLead {
    pub user_name: String,
    pub contact_number: String,
    pub email: String,
    pub ebook_id: i64,
}

/// Server acknowledgement of a captured lead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureReceipt {
    /// Identifier used to fetch the file.
    pub id: i64,
    /// Name used for the saved artifact.
    pub ebook_name: String,
}

/// A captured lead as listed by the admin-facing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: i64,
    #[serde(default)]
    pub ebook_id: Option<i64>,
    #[serde(default)]
    pub ebook_name: Option<String>,
    #[serde(default)]
    pub ebook_code: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub download_time: Option<String>,
}

/// Aggregate download counters for the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DownloadStats {
    pub total_downloads: u64,
    pub total_books: u64,
    pub unique_users: u64,
    pub downloads_today: u64,
    pub downloads_this_week: u64,
    pub downloads_this_month: u64,
}

/// Availability info for a book code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadInfo {
    pub book_id: i64,
    pub book_name: String,
    #[serde(default)]
    pub book_code: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub download_allowed: bool,
}

/// Failure modes of the download flow.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// The contact form failed validation; the server was not consulted.
    #[error("invalid download form\n{}", validate::format_errors(.0))]
    Invalid(FieldErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to save file: {0}")]
    Io(#[from] std::io::Error),
}

/// Path segments of the file endpoint for a capture receipt id.
pub fn file_segments(download_id: i64) -> [String; 4] {
    [
        "api".to_string(),
        "downloads".to_string(),
        "file".to_string(),
        download_id.to_string(),
    ]
}

/// Registers a download lead; the receipt's id unlocks the file fetch.
pub async fn capture(api: &ApiClient, lead: &DownloadLead) -> ApiResult<CaptureReceipt> {
    api.post(&["api", "downloads", "capture"], lead).await
}

/// Fetches the raw file bytes for a captured download.
pub async fn fetch_file(api: &ApiClient, download_id: i64) -> ApiResult<Vec<u8>> {
    let segments = file_segments(download_id);
    let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
    api.get_bytes(&refs).await
}

/// Full flow: validate the lead form, capture, fetch, save as
/// `{ebookName}.pdf` under `dest_dir`. Returns the saved path.
pub async fn download_book(
    api: &ApiClient,
    lead: &DownloadLead,
    dest_dir: &Path,
) -> Result<PathBuf, DownloadError> {
    let errors = validate::lead_form(&lead.user_name, &lead.contact_number, &lead.email);
    if !errors.is_empty() {
        return Err(DownloadError::Invalid(errors));
    }

    let receipt = capture(api, lead).await?;
    tracing::info!(download_id = receipt.id, ebook = %receipt.ebook_name, "lead captured");

    let bytes = fetch_file(api, receipt.id).await?;
    let path = save_artifact(dest_dir, &pdf_filename(&receipt.ebook_name), &bytes).await?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "download saved");
    Ok(path)
}

/// Writes bytes to `{filename}.part` and renames into place.
pub async fn save_artifact(
    dest_dir: &Path,
    filename: &str,
    bytes: &[u8],
) -> std::io::Result<PathBuf> {
    let final_path = dest_dir.join(filename);
    let temp_path = dest_dir.join(format!("{filename}{TEMP_SUFFIX}"));
    tokio::fs::write(&temp_path, bytes).await?;
    tokio::fs::rename(&temp_path, &final_path).await?;
    Ok(final_path)
}

/// GET /api/downloads/stats.
pub async fn stats(api: &ApiClient) -> ApiResult<DownloadStats> {
    api.get(&["api", "downloads", "stats"]).await
}

/// All captured leads.
pub async fn leads(api: &ApiClient) -> ApiResult<Vec<LeadRecord>> {
    api.get(&["api", "downloads", "leads"]).await
}

/// Leads for one book.
pub async fn leads_by_book(api: &ApiClient, book_id: i64) -> ApiResult<Vec<LeadRecord>> {
    let id = book_id.to_string();
    api.get(&["api", "downloads", "leads", "book", id.as_str()]).await
}

/// Leads for one requester email.
pub async fn leads_by_email(api: &ApiClient, email: &str) -> ApiResult<Vec<LeadRecord>> {
    api.get(&["api", "downloads", "leads", "email", email]).await
}

/// Availability info looked up by book code.
pub async fn secure_info(api: &ApiClient, book_code: &str) -> ApiResult<DownloadInfo> {
    api.get(&["api", "downloads", "secure", book_code]).await
}

/// Exports captured leads as CSV, saved as `leads_export.csv` in `dest_dir`.
/// All filters are optional; dates are passed through verbatim.
pub async fn export_leads_csv(
    api: &ApiClient,
    book_id: Option<i64>,
    start_date: Option<&str>,
    end_date: Option<&str>,
    dest_dir: &Path,
) -> Result<PathBuf, DownloadError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(id) = book_id {
        query.push(("bookId", id.to_string()));
    }
    if let Some(start) = start_date {
        query.push(("startDate", start.to_string()));
    }
    if let Some(end) = end_date {
        query.push(("endDate", end.to_string()));
    }
    let bytes = api
        .get_bytes_with_query(&["api", "downloads", "leads", "export", "csv"], &query)
        .await?;
    Ok(save_artifact(dest_dir, "leads_export.csv", &bytes).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lead_serializes_camel_case() {
        let lead = DownloadLead {
            user_name: "Jordan".to_string(),
            contact_number: "9876543210".to_string(),
            email: "j@d.io".to_string(),
            ebook_id: 12,
        };
        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(
            value,
            json!({
                "userName": "Jordan",
                "contactNumber": "9876543210",
                "email": "j@d.io",
                "ebookId": 12
            })
        );
    }

    #[test]
    fn receipt_decodes_camel_case() {
        let receipt: CaptureReceipt =
            serde_json::from_value(json!({ "id": 41, "ebookName": "Physics101" })).unwrap();
        assert_eq!(receipt.id, 41);
        assert_eq!(receipt.ebook_name, "Physics101");
    }

    #[test]
    fn file_segments_use_receipt_id() {
        assert_eq!(file_segments(41), ["api", "downloads", "file", "41"]);
    }

    #[test]
    fn saved_name_derives_from_ebook_name() {
        let receipt: CaptureReceipt =
            serde_json::from_value(json!({ "id": 1, "ebookName": "Physics101" })).unwrap();
        assert_eq!(pdf_filename(&receipt.ebook_name), "Physics101.pdf");
    }

    #[test]
    fn invalid_lead_never_reaches_capture() {
        let errors = validate::lead_form("", "123", "bad");
        let err = DownloadError::Invalid(errors);
        let text = err.to_string();
        assert!(text.contains("invalid download form"));
        assert!(text.contains("contact_number"));
    }

    #[test]
    fn stats_tolerate_missing_counters() {
        let stats: DownloadStats =
            serde_json::from_value(json!({ "totalDownloads": 5 })).unwrap();
        assert_eq!(stats.total_downloads, 5);
        assert_eq!(stats.downloads_today, 0);
    }

    #[test]
    fn lead_record_decodes_sparse_rows() {
        let record: LeadRecord = serde_json::from_value(json!({
            "id": 9,
            "ebookName": "Dune",
            "email": "j@d.io"
        }))
        .unwrap();
        assert_eq!(record.id, 9);
        assert_eq!(record.ebook_name.as_deref(), Some("Dune"));
        assert!(record.contact_number.is_none());
    }

    #[tokio::test]
    async fn save_artifact_renames_into_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_artifact(dir.path(), "Physics101.pdf", b"%PDF-1.4")
            .await
            .unwrap();
        assert_eq!(path, dir.path().join("Physics101.pdf"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"%PDF-1.4");
        assert!(!dir.path().join("Physics101.pdf.part").exists());
    }

    #[tokio::test]
    async fn save_artifact_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        save_artifact(dir.path(), "a.pdf", b"old").await.unwrap();
        let path = save_artifact(dir.path(), "a.pdf", b"new").await.unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"new");
    }
}
