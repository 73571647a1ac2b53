//! Credentialed HTTP wrapper over the store API.
//!
//! One reqwest client with a cookie store carries the server session across
//! requests. Responses are read as JSON when the `Content-Type` says so and
//! as text otherwise; non-2xx statuses become [`ApiError::Status`] with a
//! human-readable message extracted from the body. No retries, no caching.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::config::EbsConfig;

/// Failure modes of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured base URL could not be parsed or extended.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// The server answered with a non-2xx status; `message` is already
    /// extracted from the body and suitable for direct display.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Connection, TLS, or timeout failure before a status was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The 2xx body did not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Response body, already split by content type.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    fn decode<T: DeserializeOwned>(self) -> ApiResult<T> {
        match self {
            Payload::Json(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
            }
            Payload::Text(text) => {
                serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
            }
        }
    }

    fn into_text(self) -> String {
        match self {
            Payload::Json(Value::String(s)) => s,
            Payload::Json(Value::Null) => String::new(),
            Payload::Json(other) => other.to_string(),
            Payload::Text(text) => text,
        }
    }
}

async fn read_payload(res: Response) -> Payload {
    let is_json = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("json"))
        .unwrap_or(false);
    if is_json {
        match res.json::<Value>().await {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Json(Value::Null),
        }
    } else {
        Payload::Text(res.text().await.unwrap_or_default())
    }
}

/// Extracts a displayable message from an error body.
///
/// Preference order: array of messages joined by newlines, a plain string
/// body, an object's `message` field, then a generic `HTTP {status}`.
fn error_message(status: u16, payload: &Payload) -> String {
    let fallback = || format!("HTTP {status}");
    match payload {
        Payload::Json(Value::Array(items)) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            if parts.is_empty() {
                fallback()
            } else {
                parts.join("\n")
            }
        }
        Payload::Json(Value::String(s)) if !s.is_empty() => s.clone(),
        Payload::Json(Value::Object(map)) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(fallback),
        Payload::Json(_) => fallback(),
        Payload::Text(text) if !text.trim().is_empty() => text.trim().to_string(),
        Payload::Text(_) => fallback(),
    }
}

/// Client bound to one base URL, sharing one cookie jar for the session.
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(cfg: &EbsConfig) -> ApiResult<Self> {
        let base = Url::parse(&cfg.base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {e}", cfg.base_url)))?;
        let mut builder = Client::builder().cookie_store(true);
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;
        Ok(Self { http, base })
    }

    /// Joins path segments onto the base URL, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base.clone();
        {
            let mut parts = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidBaseUrl(self.base.to_string()))?;
            parts.pop_if_empty();
            for segment in segments {
                parts.push(segment);
            }
        }
        Ok(url)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> ApiResult<Payload> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%method, %url, "sending API request");
        let mut req = self.http.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let res = req.send().await?;
        let status = res.status();
        let payload = read_payload(res).await;
        if status.is_success() {
            Ok(payload)
        } else {
            Err(status_error(status, &payload))
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ApiResult<T> {
        self.send::<()>(Method::GET, segments, None).await?.decode()
    }

    pub async fn get_text(&self, segments: &[&str]) -> ApiResult<String> {
        Ok(self.send::<()>(Method::GET, segments, None).await?.into_text())
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> ApiResult<T> {
        self.send(Method::POST, segments, Some(body)).await?.decode()
    }

    pub async fn post_text<B: Serialize>(&self, segments: &[&str], body: &B) -> ApiResult<String> {
        Ok(self.send(Method::POST, segments, Some(body)).await?.into_text())
    }

    /// POST with no request body (e.g. logout).
    pub async fn post_empty_text(&self, segments: &[&str]) -> ApiResult<String> {
        Ok(self.send::<()>(Method::POST, segments, None).await?.into_text())
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> ApiResult<T> {
        self.send(Method::PUT, segments, Some(body)).await?.decode()
    }

    pub async fn delete_text(&self, segments: &[&str]) -> ApiResult<String> {
        Ok(self
            .send::<()>(Method::DELETE, segments, None)
            .await?
            .into_text())
    }

    /// GET returning the raw body bytes (file payloads).
    pub async fn get_bytes(&self, segments: &[&str]) -> ApiResult<Vec<u8>> {
        let url = self.endpoint(segments)?;
        self.fetch_bytes(url).await
    }

    /// GET returning raw bytes, with query parameters appended.
    pub async fn get_bytes_with_query(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> ApiResult<Vec<u8>> {
        let mut url = self.endpoint(segments)?;
        for (key, value) in query {
            url.query_pairs_mut().append_pair(key, value);
        }
        self.fetch_bytes(url).await
    }

    async fn fetch_bytes(&self, url: Url) -> ApiResult<Vec<u8>> {
        tracing::debug!(%url, "fetching binary payload");
        let res = self.http.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            let payload = read_payload(res).await;
            return Err(status_error(status, &payload));
        }
        Ok(res.bytes().await?.to_vec())
    }
}

fn status_error(status: StatusCode, payload: &Payload) -> ApiError {
    let status = status.as_u16();
    ApiError::Status {
        status,
        message: error_message(status, payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base_url: &str) -> ApiClient {
        let cfg = EbsConfig {
            base_url: base_url.to_string(),
            ..EbsConfig::default()
        };
        ApiClient::new(&cfg).unwrap()
    }

    #[test]
    fn endpoint_joins_segments() {
        let api = client("http://localhost:8080");
        let url = api.endpoint(&["api", "books", "category", "fiction"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/books/category/fiction");
    }

    #[test]
    fn endpoint_handles_trailing_slash_base() {
        let api = client("http://localhost:8080/");
        let url = api.endpoint(&["api", "books"]).unwrap();
        assert_eq!(url.path(), "/api/books");
    }

    #[test]
    fn endpoint_percent_encodes_segments() {
        let api = client("http://localhost:8080");
        let url = api.endpoint(&["api", "books", "name", "science fiction"]).unwrap();
        assert_eq!(url.path(), "/api/books/name/science%20fiction");
    }

    #[test]
    fn invalid_base_url_rejected() {
        let cfg = EbsConfig {
            base_url: "not a url".to_string(),
            ..EbsConfig::default()
        };
        assert!(matches!(ApiClient::new(&cfg), Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn error_message_joins_array() {
        let payload = Payload::Json(json!(["Name is required", "Email is invalid"]));
        assert_eq!(
            error_message(400, &payload),
            "Name is required\nEmail is invalid"
        );
    }

    #[test]
    fn error_message_plain_string() {
        let payload = Payload::Json(json!("Invalid email or password"));
        assert_eq!(error_message(401, &payload), "Invalid email or password");
        let payload = Payload::Text("Please log in".to_string());
        assert_eq!(error_message(401, &payload), "Please log in");
    }

    #[test]
    fn error_message_object_field() {
        let payload = Payload::Json(json!({ "message": "Book not found" }));
        assert_eq!(error_message(404, &payload), "Book not found");
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(error_message(500, &Payload::Json(Value::Null)), "HTTP 500");
        assert_eq!(error_message(502, &Payload::Text(String::new())), "HTTP 502");
        assert_eq!(
            error_message(400, &Payload::Json(json!({ "detail": "nope" }))),
            "HTTP 400"
        );
    }

    #[test]
    fn payload_decodes_json_object() {
        #[derive(serde::Deserialize)]
        struct Probe {
            id: i64,
        }
        let probe: Probe = Payload::Json(json!({ "id": 3 })).decode().unwrap();
        assert_eq!(probe.id, 3);
    }

    #[test]
    fn payload_into_text_unwraps_json_string() {
        let payload = Payload::Json(json!("Welcome, A"));
        assert_eq!(payload.into_text(), "Welcome, A");
        let payload = Payload::Text("Logged out successfully".to_string());
        assert_eq!(payload.into_text(), "Logged out successfully");
    }
}
