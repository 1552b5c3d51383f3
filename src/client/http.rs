use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use crate::errors::ReportDeskError;
use crate::models::reply::server_error_message;
use super::transport::{ExportedFile, ReportApi, UploadFile};

const MAX_BODY_PREVIEW: usize = 200;

/// `filename="x"`, `filename=x` or the RFC 5987 `filename*=UTF-8''x` form.
static FILENAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"filename(\*)?=(?:UTF-8'')?"?([^";]+)"?"#).unwrap());

/// `ReportApi` over HTTP with `reqwest`.
pub struct HttpReportApi {
    client: Client,
    base_url: String,
}

impl HttpReportApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ReportDeskError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("reportdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReportDeskError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Parse a JSON body whatever the status code; the server reports
    /// failures as `{ "error": ... }` with 4xx/5xx.
    async fn json_body(resp: Response) -> Result<Value, ReportDeskError> {
        let status = resp.status();
        let text = resp.text().await?;
        debug!(status = status.as_u16(), bytes = text.len(), "Response received");
        serde_json::from_str(&text).map_err(|e| {
            ReportDeskError::MalformedResponse(format!(
                "HTTP {} with non-JSON body ({}): {}",
                status.as_u16(),
                e,
                preview(&text)
            ))
        })
    }
}

#[async_trait]
impl ReportApi for HttpReportApi {
    async fn upload(&self, file: &UploadFile) -> Result<Value, ReportDeskError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str("application/pdf")?;
        let mut form = Form::new().part("file", part);
        if let Some(model) = &file.ai_model {
            form = form.text("ai_model", model.clone());
        }

        let resp = self.client
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ReportDeskError::Network(format!("Upload request failed: {}", e)))?;

        Self::json_body(resp).await
    }

    async fn fetch_report(&self, id: i64) -> Result<Value, ReportDeskError> {
        let resp = self.client
            .get(self.url(&format!("/report/{}", id)))
            .send()
            .await
            .map_err(|e| ReportDeskError::Network(format!("Report request failed: {}", e)))?;

        Self::json_body(resp).await
    }

    async fn list_reports(&self) -> Result<Value, ReportDeskError> {
        let resp = self.client
            .get(self.url("/reports"))
            .send()
            .await
            .map_err(|e| ReportDeskError::Network(format!("Report list request failed: {}", e)))?;

        Self::json_body(resp).await
    }

    async fn export(&self, id: i64) -> Result<ExportedFile, ReportDeskError> {
        let resp = self.client
            .get(self.export_url(id))
            .send()
            .await
            .map_err(|e| ReportDeskError::Network(format!("Export request failed: {}", e)))?;

        let status = resp.status();
        let file_name = resp
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(attachment_file_name);
        let bytes = resp.bytes().await?.to_vec();

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|v| server_error_message(&v));
            return Err(match message {
                Some(m) => ReportDeskError::Server(m),
                None => ReportDeskError::Network(format!("Export failed with HTTP {}", status.as_u16())),
            });
        }

        Ok(ExportedFile { file_name, bytes })
    }

    fn export_url(&self, id: i64) -> String {
        self.url(&format!("/export/{}", id))
    }
}

/// Extract the file name from a `Content-Disposition` header value.
pub fn attachment_file_name(header: &str) -> Option<String> {
    let caps = FILENAME_RE.captures(header)?;
    let raw = caps.get(2)?.as_str().trim();
    let decoded = if caps.get(1).is_some() {
        urlencoding::decode(raw).ok()?.into_owned()
    } else {
        raw.to_string()
    };
    // Keep the last path component only
    let name = decoded.rsplit(|c: char| c == '/' || c == '\\').next()?.trim();
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name.to_string())
    }
}

fn preview(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(MAX_BODY_PREVIEW) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_file_name_quoted() {
        assert_eq!(
            attachment_file_name("attachment; filename=\"report_3.md\"").as_deref(),
            Some("report_3.md")
        );
    }

    #[test]
    fn test_attachment_file_name_bare_and_extended() {
        assert_eq!(attachment_file_name("attachment; filename=r.md").as_deref(), Some("r.md"));
        assert_eq!(
            attachment_file_name("attachment; filename*=UTF-8''audit.md").as_deref(),
            Some("audit.md")
        );
    }

    #[test]
    fn test_attachment_file_name_percent_decoded() {
        assert_eq!(
            attachment_file_name("attachment; filename*=UTF-8''Q3%20audit.md").as_deref(),
            Some("Q3 audit.md")
        );
        // Plain form is taken literally
        assert_eq!(
            attachment_file_name("attachment; filename=\"100%25.md\"").as_deref(),
            Some("100%25.md")
        );
        assert_eq!(
            attachment_file_name("attachment; filename*=UTF-8''..%2F..%2Fetc%2Fpasswd").as_deref(),
            Some("passwd")
        );
    }

    #[test]
    fn test_attachment_file_name_strips_directories() {
        assert_eq!(
            attachment_file_name("attachment; filename=\"../../etc/passwd\"").as_deref(),
            Some("passwd")
        );
        assert_eq!(attachment_file_name("attachment; filename=\"..\""), None);
        assert_eq!(attachment_file_name("inline"), None);
    }

    #[test]
    fn test_export_url_joins_base() {
        let api = HttpReportApi::new("http://localhost:5000/", Duration::from_secs(5)).unwrap();
        assert_eq!(api.export_url(12), "http://localhost:5000/export/12");
        assert_eq!(api.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_preview_truncates() {
        let long = "x".repeat(500);
        let p = preview(&long);
        assert_eq!(p.len(), MAX_BODY_PREVIEW + 3);
        assert_eq!(preview(" short "), "short");
    }
}
