use async_trait::async_trait;
use serde_json::Value;
use crate::errors::ReportDeskError;

/// A file queued for upload, read into memory.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Analysis model requested from the server; the server picks its own
    /// default when absent.
    pub ai_model: Option<String>,
}

/// A downloaded export.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    /// Name suggested by the server's `Content-Disposition` header.
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// The four requests the report server answers. JSON bodies are returned
/// undecoded; validation happens in `models`.
#[async_trait]
pub trait ReportApi: Send + Sync {
    /// `POST /upload`
    async fn upload(&self, file: &UploadFile) -> Result<Value, ReportDeskError>;

    /// `GET /report/{id}`
    async fn fetch_report(&self, id: i64) -> Result<Value, ReportDeskError>;

    /// `GET /reports`
    async fn list_reports(&self) -> Result<Value, ReportDeskError>;

    /// `GET /export/{id}`
    async fn export(&self, id: i64) -> Result<ExportedFile, ReportDeskError>;

    /// Absolute URL of the export for `id`, for pages that link to it.
    fn export_url(&self, id: i64) -> String;
}
