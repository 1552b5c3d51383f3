use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::{error, info, warn};

use crate::errors::ReportDeskError;
use crate::models::{decode_report_list, Report, UploadReply};
use crate::render::{ListEntry, ReportSheet};
use crate::view::Page;
use super::transport::{ReportApi, UploadFile};

pub const UPLOAD_FAILED_MESSAGE: &str = "An error occurred during upload and analysis.";
pub const INVALID_REPORT_MESSAGE: &str = "Error: Invalid report data";
pub const NO_FILE_MESSAGE: &str = "Please choose a PDF file to upload.";

/// Drives the upload, load, render and list cycle against one page.
///
/// Every failing operation has already been shown on the page and logged
/// when it returns `Err`; callers only use the error to decide what to do
/// next (e.g. the CLI exit code).
pub struct ReportClient<A, P> {
    api: A,
    page: P,
    ai_model: Option<String>,
    listed: Vec<ListEntry>,
    current: Option<i64>,
}

impl<A: ReportApi, P: Page> ReportClient<A, P> {
    pub fn new(api: A, page: P) -> Self {
        Self {
            api,
            page,
            ai_model: None,
            listed: Vec::new(),
            current: None,
        }
    }

    pub fn with_ai_model(mut self, ai_model: Option<String>) -> Self {
        self.set_ai_model(ai_model);
        self
    }

    /// Model requested with later uploads. Blank names are ignored.
    pub fn set_ai_model(&mut self, ai_model: Option<String>) {
        self.ai_model = ai_model.filter(|m| !m.trim().is_empty());
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn into_page(self) -> P {
        self.page
    }

    /// Id of the report currently shown with an export control.
    pub fn current_report(&self) -> Option<i64> {
        self.current
    }

    /// Upload `file` for analysis and show the resulting report.
    ///
    /// Returns the new report id. Nothing is sent when `file` is `None`.
    pub async fn submit_upload(&mut self, file: Option<&Path>) -> Result<i64, ReportDeskError> {
        let Some(path) = file else {
            return Err(self.surface(ReportDeskError::Input(NO_FILE_MESSAGE.into()), "upload"));
        };

        let upload = match read_upload(path, self.ai_model.clone()).await {
            Ok(upload) => upload,
            Err(e) => return Err(self.surface(e, "upload")),
        };

        info!(file = %upload.file_name, bytes = upload.bytes.len(), "Uploading report for analysis");
        let indicator = self.page.has_loading_indicator();
        if indicator {
            self.page.set_loading(true);
        }
        let reply = self.api.upload(&upload).await;
        if indicator {
            self.page.set_loading(false);
        }

        let body = match reply {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, file = %upload.file_name, "Upload failed");
                self.page.notify(UPLOAD_FAILED_MESSAGE);
                return Err(e);
            }
        };

        match UploadReply::from_json(&body) {
            UploadReply::Created(id) => {
                info!(report_id = id, "Upload analyzed");
                self.load_report(id).await?;
                Ok(id)
            }
            UploadReply::Rejected(message) => {
                Err(self.surface(ReportDeskError::Server(message), "upload"))
            }
            UploadReply::Empty => Err(self.surface(
                ReportDeskError::Server("the server returned no report id".into()),
                "upload",
            )),
        }
    }

    /// Fetch report `id`, render it, then refresh the report list.
    pub async fn load_report(&mut self, id: i64) -> Result<Report, ReportDeskError> {
        info!(report_id = id, "Loading report");
        let fetched = match self.api.fetch_report(id).await {
            Ok(body) => Report::from_json(&body),
            Err(e) => Err(e),
        };

        let result = match fetched {
            Ok(report) => {
                self.render_report(&report);
                Ok(report)
            }
            Err(e) => Err(self.surface(e, "load report")),
        };

        // Already surfaced on failure
        let _ = self.refresh_report_list().await;

        result
    }

    /// Show `report` on the page. Returns the rendered sheet, or `None` when
    /// the content was unusable and the error state is shown instead.
    pub fn render_report(&mut self, report: &Report) -> Option<ReportSheet> {
        match &report.content {
            Some(content) => {
                let sheet = ReportSheet::from_content(report.id, content);
                let export_url = self.api.export_url(report.id);
                self.page.show_report(&sheet, &export_url);
                self.current = Some(report.id);
                Some(sheet)
            }
            None => {
                warn!(report_id = report.id, "Rendering invalid report state");
                self.page.show_invalid_report(INVALID_REPORT_MESSAGE);
                self.current = None;
                None
            }
        }
    }

    /// Replace the page's report list with the server's current list.
    pub async fn refresh_report_list(&mut self) -> Result<Vec<ListEntry>, ReportDeskError> {
        let fetched = match self.api.list_reports().await {
            Ok(body) => decode_report_list(&body),
            Err(e) => Err(e),
        };

        match fetched {
            Ok(summaries) => {
                let entries: Vec<ListEntry> = summaries.iter().map(ListEntry::from).collect();
                info!(count = entries.len(), "Report list refreshed");
                self.page.show_report_list(&entries);
                self.listed = entries.clone();
                Ok(entries)
            }
            Err(e) => Err(self.surface(e, "refresh report list")),
        }
    }

    /// Load the report at `position` (0-based) of the last listed entries.
    pub async fn activate_entry(&mut self, position: usize) -> Result<Report, ReportDeskError> {
        let Some(id) = self.listed.get(position).map(|e| e.report_id) else {
            let err = ReportDeskError::Input(format!(
                "No report at position {} (the list has {} entries).",
                position + 1,
                self.listed.len()
            ));
            return Err(self.surface(err, "open listed report"));
        };
        self.load_report(id).await
    }

    /// Download the export of report `id` into `directory`.
    pub async fn export_report(&mut self, id: i64, directory: &Path) -> Result<PathBuf, ReportDeskError> {
        info!(report_id = id, dir = %directory.display(), "Exporting report");
        let written = match self.api.export(id).await {
            Ok(file) => {
                let name = file.file_name.unwrap_or_else(|| format!("report_{}.md", id));
                write_export(directory, &name, &file.bytes).await
            }
            Err(e) => Err(e),
        };

        match written {
            Ok(path) => {
                info!(report_id = id, path = %path.display(), "Export saved");
                Ok(path)
            }
            Err(e) => Err(self.surface(e, "export")),
        }
    }

    /// Export the report currently on display.
    pub async fn export_current(&mut self, directory: &Path) -> Result<PathBuf, ReportDeskError> {
        let Some(id) = self.current else {
            let err = ReportDeskError::Input("No report is displayed. Open a report first.".into());
            return Err(self.surface(err, "export"));
        };
        self.export_report(id, directory).await
    }

    /// Log `err` and tell the user about it.
    fn surface(&mut self, err: ReportDeskError, action: &str) -> ReportDeskError {
        let class = err.classify();
        error!(action, error_type = class.error_type, error = %err, "Operation failed");
        self.page.notify(&notice(&err));
        err
    }
}

/// Text shown to the user for a failure.
pub fn notice(err: &ReportDeskError) -> String {
    match err {
        ReportDeskError::Input(message) => message.clone(),
        ReportDeskError::Server(message) => format!("Error: {}", message),
        other => format!("Error: {}", other),
    }
}

async fn read_upload(path: &Path, ai_model: Option<String>) -> Result<UploadFile, ReportDeskError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ReportDeskError::Input(format!("Not a file: {}", path.display())))?
        .to_string();

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        ReportDeskError::Input(format!("Cannot read {}: {}", path.display(), e))
    })?;

    Ok(UploadFile { file_name, bytes, ai_model })
}

/// Write `bytes` as `name` in `directory`. An existing file is kept and
/// the export goes to `stem-N.ext` instead.
async fn write_export(directory: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf, ReportDeskError> {
    tokio::fs::create_dir_all(directory).await?;

    let mut attempt = 0u32;
    loop {
        let path = directory.join(numbered_name(name, attempt));
        let opened = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;
        match opened {
            Ok(mut file) => {
                if attempt > 0 {
                    warn!(existing = name, path = %path.display(), "Export file already exists, saving under a new name");
                }
                file.write_all(bytes).await?;
                file.flush().await?;
                return Ok(path);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

fn numbered_name(name: &str, attempt: u32) -> String {
    if attempt == 0 {
        return name.to_string();
    }
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{}-{}.{}", stem, attempt, ext),
        _ => format!("{}-{}", name, attempt),
    }
}
