use crate::models::ReportSummary;
use super::html::html_escape;

/// One activatable entry in the report list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub report_id: i64,
    pub label: String,
    pub uploaded: Option<String>,
}

impl From<&ReportSummary> for ListEntry {
    fn from(summary: &ReportSummary) -> Self {
        Self {
            report_id: summary.id,
            label: summary.label(),
            uploaded: summary
                .uploaded_at()
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string()),
        }
    }
}

/// Markup for the list container. Each entry is tagged with its report id in
/// `data-report-id`; the written page is a static snapshot, and entries are
/// opened with `reportdesk open <id>` or `/select <n>` in the shell.
pub fn render_report_list_html(entries: &[ListEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "<li><a href=\"#\" class=\"text-blue-500 hover:underline\" data-report-id=\"{}\">{}</a></li>\n",
                entry.report_id,
                html_escape(&entry.label),
            )
        })
        .collect()
}
