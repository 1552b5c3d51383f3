use crate::render::html::html_escape;
use crate::render::{render_report_list_html, ListEntry, ReportSheet};
use super::page::Page;

/// In-memory model of the report page: the result panel, the export control,
/// the report list, and an optional loading indicator.
#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    /// `None` when the page has no loading indicator element.
    loading_indicator: Option<bool>,
    result_html: String,
    result_visible: bool,
    export_href: Option<String>,
    export_visible: bool,
    list_html: String,
    list_entries: Vec<ListEntry>,
    notifications: Vec<String>,
}

impl HtmlPage {
    pub fn new() -> Self {
        Self {
            loading_indicator: Some(false),
            ..Default::default()
        }
    }

    /// A page whose template has no loading indicator.
    pub fn without_loading_indicator() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading_indicator.unwrap_or(false)
    }

    pub fn result_html(&self) -> &str {
        &self.result_html
    }

    pub fn is_result_visible(&self) -> bool {
        self.result_visible
    }

    /// Where the export control navigates, when it is shown.
    pub fn export_href(&self) -> Option<&str> {
        if self.export_visible {
            self.export_href.as_deref()
        } else {
            None
        }
    }

    pub fn list_html(&self) -> &str {
        &self.list_html
    }

    pub fn list_entries(&self) -> &[ListEntry] {
        &self.list_entries
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// The whole page as a standalone HTML document.
    pub fn to_document(&self) -> String {
        let hidden = |visible: bool| if visible { "" } else { " hidden" };
        let loading = match self.loading_indicator {
            Some(true) => "<div id=\"loadingIndicator\" style=\"display: flex\">Analyzing...</div>\n",
            Some(false) => "<div id=\"loadingIndicator\" style=\"display: none\">Analyzing...</div>\n",
            None => "",
        };
        let export = match &self.export_href {
            Some(href) => format!(
                "<a id=\"exportBtn\" class=\"btn{}\" href=\"{}\">Export Report</a>",
                hidden(self.export_visible),
                html_escape(href)
            ),
            None => "<a id=\"exportBtn\" class=\"btn hidden\">Export Report</a>".to_string(),
        };
        let notices: String = self
            .notifications
            .iter()
            .map(|n| format!("<li>{}</li>", html_escape(n)))
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Audit Report Analyzer</title>
<style>.hidden {{ display: none; }}</style>
</head>
<body>
<form id="uploadForm" action="/upload" method="post" enctype="multipart/form-data">
<input type="file" id="pdfFile" name="file" accept=".pdf">
<button type="submit">Upload and Analyze</button>
</form>
{loading}<ul id="notifications">{notices}</ul>
<div id="analysisResult" class="{result_class}">
<div id="resultContent">
{result}</div>
{export}
</div>
<h2>Previous Reports</h2>
<ul id="reportsList">
{list}</ul>
</body>
</html>
"#,
            loading = loading,
            notices = notices,
            result_class = hidden(self.result_visible).trim_start(),
            result = self.result_html,
            export = export,
            list = self.list_html,
        )
    }
}

impl Page for HtmlPage {
    fn has_loading_indicator(&self) -> bool {
        self.loading_indicator.is_some()
    }

    fn set_loading(&mut self, visible: bool) {
        if let Some(state) = self.loading_indicator.as_mut() {
            *state = visible;
        }
    }

    fn show_report(&mut self, sheet: &ReportSheet, export_url: &str) {
        self.result_html = sheet.to_html();
        self.result_visible = true;
        self.export_href = Some(export_url.to_string());
        self.export_visible = true;
    }

    fn show_invalid_report(&mut self, message: &str) {
        self.result_html = format!("<p class=\"text-red-500\">{}</p>", html_escape(message));
        self.result_visible = true;
        self.export_visible = false;
    }

    fn show_report_list(&mut self, entries: &[ListEntry]) {
        self.list_html = render_report_list_html(entries);
        self.list_entries = entries.to_vec();
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
