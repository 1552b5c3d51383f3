use crate::render::{ListEntry, ReportSheet};

/// The surface the report client renders into.
///
/// Implementations own their output; the client only tells them what to
/// show. All methods are infallible: a page that cannot draw drops output
/// rather than failing the workflow.
pub trait Page: Send {
    /// Whether this page has a loading indicator at all.
    fn has_loading_indicator(&self) -> bool;

    /// Show or hide the loading indicator. No-op without one.
    fn set_loading(&mut self, visible: bool);

    /// Fill the result panel, reveal it, and point the export control at
    /// `export_url`.
    fn show_report(&mut self, sheet: &ReportSheet, export_url: &str);

    /// Show the error state in the result panel and hide the export control.
    fn show_invalid_report(&mut self, message: &str);

    /// Replace the list container's contents.
    fn show_report_list(&mut self, entries: &[ListEntry]);

    /// Blocking user notification.
    fn notify(&mut self, message: &str);
}

impl<A: Page, B: Page> Page for (A, B) {
    fn has_loading_indicator(&self) -> bool {
        self.0.has_loading_indicator() || self.1.has_loading_indicator()
    }

    fn set_loading(&mut self, visible: bool) {
        self.0.set_loading(visible);
        self.1.set_loading(visible);
    }

    fn show_report(&mut self, sheet: &ReportSheet, export_url: &str) {
        self.0.show_report(sheet, export_url);
        self.1.show_report(sheet, export_url);
    }

    fn show_invalid_report(&mut self, message: &str) {
        self.0.show_invalid_report(message);
        self.1.show_invalid_report(message);
    }

    fn show_report_list(&mut self, entries: &[ListEntry]) {
        self.0.show_report_list(entries);
        self.1.show_report_list(entries);
    }

    fn notify(&mut self, message: &str) {
        self.0.notify(message);
        self.1.notify(message);
    }
}
