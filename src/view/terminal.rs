use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::render::{ListEntry, ReportSheet};
use super::page::Page;

/// Renders the report page to the terminal. The loading indicator is an
/// `indicatif` spinner on stderr.
pub struct TerminalPage {
    spinner_enabled: bool,
    spinner: Option<ProgressBar>,
}

impl TerminalPage {
    pub fn new(quiet: bool) -> Self {
        Self {
            spinner_enabled: !quiet && console::Term::stderr().is_term(),
            spinner: None,
        }
    }
}

impl Page for TerminalPage {
    fn has_loading_indicator(&self) -> bool {
        self.spinner_enabled
    }

    fn set_loading(&mut self, visible: bool) {
        if !self.spinner_enabled {
            return;
        }
        if visible {
            if self.spinner.is_some() {
                return;
            }
            let bar = ProgressBar::new_spinner();
            if let Ok(spinner_style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
                bar.set_style(spinner_style);
            }
            bar.set_message("Uploading and analyzing...");
            bar.enable_steady_tick(Duration::from_millis(120));
            self.spinner = Some(bar);
        } else if let Some(bar) = self.spinner.take() {
            bar.finish_and_clear();
        }
    }

    fn show_report(&mut self, sheet: &ReportSheet, export_url: &str) {
        println!("{}", render_sheet(sheet));
        println!("  {} {}", style("Export:").dim(), style(export_url).underlined());
    }

    fn show_invalid_report(&mut self, message: &str) {
        println!("{}", render_error(message));
    }

    fn show_report_list(&mut self, entries: &[ListEntry]) {
        println!("{}", render_list(entries));
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{}", render_error(message));
    }
}

impl Drop for TerminalPage {
    fn drop(&mut self) {
        if let Some(bar) = self.spinner.take() {
            bar.finish_and_clear();
        }
    }
}

pub fn render_sheet(sheet: &ReportSheet) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{} {}\n",
        style(&sheet.title).white().bold(),
        style(format!("#{}", sheet.report_id)).dim()
    ));
    out.push_str(&format!("  {} {}\n", style("Audit Organization:").cyan(), sheet.organization));
    out.push_str(&format!("  {} {}\n", style("Audit Objectives:").cyan(), sheet.objectives));
    out.push_str(&format!("  {} {}\n", style("Overall Conclusion:").cyan(), sheet.conclusion));
    push_bullets(&mut out, "Key Findings:", &sheet.findings);
    push_bullets(&mut out, "Recommendations:", &sheet.recommendations);
    out.push_str(&format!("  {} {}\n", style("AI-Generated Insight:").cyan(), sheet.insight));
    push_bullets(&mut out, "Potential Future Audit Objectives:", &sheet.future_objectives);
    out
}

fn push_bullets(out: &mut String, heading: &str, items: &[String]) {
    out.push_str(&format!("\n  {}\n", style(heading).cyan().bold()));
    for item in items {
        out.push_str(&format!("    {} {}\n", style("•").dim(), item));
    }
}

pub fn render_list(entries: &[ListEntry]) -> String {
    if entries.is_empty() {
        return render_info("No reports yet.");
    }
    let mut out = format!("\n{}\n", style("Previous Reports").white().bold());
    for (i, entry) in entries.iter().enumerate() {
        let uploaded = entry
            .uploaded
            .as_deref()
            .map(|ts| format!("  {}", style(ts).dim()))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {:>3}. {}{}\n",
            style(i + 1).cyan(),
            entry.label,
            uploaded
        ));
    }
    out
}

pub fn render_error(msg: &str) -> String {
    format!("{} {}", style("✗").red(), style(msg).red())
}

pub fn render_success(msg: &str) -> String {
    format!("{} {}", style("✓").green(), msg)
}

pub fn render_info(msg: &str) -> String {
    format!("{}", style(msg).dim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportContent;

    #[test]
    fn test_sheet_text_contains_fields() {
        console::set_colors_enabled(false);
        let content = ReportContent {
            report_title: Some("Grants Audit".into()),
            key_findings: Some(vec!["A".into(), "B".into()]),
            ..Default::default()
        };
        let text = render_sheet(&ReportSheet::from_content(2, &content));
        assert!(text.contains("Grants Audit #2"));
        assert!(text.contains("• A\n"));
        assert!(text.contains("• B\n"));
        assert!(text.contains("Audit Organization: N/A"));
    }

    #[test]
    fn test_list_text_numbers_entries() {
        console::set_colors_enabled(false);
        let entries = vec![
            ListEntry { report_id: 1, label: "a.pdf (Version 1)".into(), uploaded: None },
            ListEntry { report_id: 2, label: "b.pdf (Version 2)".into(), uploaded: Some("2024-03-09 08:15".into()) },
        ];
        let text = render_list(&entries);
        assert!(text.contains("  1. a.pdf (Version 1)\n"));
        assert!(text.contains("  2. b.pdf (Version 2)  2024-03-09 08:15\n"));
    }

    #[test]
    fn test_empty_list_text() {
        console::set_colors_enabled(false);
        assert_eq!(render_list(&[]), "No reports yet.");
    }

    #[test]
    fn test_quiet_page_has_no_spinner() {
        let mut page = TerminalPage::new(true);
        assert!(!page.has_loading_indicator());
        page.set_loading(true);
        assert!(page.spinner.is_none());
    }
}
