use crate::models::ReportContent;
use super::fields::{render_field, render_list, NOT_AVAILABLE};
use super::html::{html_escape, list_items};

/// A report with every placeholder already applied; what the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSheet {
    pub report_id: i64,
    pub title: String,
    pub organization: String,
    /// Objectives joined with `", "`.
    pub objectives: String,
    pub conclusion: String,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
    pub insight: String,
    pub future_objectives: Vec<String>,
}

impl ReportSheet {
    pub fn from_content(report_id: i64, content: &ReportContent) -> Self {
        Self {
            report_id,
            title: render_field(content.report_title.as_deref(), NOT_AVAILABLE),
            organization: render_field(content.audit_organization.as_deref(), NOT_AVAILABLE),
            objectives: render_list(content.audit_objectives.as_deref(), NOT_AVAILABLE).join(", "),
            conclusion: render_field(content.overall_conclusion.as_deref(), NOT_AVAILABLE),
            findings: render_list(content.key_findings.as_deref(), NOT_AVAILABLE),
            recommendations: render_list(content.recommendations.as_deref(), NOT_AVAILABLE),
            insight: render_field(content.llm_insight.as_deref(), NOT_AVAILABLE),
            future_objectives: render_list(content.potential_audit_objectives.as_deref(), NOT_AVAILABLE),
        }
    }

    /// Markup for the result container.
    pub fn to_html(&self) -> String {
        format!(
            r#"<h3 class="font-bold">{title}</h3>
<p><strong>Audit Organization:</strong> {organization}</p>
<p><strong>Audit Objectives:</strong> {objectives}</p>
<p><strong>Overall Conclusion:</strong> {conclusion}</p>
<h4 class="font-semibold mt-4">Key Findings:</h4>
<ul>{findings}</ul>
<h4 class="font-semibold mt-4">Recommendations:</h4>
<ul>{recommendations}</ul>
<p><strong>AI-Generated Insight:</strong> {insight}</p>
<h4 class="font-semibold mt-4">Potential Future Audit Objectives:</h4>
<ul>{future}</ul>
"#,
            title = html_escape(&self.title),
            organization = html_escape(&self.organization),
            objectives = html_escape(&self.objectives),
            conclusion = html_escape(&self.conclusion),
            findings = list_items(&self.findings),
            recommendations = list_items(&self.recommendations),
            insight = html_escape(&self.insight),
            future = list_items(&self.future_objectives),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_all_fields_absent_render_placeholders() {
        let sheet = ReportSheet::from_content(1, &ReportContent::default());
        assert_eq!(sheet.title, "N/A");
        assert_eq!(sheet.organization, "N/A");
        assert_eq!(sheet.objectives, "N/A");
        assert_eq!(sheet.conclusion, "N/A");
        assert_eq!(sheet.findings, vec!["N/A"]);
        assert_eq!(sheet.recommendations, vec!["N/A"]);
        assert_eq!(sheet.insight, "N/A");
        assert_eq!(sheet.future_objectives, vec!["N/A"]);

        let html = sheet.to_html();
        assert!(html.contains(r#"<h3 class="font-bold">N/A</h3>"#));
        assert!(html.contains("<p><strong>AI-Generated Insight:</strong> N/A</p>"));
        assert_eq!(html.matches("<li>N/A</li>").count(), 3);
    }

    #[test]
    fn test_every_presence_combination_renders() {
        let text = |present: bool, blank: bool, value: &str| match (present, blank) {
            (true, _) => Some(value.to_string()),
            (false, true) => Some(String::new()),
            (false, false) => None,
        };
        let list = |present: bool, blank: bool, value: &str| match (present, blank) {
            (true, _) => Some(vec![format!("{}-1", value), format!("{}-2", value)]),
            (false, true) => Some(Vec::new()),
            (false, false) => None,
        };

        for blank in [false, true] {
            for mask in 0u32..256 {
                let on = |bit: u32| mask & (1 << bit) != 0;
                let content = ReportContent {
                    report_title: text(on(0), blank, "title"),
                    audit_organization: text(on(1), blank, "org"),
                    audit_objectives: list(on(2), blank, "objective"),
                    overall_conclusion: text(on(3), blank, "conclusion"),
                    key_findings: list(on(4), blank, "finding"),
                    recommendations: list(on(5), blank, "recommendation"),
                    llm_insight: text(on(6), blank, "insight"),
                    potential_audit_objectives: list(on(7), blank, "future"),
                };

                let html = ReportSheet::from_content(1, &content).to_html();

                let absent = 8 - mask.count_ones() as usize;
                assert_eq!(html.matches("N/A").count(), absent, "mask {:08b} blank {}", mask, blank);
                for (bit, marker) in ["title", "org", "objective", "conclusion", "finding", "recommendation", "insight", "future"]
                    .iter()
                    .enumerate()
                {
                    assert_eq!(html.contains(marker), on(bit as u32), "{} with mask {:08b}", marker, mask);
                }
            }
        }
    }

    #[test]
    fn test_findings_render_one_entry_each() {
        let content = ReportContent {
            key_findings: strings(&["A", "B"]),
            ..Default::default()
        };
        let sheet = ReportSheet::from_content(1, &content);
        assert_eq!(sheet.findings, vec!["A", "B"]);
        assert!(sheet.to_html().contains("<ul><li>A</li><li>B</li></ul>"));
    }

    #[test]
    fn test_objectives_comma_joined() {
        let content = ReportContent {
            audit_objectives: strings(&["X", "Y"]),
            ..Default::default()
        };
        let sheet = ReportSheet::from_content(1, &content);
        assert_eq!(sheet.objectives, "X, Y");
        assert!(sheet.to_html().contains("<p><strong>Audit Objectives:</strong> X, Y</p>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let content = ReportContent {
            report_title: Some("<script>alert(1)</script>".into()),
            ..Default::default()
        };
        let html = ReportSheet::from_content(1, &content).to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
