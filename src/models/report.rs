use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use tracing::warn;

use crate::errors::ReportDeskError;
use super::reply::check_server_error;
use super::schema::{REPORT_CONTENT_SCHEMA, REPORT_ENVELOPE_SCHEMA};

/// Structured audit analysis produced by the server for an uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContent {
    #[serde(default)]
    pub report_title: Option<String>,
    #[serde(default)]
    pub audit_organization: Option<String>,
    #[serde(default)]
    pub audit_objectives: Option<Vec<String>>,
    #[serde(default)]
    pub overall_conclusion: Option<String>,
    #[serde(default)]
    pub key_findings: Option<Vec<String>>,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
    #[serde(default)]
    pub llm_insight: Option<String>,
    #[serde(default)]
    pub potential_audit_objectives: Option<Vec<String>>,
}

/// A stored analysis result as returned by `/report/{id}`.
///
/// Only `id` is required; the rest of the envelope is informational and
/// missing or mistyped values are left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: i64,
    pub file_name: String,
    pub version: Option<i64>,
    pub upload_date: Option<String>,
    /// `None` when the server sent a `content` that is not a JSON object.
    pub content: Option<ReportContent>,
}

/// One element of the `/reports` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub id: i64,
    pub file_name: String,
    pub version: i64,
    #[serde(default)]
    pub upload_date: Option<String>,
}

impl Report {
    /// Decode a `/report/{id}` body. An `error` field wins over any data.
    pub fn from_json(value: &Value) -> Result<Self, ReportDeskError> {
        check_server_error(value)?;

        let violations = schema_violations(&REPORT_ENVELOPE_SCHEMA, value)?;
        if !violations.is_empty() {
            let details: Vec<String> = violations
                .iter()
                .map(|(path, message)| format!("{} at {}", message, path))
                .collect();
            return Err(ReportDeskError::MalformedResponse(format!(
                "report envelope failed validation: {}",
                details.join("; ")
            )));
        }

        let id = value
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| ReportDeskError::MalformedResponse("report id is not an integer".into()))?;

        let content = match value.get("content") {
            Some(Value::Object(map)) => ReportContent::from_object(id, map),
            other => {
                warn!(report_id = id, content = ?other.map(value_kind), "Report content is not an object");
                None
            }
        };

        Ok(Self {
            id,
            file_name: text_field(value, "file_name").unwrap_or_default(),
            version: value.get("version").and_then(Value::as_i64),
            upload_date: text_field(value, "upload_date"),
            content,
        })
    }
}

impl ReportContent {
    /// Keep every field that matches the content schema and drop the rest,
    /// so a single mistyped field renders as a placeholder instead of
    /// failing the whole report.
    fn from_object(report_id: i64, map: &Map<String, Value>) -> Option<Self> {
        let value = Value::Object(map.clone());
        let bad_fields: BTreeSet<String> = match schema_violations(&REPORT_CONTENT_SCHEMA, &value) {
            Ok(violations) => violations
                .into_iter()
                .filter_map(|(path, _)| top_level_field(&path))
                .collect(),
            Err(e) => {
                warn!(report_id, error = %e, "Content schema unavailable");
                return None;
            }
        };

        let mut cleaned = map.clone();
        for field in &bad_fields {
            warn!(report_id, field = %field, "Dropping mistyped report field");
            cleaned.remove(field);
        }

        match serde_json::from_value(Value::Object(cleaned)) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!(report_id, error = %e, "Report content could not be decoded");
                None
            }
        }
    }
}

impl ReportSummary {
    /// Label shown for this report in the list, e.g. `a.pdf (Version 1)`.
    pub fn label(&self) -> String {
        format!("{} (Version {})", self.file_name, self.version)
    }

    pub fn uploaded_at(&self) -> Option<DateTime<FixedOffset>> {
        parse_upload_date(self.upload_date.as_deref())
    }
}

/// Decode a `/reports` body. Entries that do not carry the envelope fields
/// are skipped.
pub fn decode_report_list(value: &Value) -> Result<Vec<ReportSummary>, ReportDeskError> {
    check_server_error(value)?;

    let items = value.as_array().ok_or_else(|| {
        ReportDeskError::MalformedResponse(format!("expected a report list, got {}", value_kind(value)))
    })?;

    let mut summaries = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match serde_json::from_value::<ReportSummary>(item.clone()) {
            Ok(summary) => summaries.push(summary),
            Err(e) => warn!(index, error = %e, "Skipping malformed report list entry"),
        }
    }
    Ok(summaries)
}

/// RFC 3339, or an ISO timestamp without offset, which is taken as UTC.
fn parse_upload_date(raw: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let raw = raw?;
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Validate `instance` and return `(instance path, message)` per violation.
fn schema_violations(schema: &Value, instance: &Value) -> Result<Vec<(String, String)>, ReportDeskError> {
    let compiled = jsonschema::JSONSchema::compile(schema)
        .map_err(|e| ReportDeskError::Internal(format!("Schema compilation error: {}", e)))?;
    let violations = match compiled.validate(instance) {
        Ok(()) => Vec::new(),
        Err(errors) => errors.map(|e| (e.instance_path.to_string(), e.to_string())).collect(),
    };
    Ok(violations)
}

fn top_level_field(pointer: &str) -> Option<String> {
    pointer
        .trim_start_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_report_decodes() {
        let report = Report::from_json(&json!({
            "id": 7,
            "file_name": "q3-audit.pdf",
            "version": 2,
            "upload_date": "2024-05-01T10:00:00.123456+00:00",
            "content": {
                "report_title": "Q3 Procurement Audit",
                "audit_objectives": ["Assess controls", "Review spend"],
                "key_findings": ["A", "B"]
            }
        }))
        .unwrap();

        assert_eq!(report.id, 7);
        assert_eq!(report.version, Some(2));
        assert_eq!(report.upload_date.as_deref(), Some("2024-05-01T10:00:00.123456+00:00"));
        let content = report.content.unwrap();
        assert_eq!(content.report_title.as_deref(), Some("Q3 Procurement Audit"));
        assert_eq!(content.key_findings, Some(vec!["A".to_string(), "B".to_string()]));
        assert!(content.recommendations.is_none());
    }

    #[test]
    fn test_error_field_takes_priority() {
        let err = Report::from_json(&json!({
            "error": "Report not found",
            "id": 1, "file_name": "a.pdf", "version": 1, "content": {}
        }))
        .unwrap_err();
        assert!(matches!(err, ReportDeskError::Server(ref m) if m == "Report not found"));
    }

    #[test]
    fn test_missing_id_is_malformed() {
        let err = Report::from_json(&json!({ "file_name": "a.pdf", "version": 1 })).unwrap_err();
        assert!(matches!(err, ReportDeskError::MalformedResponse(_)));
    }

    #[test]
    fn test_report_without_version_still_renders() {
        let report = Report::from_json(&json!({
            "id": 9,
            "upload_date": 1714557600,
            "content": { "report_title": "Untitled audit" }
        }))
        .unwrap();
        assert_eq!(report.version, None);
        assert_eq!(report.file_name, "");
        assert_eq!(report.upload_date, None);
        assert_eq!(
            report.content.unwrap().report_title.as_deref(),
            Some("Untitled audit")
        );
    }

    #[test]
    fn test_non_integer_id_is_malformed() {
        let err = Report::from_json(&json!({ "id": "7", "content": {} })).unwrap_err();
        assert!(matches!(err, ReportDeskError::MalformedResponse(_)));
    }

    #[test]
    fn test_non_object_content_is_invalid() {
        for content in [json!(null), json!("text"), json!([1, 2])] {
            let report = Report::from_json(&json!({
                "id": 1, "file_name": "a.pdf", "version": 1, "content": content
            }))
            .unwrap();
            assert!(report.content.is_none());
        }
        let missing = Report::from_json(&json!({ "id": 1, "file_name": "a.pdf", "version": 1 })).unwrap();
        assert!(missing.content.is_none());
    }

    #[test]
    fn test_mistyped_fields_are_dropped() {
        let report = Report::from_json(&json!({
            "id": 3, "file_name": "a.pdf", "version": 1,
            "content": {
                "report_title": 42,
                "key_findings": "not a list",
                "recommendations": ["ok", 5],
                "llm_insight": "Useful insight"
            }
        }))
        .unwrap();
        let content = report.content.unwrap();
        assert!(content.report_title.is_none());
        assert!(content.key_findings.is_none());
        assert!(content.recommendations.is_none());
        assert_eq!(content.llm_insight.as_deref(), Some("Useful insight"));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let report = Report::from_json(&json!({
            "id": 3, "file_name": "a.pdf", "version": 1,
            "content": { "report_title": null, "key_findings": null }
        }))
        .unwrap();
        assert_eq!(report.content.unwrap(), ReportContent::default());
    }

    #[test]
    fn test_report_list_decodes_and_labels() {
        let list = decode_report_list(&json!([
            { "id": 1, "file_name": "a.pdf", "version": 1 },
            { "id": 2, "file_name": "b.pdf", "version": 2, "content": {} }
        ]))
        .unwrap();
        let labels: Vec<String> = list.iter().map(ReportSummary::label).collect();
        assert_eq!(labels, vec!["a.pdf (Version 1)", "b.pdf (Version 2)"]);
    }

    #[test]
    fn test_report_list_skips_malformed_entries() {
        let list = decode_report_list(&json!([
            { "id": 1, "file_name": "a.pdf", "version": 1 },
            { "file_name": "orphan.pdf" },
            "garbage"
        ]))
        .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 1);
    }

    #[test]
    fn test_report_list_rejects_non_array() {
        let err = decode_report_list(&json!({ "reports": [] })).unwrap_err();
        assert!(matches!(err, ReportDeskError::MalformedResponse(_)));
    }

    #[test]
    fn test_upload_date_with_offset_and_naive() {
        let mut summary = ReportSummary {
            id: 1,
            file_name: "a.pdf".into(),
            version: 1,
            upload_date: Some("2024-05-01T10:00:00.123456+02:00".into()),
        };
        let with_offset = summary.uploaded_at().unwrap();
        assert_eq!(with_offset.offset().local_minus_utc(), 2 * 3600);

        summary.upload_date = Some("2024-05-01T10:00:00.123456".into());
        let naive = summary.uploaded_at().unwrap();
        assert_eq!(naive.offset().local_minus_utc(), 0);
        assert_eq!(naive.to_rfc3339(), "2024-05-01T10:00:00.123456+00:00");

        summary.upload_date = Some("2024-05-01T10:00:00".into());
        assert!(summary.uploaded_at().is_some());
    }

    #[test]
    fn test_unparseable_upload_date() {
        let summary = ReportSummary {
            id: 1,
            file_name: "a.pdf".into(),
            version: 1,
            upload_date: Some("yesterday".into()),
        };
        assert!(summary.uploaded_at().is_none());
    }
}
