use serde_json::{json, Value};
use std::sync::LazyLock;

/// A `/report/{id}` body must at least identify the report.
pub static REPORT_ENVELOPE_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["id"],
        "properties": {
            "id": { "type": "integer" }
        }
    })
});

/// Analysis payload. Every field is optional and nullable.
pub static REPORT_CONTENT_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "report_title": { "$ref": "#/definitions/text" },
            "audit_organization": { "$ref": "#/definitions/text" },
            "audit_objectives": { "$ref": "#/definitions/text_list" },
            "overall_conclusion": { "$ref": "#/definitions/text" },
            "key_findings": { "$ref": "#/definitions/text_list" },
            "recommendations": { "$ref": "#/definitions/text_list" },
            "llm_insight": { "$ref": "#/definitions/text" },
            "potential_audit_objectives": { "$ref": "#/definitions/text_list" }
        },
        "definitions": {
            "text": { "type": ["string", "null"] },
            "text_list": {
                "type": ["array", "null"],
                "items": { "type": "string" }
            }
        }
    })
});
