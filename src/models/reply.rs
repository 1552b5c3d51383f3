use serde_json::Value;
use crate::errors::ReportDeskError;

/// What the server said about an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadReply {
    /// Analysis stored under this report id.
    Created(i64),
    /// The server refused the upload with a message.
    Rejected(String),
    /// Neither an id nor an error was present.
    Empty,
}

impl UploadReply {
    pub fn from_json(value: &Value) -> Self {
        if let Some(id) = value.get("id").and_then(Value::as_i64) {
            return UploadReply::Created(id);
        }
        match server_error_message(value) {
            Some(message) => UploadReply::Rejected(message),
            None => UploadReply::Empty,
        }
    }
}

/// The `error` message of a JSON body, if it carries one.
pub fn server_error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn check_server_error(value: &Value) -> Result<(), ReportDeskError> {
    match server_error_message(value) {
        Some(message) => Err(ReportDeskError::Server(message)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upload_created() {
        assert_eq!(UploadReply::from_json(&json!({ "id": 12 })), UploadReply::Created(12));
    }

    #[test]
    fn test_upload_rejected() {
        assert_eq!(
            UploadReply::from_json(&json!({ "error": "bad file" })),
            UploadReply::Rejected("bad file".into())
        );
    }

    #[test]
    fn test_upload_empty() {
        assert_eq!(
            UploadReply::from_json(&json!({ "message": "File uploaded and analyzed successfully" })),
            UploadReply::Empty
        );
        assert_eq!(UploadReply::from_json(&json!({ "error": null })), UploadReply::Empty);
    }

    #[test]
    fn test_check_server_error_passes_plain_data() {
        assert!(check_server_error(&json!([1, 2])).is_ok());
        assert!(check_server_error(&json!({ "id": 1 })).is_ok());
    }
}
