use super::types::ReportDeskError;

/// Where a failure came from, as far as the user is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Rejected before any request was sent.
    ClientInput,
    /// The server replied with an `error` field.
    ServerReported,
    /// The request failed or the reply could not be understood.
    Transport,
    /// Local filesystem, configuration or internal failure.
    Local,
}

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub class: ErrorClass,
}

impl ReportDeskError {
    /// Classify this error into the user-facing taxonomy.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            ReportDeskError::Input(_) => ErrorClassification {
                error_type: "InputError",
                class: ErrorClass::ClientInput,
            },
            ReportDeskError::Server(_) => ErrorClassification {
                error_type: "ServerError",
                class: ErrorClass::ServerReported,
            },
            ReportDeskError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                class: ErrorClass::Transport,
            },
            ReportDeskError::MalformedResponse(_) => ErrorClassification {
                error_type: "MalformedResponseError",
                class: ErrorClass::Transport,
            },
            ReportDeskError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                class: ErrorClass::Transport,
            },
            ReportDeskError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                class: ErrorClass::Local,
            },
            ReportDeskError::Io(_) => ErrorClassification {
                error_type: "IoError",
                class: ErrorClass::Local,
            },
            ReportDeskError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                class: ErrorClass::Local,
            },
            ReportDeskError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                class: ErrorClass::Local,
            },
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportDeskError::Config(_) | ReportDeskError::Yaml(_) => 2,
            ReportDeskError::Input(_) => 3,
            ReportDeskError::Server(_) => 4,
            ReportDeskError::Network(_) | ReportDeskError::MalformedResponse(_) => 5,
            _ => 1,
        }
    }
}
